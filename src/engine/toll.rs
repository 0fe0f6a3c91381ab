//! Heuristic toll estimation from trip distance. Deterministic: the
//! short-trip tier uses the midpoint of the legacy randomized range.

const TOLL_FREE_BELOW_KM: f64 = 8.0;
const SHORT_TRIP_TOLL: f64 = 2.50;
const MID_TRIP_RATE: f64 = 0.15;
const LONG_TRIP_RATE: f64 = 0.25;
const LONG_TRIP_MINIMUM: f64 = 15.0;
const LONG_TRIP_MINIMUM_ABOVE_KM: f64 = 50.0;
const CAP_RATIO: f64 = 0.80;

pub fn estimate(distance_km: f64) -> f64 {
    if distance_km < TOLL_FREE_BELOW_KM {
        return 0.0;
    }

    let toll = if distance_km < 15.0 {
        SHORT_TRIP_TOLL
    } else if distance_km <= 30.0 {
        distance_km * MID_TRIP_RATE
    } else {
        distance_km * LONG_TRIP_RATE
    };

    let toll = if distance_km > LONG_TRIP_MINIMUM_ABOVE_KM {
        toll.max(LONG_TRIP_MINIMUM)
    } else {
        toll
    };

    toll.min(distance_km * CAP_RATIO)
}
