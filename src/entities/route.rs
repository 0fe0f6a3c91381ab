use serde::{Deserialize, Serialize};

/// How a route estimate was obtained, in decreasing order of
/// confidence. Consumers may rely on this to judge trustworthiness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateMethod {
    DistanceMatrix,
    GeocodedEstimate,
    FallbackEstimate,
}

/// Distance and duration for a single origin/destination pair.
/// Created fresh per request and never mutated.
///
/// `toll_estimate` is derived by the distance-matrix strategy only;
/// lower-confidence strategies leave it at zero.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEstimate {
    pub distance_km: f64,
    pub duration_min: f64,
    pub method: EstimateMethod,
    pub distance_text: String,
    pub duration_text: String,
    pub toll_estimate: f64,
}
