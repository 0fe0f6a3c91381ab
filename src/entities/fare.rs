use serde::{Deserialize, Serialize};

use crate::entities::EstimateMethod;

/// Itemized price quote. Every component is rounded to two decimals
/// before entering the next stage, and `total_price` is the rounded
/// sum of the rounded components; the order is fixed to stay
/// penny-identical with the legacy pricing sheet.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareBreakdown {
    pub base_price: f64,
    pub km_charges: f64,
    pub time_charges: f64,
    pub peak_surcharge: f64,
    pub additional_fees: f64,
    pub tolls: f64,
    pub gst: f64,
    pub total_price: f64,
    pub distance_km: f64,
    pub duration_min: f64,
    pub distance_text: String,
    pub duration_text: String,
    pub method: EstimateMethod,
    pub is_peak_time: bool,
    pub is_airport_trip: bool,
}
