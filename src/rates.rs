use serde::Deserialize;
use std::collections::HashMap;

use crate::entities::VehicleType;
use crate::error::{config_error, Error};

/// Immutable pricing configuration, loaded once at process start and
/// injected into the engine. Amounts are in whole currency units.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateTable {
    pub vehicles: HashMap<VehicleType, VehicleRates>,
    /// Kilometers included in the base fare for non-hourly services.
    pub base_kilometers: f64,
    pub peak_surcharge_rate: f64,
    pub gst_rate: f64,
    pub fees: Fees,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRates {
    pub base_price: f64,
    pub events_price: f64,
    pub per_km_rate: f64,
    pub per_minute_rate: f64,
    pub hourly_rate: f64,
    pub hourly_minimum_hours: u32,
    pub hourly_base_km_per_hour: f64,
    pub hourly_excess_km_rate: f64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fees {
    pub airport: f64,
    /// Charged per started 15-minute block of waiting time.
    pub waiting_per_block: f64,
    pub per_stop: f64,
    pub event_decoration: f64,
}

impl RateTable {
    /// Unknown vehicles are a hard configuration error, never a
    /// silent fall-through to a default rate.
    pub fn vehicle(&self, vehicle_type: VehicleType) -> Result<&VehicleRates, Error> {
        self.vehicles.get(&vehicle_type).ok_or_else(config_error)
    }
}

impl Default for RateTable {
    fn default() -> Self {
        let vehicles = HashMap::from([
            (
                VehicleType::LuxurySedan,
                VehicleRates {
                    base_price: 85.0,
                    events_price: 120.0,
                    per_km_rate: 2.20,
                    per_minute_rate: 0.50,
                    hourly_rate: 145.0,
                    hourly_minimum_hours: 2,
                    hourly_base_km_per_hour: 80.0,
                    hourly_excess_km_rate: 2.00,
                },
            ),
            (
                VehicleType::PremiumLuxurySedan,
                VehicleRates {
                    base_price: 110.0,
                    events_price: 150.0,
                    per_km_rate: 2.80,
                    per_minute_rate: 0.65,
                    hourly_rate: 185.0,
                    hourly_minimum_hours: 2,
                    hourly_base_km_per_hour: 80.0,
                    hourly_excess_km_rate: 2.50,
                },
            ),
            (
                VehicleType::Suv,
                VehicleRates {
                    base_price: 95.0,
                    events_price: 130.0,
                    per_km_rate: 2.45,
                    per_minute_rate: 0.55,
                    hourly_rate: 165.0,
                    hourly_minimum_hours: 2,
                    hourly_base_km_per_hour: 80.0,
                    hourly_excess_km_rate: 2.20,
                },
            ),
            (
                VehicleType::SevenSeater,
                VehicleRates {
                    base_price: 105.0,
                    events_price: 140.0,
                    per_km_rate: 2.60,
                    per_minute_rate: 0.60,
                    hourly_rate: 175.0,
                    hourly_minimum_hours: 2,
                    hourly_base_km_per_hour: 80.0,
                    hourly_excess_km_rate: 2.35,
                },
            ),
            (
                VehicleType::PeopleMover11Seater,
                VehicleRates {
                    base_price: 150.0,
                    events_price: 190.0,
                    per_km_rate: 3.20,
                    per_minute_rate: 0.75,
                    hourly_rate: 220.0,
                    hourly_minimum_hours: 2,
                    hourly_base_km_per_hour: 80.0,
                    hourly_excess_km_rate: 2.90,
                },
            ),
        ]);

        Self {
            vehicles,
            base_kilometers: 15.0,
            peak_surcharge_rate: 0.15,
            gst_rate: 0.10,
            fees: Fees {
                airport: 25.0,
                waiting_per_block: 10.0,
                per_stop: 15.0,
                event_decoration: 50.0,
            },
        }
    }
}
