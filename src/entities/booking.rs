use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Normalized geographic point. Coordinates arriving in any other
/// shape are converted to this at the ingestion boundary.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    LuxurySedan,
    PremiumLuxurySedan,
    Suv,
    #[serde(rename = "7_seater")]
    SevenSeater,
    #[serde(rename = "people_mover_11_seater")]
    PeopleMover11Seater,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Base,
    Hourly,
    Events,
}

/// A ride request as submitted by the booking flow. Field names on
/// the wire are camelCase, matching the downstream JSON contract.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub pickup_address: String,
    pub dropoff_address: String,
    #[serde(default)]
    pub pickup_coordinates: Option<Coordinates>,
    #[serde(default)]
    pub dropoff_coordinates: Option<Coordinates>,
    pub vehicle_type: VehicleType,
    pub service_type: ServiceType,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(default)]
    pub hours: Option<u32>,
    #[serde(default)]
    pub waiting_time_minutes: Option<u32>,
    #[serde(default)]
    pub additional_stops: Option<u32>,
    #[serde(default)]
    pub car_decoration: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_type_wire_names() {
        let suv: VehicleType = serde_json::from_str("\"suv\"").unwrap();
        assert_eq!(suv, VehicleType::Suv);

        let seven: VehicleType = serde_json::from_str("\"7_seater\"").unwrap();
        assert_eq!(seven, VehicleType::SevenSeater);

        let mover: VehicleType = serde_json::from_str("\"people_mover_11_seater\"").unwrap();
        assert_eq!(mover, VehicleType::PeopleMover11Seater);

        assert!(serde_json::from_str::<VehicleType>("\"rickshaw\"").is_err());
    }

    #[test]
    fn request_accepts_camel_case_body() {
        let body = r#"{
            "pickupAddress": "123 Collins St, Melbourne",
            "dropoffAddress": "Melbourne Airport T2",
            "vehicleType": "luxury_sedan",
            "serviceType": "base",
            "date": "2025-06-04",
            "time": "10:30:00",
            "waitingTimeMinutes": 20
        }"#;

        let request: BookingRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.vehicle_type, VehicleType::LuxurySedan);
        assert_eq!(request.service_type, ServiceType::Base);
        assert_eq!(request.waiting_time_minutes, Some(20));
        assert!(request.pickup_coordinates.is_none());
        assert!(request.hours.is_none());
    }
}
