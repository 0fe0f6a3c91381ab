mod booking;
mod fare;
mod quote;
mod route;

pub use booking::{BookingRequest, Coordinates, ServiceType, VehicleType};
pub use fare::FareBreakdown;
pub use quote::Quote;
pub use route::{EstimateMethod, RouteEstimate};
