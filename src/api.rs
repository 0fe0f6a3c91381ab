use async_trait::async_trait;

use crate::entities::{BookingRequest, Quote, RouteEstimate};
use crate::error::Error;

#[async_trait]
pub trait RouteAPI {
    /// Resolves distance and duration for an origin/destination pair.
    ///
    /// Never fails: strategies are tried in order of confidence and
    /// total exhaustion yields a synthesized estimate tagged
    /// `fallback_estimate`.
    async fn resolve_route(&self, origin: &str, destination: &str) -> RouteEstimate;
}

#[async_trait]
pub trait QuoteAPI {
    async fn create_quote(&self, request: BookingRequest) -> Result<Quote, Error>;
}

pub trait API: QuoteAPI + RouteAPI {}
