use async_trait::async_trait;

use super::{fare, Engine};
use crate::api::{QuoteAPI, RouteAPI};
use crate::entities::{BookingRequest, Quote};
use crate::error::{invalid_input_error, Error};

#[async_trait]
impl QuoteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_quote(&self, request: BookingRequest) -> Result<Quote, Error> {
        if request.pickup_address.trim().is_empty() || request.dropoff_address.trim().is_empty() {
            return Err(invalid_input_error());
        }

        // Structural rejection up front: no quoting against a vehicle
        // the rate table does not know.
        self.rates.vehicle(request.vehicle_type)?;

        let estimate = self
            .resolve_route(&request.pickup_address, &request.dropoff_address)
            .await;

        let fare = fare::build_breakdown(&self.rates, &request, &estimate)?;

        Ok(Quote::new(request, fare))
    }
}
