use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{BookingRequest, FareBreakdown};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quote {
    pub token: Uuid,
    pub request: BookingRequest,
    pub fare: FareBreakdown,
}

impl Quote {
    pub fn new(request: BookingRequest, fare: FareBreakdown) -> Self {
        Self {
            token: Uuid::new_v4(),
            request,
            fare,
        }
    }
}
