mod airport;
mod fare;
mod peak;
mod quote_api;
mod route_api;
mod toll;

use std::sync::Arc;

use crate::api::API;
use crate::external::MapsClient;
use crate::rates::RateTable;

pub type DynMapsClient = Arc<dyn MapsClient + Send + Sync>;

/// The fare & route estimation engine. Stateless per request: the
/// rate table is read-only and the maps client is the only source of
/// I/O, so concurrent quoting needs no synchronization.
pub struct Engine {
    rates: RateTable,
    maps: DynMapsClient,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(rates: RateTable, maps: DynMapsClient) -> Self {
        Self { rates, maps }
    }
}

impl API for Engine {}
