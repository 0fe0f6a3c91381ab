pub mod google_maps;

use async_trait::async_trait;

use crate::entities::Coordinates;
use crate::error::Error;

/// One row/element of a distance-matrix response, already unwrapped.
#[derive(Clone, Debug)]
pub struct RouteMatrix {
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub distance_text: String,
    pub duration_text: String,
}

/// Seam over the external mapping provider. The engine only ever
/// needs a matrix lookup and a forward geocode; both are treated as
/// opaque and any failure is absorbed by the route resolver.
#[async_trait]
pub trait MapsClient {
    async fn distance_matrix(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<RouteMatrix, Error>;

    async fn geocode(&self, address: &str) -> Result<Coordinates, Error>;
}
