use std::sync::Arc;

use fiacre::engine::Engine;
use fiacre::external::google_maps::GoogleMaps;
use fiacre::rates::RateTable;
use fiacre::server::serve;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let engine = Engine::new(RateTable::default(), Arc::new(GoogleMaps::new()));

    serve(engine).await;
}
