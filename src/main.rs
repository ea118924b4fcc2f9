//! Order management gRPC server - main entry point.

use order_management::orders::OrderStore;
use order_management::server::GrpcServer;
use order_management::Config;
use std::sync::Arc;
use tokio::sync::Mutex;

#[tokio::main]
async fn main() {
    // Load configuration
    let config = Config::default();

    // Initialize observability
    order_management::observability::init_tracing(&config.observability);

    let store = match OrderStore::with_sample_data() {
        Ok(store) => store,
        Err(err) => {
            tracing::error!("Failed to load sample orders: {}", err);
            std::process::exit(1);
        }
    };
    tracing::info!("Loaded {} sample orders", store.len());

    let server = GrpcServer::new(Arc::new(Mutex::new(store)), config.server);

    let cancel = server.cancellation_token();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Received Ctrl-C");
                cancel.cancel();
            }
            Err(err) => tracing::warn!("Failed to listen for Ctrl-C: {}", err),
        }
    });

    if let Err(err) = server.serve().await {
        tracing::error!("Order management server failed: {}", err);
        std::process::exit(1);
    }
}
