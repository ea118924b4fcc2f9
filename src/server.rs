//! gRPC server — service registration, startup introspection and shutdown.

use std::net::SocketAddr;
use std::sync::Arc;
#[cfg(feature = "introspection")]
use std::sync::OnceLock;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;
use tonic::transport::Server;

use crate::grpc::OrderManagementService;
#[cfg(feature = "introspection")]
use crate::introspection::{Introspector, ServiceCatalog};
use crate::orders::OrderStore;
use crate::proto::order_management_server::OrderManagementServer;
use crate::proto::ORDER_MANAGEMENT_SERVICE_NAME;
use crate::types::{Error, Result, ServerConfig};

/// Names of every service added to the router.
pub const REGISTERED_SERVICES: &[&str] = &[ORDER_MANAGEMENT_SERVICE_NAME];

/// gRPC server wrapping the order store.
#[derive(Debug)]
pub struct GrpcServer {
    store: Arc<Mutex<OrderStore>>,
    config: ServerConfig,
    cancel: CancellationToken,
    #[cfg(feature = "introspection")]
    catalog: OnceLock<ServiceCatalog>,
}

impl GrpcServer {
    pub fn new(store: Arc<Mutex<OrderStore>>, config: ServerConfig) -> Self {
        Self {
            store,
            config,
            cancel: CancellationToken::new(),
            #[cfg(feature = "introspection")]
            catalog: OnceLock::new(),
        }
    }

    /// Token that stops the server when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Stop accepting calls and drain in-flight ones.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    /// Descriptor catalog built at startup, once `serve_listener` has run.
    #[cfg(feature = "introspection")]
    pub fn service_catalog(&self) -> Option<&ServiceCatalog> {
        self.catalog.get()
    }

    /// Bind the configured address and serve until shutdown.
    pub async fn serve(&self) -> Result<()> {
        let addr: SocketAddr = self.config.grpc_addr.parse().map_err(|e| {
            Error::config(format!("invalid grpc_addr {:?}: {}", self.config.grpc_addr, e))
        })?;
        let listener = TcpListener::bind(addr).await?;
        self.serve_listener(listener).await
    }

    /// Serve on an already-bound listener until shutdown.
    pub async fn serve_listener(&self, listener: TcpListener) -> Result<()> {
        let local_addr = listener.local_addr()?;

        let service = OrderManagementService::new(self.store.clone());

        // Descriptors are read after registration and before the first call.
        #[cfg(feature = "introspection")]
        {
            let catalog = Introspector::ecommerce()?.inspect(REGISTERED_SERVICES.iter().copied())?;
            // A restarted server keeps the first catalog; descriptors are static.
            let _ = self.catalog.set(catalog);
        }

        tracing::info!("Order management gRPC server listening on {}", local_addr);

        let cancel = self.cancel.clone();
        Server::builder()
            .http2_keepalive_interval(self.config.http2_keepalive_interval)
            .add_service(OrderManagementServer::new(service))
            .serve_with_incoming_shutdown(TcpListenerStream::new(listener), async move {
                cancel.cancelled().await;
                tracing::info!("gRPC server shutting down");
            })
            .await?;

        Ok(())
    }
}
