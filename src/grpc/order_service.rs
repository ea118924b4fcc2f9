//! OrderManagement gRPC implementation.
//!
//! Handlers validate at the boundary, then take the store lock exactly once.

use std::sync::Arc;
use tokio::sync::Mutex;
use tonic::{Request, Response, Status};

use crate::orders::{Order, OrderStore};
use crate::proto;
use crate::proto::order_management_server::OrderManagement;
use crate::types::{Error, OrderId};

/// OrderManagement implementation wrapping the shared order store.
#[derive(Debug, Clone)]
pub struct OrderManagementService {
    store: Arc<Mutex<OrderStore>>,
}

impl OrderManagementService {
    /// Create a new OrderManagementService with a shared store.
    pub fn new(store: Arc<Mutex<OrderStore>>) -> Self {
        Self { store }
    }
}

#[tonic::async_trait]
impl OrderManagement for OrderManagementService {
    async fn add_order(
        &self,
        request: Request<proto::Order>,
    ) -> std::result::Result<Response<String>, Status> {
        let order = Order::try_from(request.into_inner())?;
        let id = order.id.clone();

        let replaced = self.store.lock().await.add(order);

        tracing::info!(order_id = %id, replaced = replaced.is_some(), "Order added");
        Ok(Response::new(format!("Order Added: {}", id)))
    }

    async fn get_order(
        &self,
        request: Request<String>,
    ) -> std::result::Result<Response<proto::Order>, Status> {
        // An empty id can never be stored, so it is reported as a plain miss.
        let id = match OrderId::from_string(request.into_inner()) {
            Ok(id) => id,
            Err(_) => {
                tracing::debug!("Order lookup with empty id");
                return Err(Error::not_found("Order does not exist: ").into());
            }
        };

        let order = {
            let store = self.store.lock().await;
            store.get(&id).cloned()
        };

        match order {
            Ok(order) => {
                tracing::debug!(order_id = %id, "Order found");
                Ok(Response::new(proto::Order::from(order)))
            }
            Err(e) => {
                tracing::debug!(order_id = %id, "Order lookup missed");
                Err(e.into())
            }
        }
    }
}
