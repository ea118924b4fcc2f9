//! Order domain and in-memory store.
//!
//! The store is a plain struct owned behind `Arc<Mutex<OrderStore>>` by the
//! gRPC layer. Every handler takes the lock once and performs a single insert
//! or lookup, so callers never see a partial mutation.

mod seed;
mod store;

pub use seed::sample_orders;
pub use store::OrderStore;

use crate::types::OrderId;

/// A customer order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<String>,
    pub destination: String,
    pub price: f32,
}

impl Order {
    pub fn new(
        id: OrderId,
        items: impl IntoIterator<Item = impl Into<String>>,
        destination: impl Into<String>,
        price: f32,
    ) -> Self {
        Self {
            id,
            items: items.into_iter().map(Into::into).collect(),
            destination: destination.into(),
            price,
        }
    }
}
