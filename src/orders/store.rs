//! In-memory order store.

use std::collections::HashMap;

use super::{sample_orders, Order};
use crate::types::{Error, OrderId, Result};

/// Order store - maps order IDs to orders.
///
/// NOT a separate actor - owned by the gRPC service behind a mutex and called
/// via `&mut self`.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: HashMap<OrderId, Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self {
            orders: HashMap::new(),
        }
    }

    /// Store pre-populated with the sample orders.
    pub fn with_sample_data() -> Result<Self> {
        let mut store = Self::new();
        for order in sample_orders()? {
            store.add(order);
        }
        Ok(store)
    }

    /// Insert an order, replacing any order stored under the same ID.
    ///
    /// Returns the replaced order, if any.
    pub fn add(&mut self, order: Order) -> Option<Order> {
        self.orders.insert(order.id.clone(), order)
    }

    /// Look up an order by ID.
    pub fn get(&self, id: &OrderId) -> Result<&Order> {
        self.orders
            .get(id)
            .ok_or_else(|| Error::not_found(format!("Order does not exist: {}", id)))
    }

    pub fn contains(&self, id: &OrderId) -> bool {
        self.orders.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
