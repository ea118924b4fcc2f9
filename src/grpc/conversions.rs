//! Proto ↔ Domain conversions.
//!
//! TryFrom for fallible conversions (proto -> domain), From for infallible
//! conversions (domain -> proto).

use crate::orders::Order;
use crate::proto;
use crate::types::{Error, OrderId};

/// Parse a proto string into an OrderId at the gRPC boundary.
pub fn parse_order_id(s: String) -> Result<OrderId, Error> {
    OrderId::from_string(s).map_err(Error::validation)
}

impl TryFrom<proto::Order> for Order {
    type Error = Error;

    fn try_from(proto: proto::Order) -> Result<Self, Self::Error> {
        Ok(Order {
            id: parse_order_id(proto.id)?,
            items: proto.items,
            destination: proto.destination,
            price: proto.price,
        })
    }
}

impl From<Order> for proto::Order {
    fn from(order: Order) -> Self {
        proto::Order {
            id: order.id.into_inner(),
            items: order.items,
            destination: order.destination,
            price: order.price,
        }
    }
}
