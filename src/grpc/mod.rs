//! gRPC service implementations.
//!
//! - OrderManagement - add and fetch orders against the shared store

pub mod conversions;
pub mod order_service;

pub use order_service::OrderManagementService;
