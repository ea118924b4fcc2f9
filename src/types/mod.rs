//! Core types for the order management service.
//!
//! - **IDs**: Strongly-typed identifiers (OrderId)
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Server and observability configuration

mod config;
mod errors;
mod ids;

pub use config::{Config, ObservabilityConfig, ServerConfig};
pub use errors::{Error, Result};
pub use ids::OrderId;
