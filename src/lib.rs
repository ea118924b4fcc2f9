//! # Order Management - gRPC order service
//!
//! - `ecommerce.OrderManagement` gRPC service: add an order, fetch one by ID
//! - In-memory order store shared by all handlers behind one mutex
//! - Startup descriptor introspection: OAuth2 provider option, method index
//! - Reflective redaction of fields flagged `(ecommerce.sensitive)`
//!
//! ## Architecture
//!
//! ```text
//!                    ┌──────────────────────────────┐
//!   gRPC requests →  │  OrderManagementService      │
//!                    │   Arc<Mutex<OrderStore>>     │
//!                    └──────────────────────────────┘
//!   startup       →  Introspector → ServiceCatalog (held, not consulted)
//! ```

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod grpc;
#[cfg(feature = "introspection")]
pub mod introspection;
pub mod orders;
pub mod proto;
pub mod server;
pub mod types;

// Internal utilities
pub mod observability;

pub use types::{Config, Error, Result};
