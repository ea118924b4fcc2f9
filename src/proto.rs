//! Generated protobuf types for the `ecommerce` package.

#![allow(missing_debug_implementations)]
#![allow(clippy::all)]

tonic::include_proto!("ecommerce");

/// Encoded `FileDescriptorSet` for the `ecommerce` schema and its imports.
///
/// Unlike the generated structs, it retains custom service and field options.
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("ecommerce_descriptor");

/// Fully-qualified name of the order management service.
pub const ORDER_MANAGEMENT_SERVICE_NAME: &str =
    <order_management_server::OrderManagementServer<()> as tonic::server::NamedService>::NAME;
