//! Descriptor introspection over the registered gRPC services.
//!
//! Runs once at startup, before the server accepts calls:
//! - reads the `(ecommerce.oauth2_provider)` service option
//! - indexes every method under its `/<package.Service>/<Method>` path
//!
//! Also provides [`Introspector::redact`], which clears fields flagged with
//! `(ecommerce.sensitive) = true`. Nothing on the serving path calls it yet.
//!
//! Custom options only survive in the encoded descriptor set emitted by
//! `build.rs`; prost codegen drops them, so everything here goes through
//! `prost_reflect`.

mod extension;
mod methods;
mod redact;

pub use extension::ExtensionValue;
pub use methods::MethodIndex;
pub use redact::Redactable;

use prost_reflect::{DescriptorPool, ExtensionDescriptor, ServiceDescriptor};

use crate::proto::{self, OAuth2Provider};
use crate::types::{Error, Result};

pub const OAUTH2_PROVIDER_EXTENSION: &str = "ecommerce.oauth2_provider";
pub const SENSITIVE_EXTENSION: &str = "ecommerce.sensitive";

const SERVICE_OPTIONS: &str = "google.protobuf.ServiceOptions";
const FIELD_OPTIONS: &str = "google.protobuf.FieldOptions";

/// Result of a startup introspection pass.
///
/// Held for the process lifetime. Reserved for request interceptors; the
/// handlers never read it.
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    pub oauth2_provider: Option<OAuth2Provider>,
    pub methods: MethodIndex,
}

/// Reads custom options out of a descriptor pool.
#[derive(Debug, Clone)]
pub struct Introspector {
    pool: DescriptorPool,
    oauth2_provider: ExtensionDescriptor,
    sensitive: ExtensionDescriptor,
}

impl Introspector {
    /// Build from a pool that declares both custom extensions.
    pub fn new(pool: DescriptorPool) -> Result<Self> {
        let oauth2_provider = find_extension(&pool, OAUTH2_PROVIDER_EXTENSION, SERVICE_OPTIONS)?;
        let sensitive = find_extension(&pool, SENSITIVE_EXTENSION, FIELD_OPTIONS)?;
        Ok(Self {
            pool,
            oauth2_provider,
            sensitive,
        })
    }

    /// Decode an encoded `FileDescriptorSet`.
    pub fn from_file_descriptor_set(bytes: &[u8]) -> Result<Self> {
        let pool = DescriptorPool::decode(bytes)
            .map_err(|e| Error::descriptor(format!("failed to decode descriptor set: {}", e)))?;
        Self::new(pool)
    }

    /// Introspector over the compiled-in `ecommerce` schema.
    pub fn ecommerce() -> Result<Self> {
        Self::from_file_descriptor_set(proto::FILE_DESCRIPTOR_SET)
    }

    pub fn pool(&self) -> &DescriptorPool {
        &self.pool
    }

    /// Resolve registered service names to descriptors.
    ///
    /// Any unknown name fails the whole set.
    pub fn resolve_services<'a>(
        &self,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Result<Vec<ServiceDescriptor>> {
        names
            .into_iter()
            .map(|name| {
                self.pool.get_service_by_name(name).ok_or_else(|| {
                    Error::descriptor(format!("service {} not found in descriptor pool", name))
                })
            })
            .collect()
    }

    /// Extract the OAuth2 provider option from each service.
    ///
    /// When several services carry one, the last wins. Malformed values are
    /// logged and skipped.
    pub fn load_service_options(&self, services: &[ServiceDescriptor]) -> Option<OAuth2Provider> {
        let mut provider = None;
        for service in services {
            match self.oauth2_provider(service) {
                ExtensionValue::Present(found) => {
                    tracing::info!(
                        service = %service.full_name(),
                        url = %found.url,
                        scopes = ?found.scopes,
                        "OAuth2 provider declared"
                    );
                    provider = Some(found);
                }
                ExtensionValue::Absent => {
                    tracing::debug!(service = %service.full_name(), "No OAuth2 provider option");
                }
                ExtensionValue::Malformed(reason) => {
                    tracing::warn!(
                        service = %service.full_name(),
                        reason = %reason,
                        "Ignoring malformed OAuth2 provider option"
                    );
                }
            }
        }
        provider
    }

    /// Index every method of every service by its gRPC path.
    pub fn index_methods(&self, services: &[ServiceDescriptor]) -> MethodIndex {
        let mut index = MethodIndex::default();
        for service in services {
            for method in service.methods() {
                let path = index.insert(method);
                tracing::debug!(method = %path, "Indexed method");
            }
        }
        index
    }

    /// Full startup pass: resolve, read options, index methods.
    pub fn inspect<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Result<ServiceCatalog> {
        let services = self.resolve_services(names)?;
        let oauth2_provider = self.load_service_options(&services);
        let methods = self.index_methods(&services);
        tracing::info!(
            services = services.len(),
            methods = methods.len(),
            oauth2 = oauth2_provider.is_some(),
            "Service descriptors loaded"
        );
        Ok(ServiceCatalog {
            oauth2_provider,
            methods,
        })
    }
}

fn find_extension(
    pool: &DescriptorPool,
    name: &str,
    extendee: &str,
) -> Result<ExtensionDescriptor> {
    let extension = pool
        .get_extension_by_name(name)
        .ok_or_else(|| Error::descriptor(format!("extension {} not declared", name)))?;
    let containing = extension.containing_message();
    if containing.full_name() != extendee {
        return Err(Error::descriptor(format!(
            "extension {} extends {}, expected {}",
            name,
            containing.full_name(),
            extendee
        )));
    }
    Ok(extension)
}
