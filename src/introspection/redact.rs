//! Clearing of `(ecommerce.sensitive)` fields.

use prost::Message;
use prost_reflect::{DynamicMessage, FieldDescriptor};

use super::{ExtensionValue, Introspector};
use crate::proto;
use crate::types::{Error, Result};

/// Generated message with a known fully-qualified protobuf name.
pub trait Redactable: Message + Default {
    const MESSAGE_NAME: &'static str;
}

impl Redactable for proto::Order {
    const MESSAGE_NAME: &'static str = "ecommerce.Order";
}

impl Redactable for proto::OAuth2Provider {
    const MESSAGE_NAME: &'static str = "ecommerce.OAuth2Provider";
}

impl Introspector {
    /// Clear every populated sensitive field, returning how many were cleared.
    ///
    /// Only top-level fields are inspected. Repeated calls are no-ops.
    pub fn redact_dynamic(&self, message: &mut DynamicMessage) -> usize {
        let sensitive: Vec<FieldDescriptor> = message
            .fields()
            .map(|(field, _)| field)
            .filter(|field| match self.sensitive(field) {
                ExtensionValue::Present(flag) => flag,
                ExtensionValue::Absent => false,
                ExtensionValue::Malformed(reason) => {
                    tracing::warn!(
                        field = %field.full_name(),
                        reason = %reason,
                        "Ignoring malformed sensitive option"
                    );
                    false
                }
            })
            .collect();

        for field in &sensitive {
            tracing::trace!(field = %field.full_name(), "Redacting field");
            message.clear_field(field);
        }
        sensitive.len()
    }

    /// Redact a generated message in place.
    pub fn redact<T: Redactable>(&self, message: &mut T) -> Result<usize> {
        let descriptor = self.pool.get_message_by_name(T::MESSAGE_NAME).ok_or_else(|| {
            Error::descriptor(format!("message {} not found in descriptor pool", T::MESSAGE_NAME))
        })?;

        let mut dynamic = DynamicMessage::new(descriptor);
        dynamic
            .transcode_from(&*message)
            .map_err(|e| Error::internal(format!("failed to reflect {}: {}", T::MESSAGE_NAME, e)))?;

        let cleared = self.redact_dynamic(&mut dynamic);
        if cleared > 0 {
            *message = dynamic.transcode_to().map_err(|e| {
                Error::internal(format!("failed to rebuild {}: {}", T::MESSAGE_NAME, e))
            })?;
        }
        Ok(cleared)
    }
}
