//! Typed accessors for custom option extensions.

use prost::Message;
use prost_reflect::{
    DynamicMessage, ExtensionDescriptor, FieldDescriptor, ReflectMessage, ServiceDescriptor, Value,
};

use super::Introspector;
use crate::proto::OAuth2Provider;

const OAUTH2_PROVIDER_MESSAGE: &str = "ecommerce.OAuth2Provider";

/// Outcome of reading a custom option.
///
/// `Malformed` keeps a wrong-typed value distinguishable from a missing one.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtensionValue<T> {
    Absent,
    Present(T),
    Malformed(String),
}

impl<T> ExtensionValue<T> {
    pub fn present(self) -> Option<T> {
        match self {
            ExtensionValue::Present(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, ExtensionValue::Malformed(_))
    }
}

impl Introspector {
    /// `(ecommerce.oauth2_provider)` on a service.
    pub fn oauth2_provider(&self, service: &ServiceDescriptor) -> ExtensionValue<OAuth2Provider> {
        match read_extension(&service.options(), &self.oauth2_provider) {
            Some(value) => message_value(&value, OAUTH2_PROVIDER_MESSAGE),
            None => ExtensionValue::Absent,
        }
    }

    /// `(ecommerce.sensitive)` on a field.
    pub fn sensitive(&self, field: &FieldDescriptor) -> ExtensionValue<bool> {
        match read_extension(&field.options(), &self.sensitive) {
            Some(value) => bool_value(&value),
            None => ExtensionValue::Absent,
        }
    }
}

fn read_extension(options: &DynamicMessage, extension: &ExtensionDescriptor) -> Option<Value> {
    if options.has_extension(extension) {
        Some(options.get_extension(extension).into_owned())
    } else {
        None
    }
}

/// Classify an extension value expected to hold a message of type `expected`.
pub(crate) fn message_value<T>(value: &Value, expected: &str) -> ExtensionValue<T>
where
    T: Message + Default,
{
    let Some(message) = value.as_message() else {
        return ExtensionValue::Malformed(format!("expected message {}, found {:?}", expected, value));
    };
    let actual = message.descriptor();
    if actual.full_name() != expected {
        return ExtensionValue::Malformed(format!(
            "expected message {}, found {}",
            expected,
            actual.full_name()
        ));
    }
    match message.transcode_to::<T>() {
        Ok(decoded) => ExtensionValue::Present(decoded),
        Err(e) => ExtensionValue::Malformed(format!("failed to decode {}: {}", expected, e)),
    }
}

pub(crate) fn bool_value(value: &Value) -> ExtensionValue<bool> {
    match value.as_bool() {
        Some(flag) => ExtensionValue::Present(flag),
        None => ExtensionValue::Malformed(format!("expected bool, found {:?}", value)),
    }
}
