use std::collections::HashMap;

use prost_reflect::MethodDescriptor;

/// Method descriptors keyed by gRPC path, e.g. `/ecommerce.OrderManagement/addOrder`.
#[derive(Debug, Clone, Default)]
pub struct MethodIndex {
    methods: HashMap<String, MethodDescriptor>,
}

impl MethodIndex {
    /// gRPC request path for a method.
    pub fn path_of(method: &MethodDescriptor) -> String {
        format!("/{}/{}", method.parent_service().full_name(), method.name())
    }

    /// Insert a method under its path, returning the path.
    pub fn insert(&mut self, method: MethodDescriptor) -> String {
        let path = Self::path_of(&method);
        self.methods.insert(path.clone(), method);
        path
    }

    pub fn get(&self, path: &str) -> Option<&MethodDescriptor> {
        self.methods.get(path)
    }

    /// All indexed paths, sorted.
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::introspection::Introspector;
    use crate::proto::ORDER_MANAGEMENT_SERVICE_NAME;

    #[test]
    fn test_lookup_by_path() {
        let introspector = Introspector::ecommerce().unwrap();
        let services = introspector
            .resolve_services([ORDER_MANAGEMENT_SERVICE_NAME])
            .unwrap();
        let index = introspector.index_methods(&services);

        assert_eq!(index.len(), 2);
        let method = index.get("/ecommerce.OrderManagement/getOrder").unwrap();
        assert_eq!(method.name(), "getOrder");
        assert_eq!(method.input().full_name(), "google.protobuf.StringValue");
        assert_eq!(method.output().full_name(), "ecommerce.Order");

        assert!(index.get("/ecommerce.OrderManagement/deleteOrder").is_none());
    }

    #[test]
    fn test_reinsert_is_idempotent() {
        let introspector = Introspector::ecommerce().unwrap();
        let services = introspector
            .resolve_services([ORDER_MANAGEMENT_SERVICE_NAME, ORDER_MANAGEMENT_SERVICE_NAME])
            .unwrap();
        let index = introspector.index_methods(&services);
        assert_eq!(index.len(), 2);
    }
}
