//! Local client implementing the `ExternalFrameworksApi` trait.

use std::sync::Arc;

use external_frameworks_sdk::{
    Adapter, ExternalFrameworksApi, ExternalFrameworksError, GroupVersionKind,
};

use crate::domain::registry::AdapterRegistry;

/// Local client for the External Frameworks module.
///
/// Reads straight from the shared registry, so every call sees the snapshot
/// published at that moment.
pub struct ExternalFrameworksLocalClient {
    registry: Arc<AdapterRegistry>,
}

impl ExternalFrameworksLocalClient {
    #[must_use]
    pub fn new(registry: Arc<AdapterRegistry>) -> Self {
        Self { registry }
    }
}

impl ExternalFrameworksApi for ExternalFrameworksLocalClient {
    fn adapters(&self) -> Vec<Arc<Adapter>> {
        self.registry.adapters()
    }

    fn adapter(&self, gvk: &GroupVersionKind) -> Result<Arc<Adapter>, ExternalFrameworksError> {
        self.registry
            .get(gvk)
            .ok_or_else(|| ExternalFrameworksError::not_found(gvk.clone()))
    }

    fn is_registered(&self, gvk: &GroupVersionKind) -> bool {
        self.registry.contains(gvk)
    }
}
