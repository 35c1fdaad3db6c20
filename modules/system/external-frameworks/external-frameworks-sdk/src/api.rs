//! `ExternalFrameworksApi` trait definition.

use std::sync::Arc;

use crate::error::ExternalFrameworksError;
use crate::models::{Adapter, GroupVersionKind};

/// Public API trait for the `external-frameworks` module.
///
/// Consumers read the currently published adapter set. Every call observes a
/// single snapshot: either the registry before a reload or after it, never a
/// partially built one.
pub trait ExternalFrameworksApi: Send + Sync {
    /// Returns all published adapters, ordered by GVK.
    ///
    /// Empty until the first successful initialization.
    fn adapters(&self) -> Vec<Arc<Adapter>>;

    /// Looks up the adapter for a GVK.
    ///
    /// # Errors
    ///
    /// * `NotFound` - If no adapter is registered for `gvk`
    fn adapter(&self, gvk: &GroupVersionKind) -> Result<Arc<Adapter>, ExternalFrameworksError>;

    /// Returns `true` if an adapter is registered for `gvk`.
    fn is_registered(&self, gvk: &GroupVersionKind) -> bool {
        self.adapter(gvk).is_ok()
    }
}
