//! Error types for the `external-frameworks` module API.

use thiserror::Error;

use crate::models::GroupVersionKind;

/// Errors returned by `ExternalFrameworksApi`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExternalFrameworksError {
    /// No adapter is registered for the GVK.
    #[error("no external framework adapter registered for GVK {gvk}")]
    NotFound { gvk: GroupVersionKind },

    /// The supplied external framework configuration was rejected.
    #[error("invalid external framework configuration: {0}")]
    InvalidConfiguration(String),
}

impl ExternalFrameworksError {
    #[must_use]
    pub fn not_found(gvk: GroupVersionKind) -> Self {
        Self::NotFound { gvk }
    }

    #[must_use]
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    #[must_use]
    pub const fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }
}
