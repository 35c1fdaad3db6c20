//! Domain service for the External Frameworks module.

use std::sync::Arc;

use tracing::{info, warn};

use super::error::ValidationErrors;
use super::registry::AdapterRegistry;
use crate::config::ExternalFrameworksConfig;

/// Owns the adapter registry and applies configuration to it.
///
/// The reload policy is taken from the configuration the service is created
/// with; later reloads only replace the framework list.
pub struct ExternalFrameworksService {
    registry: Arc<AdapterRegistry>,
}

impl ExternalFrameworksService {
    /// Creates a service with an uninitialized registry.
    #[must_use]
    pub fn new(config: &ExternalFrameworksConfig) -> Self {
        Self {
            registry: Arc::new(AdapterRegistry::with_policy(config.on_invalid_reload)),
        }
    }

    /// Creates a service and publishes the adapters from `config`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationErrors` if any configured entry is rejected.
    pub fn start(config: &ExternalFrameworksConfig) -> Result<Self, ValidationErrors> {
        let service = Self::new(config);
        service.reload(config)?;
        Ok(service)
    }

    /// Rebuilds the registry from `config`.
    ///
    /// Returns the number of adapters published by this reload. The reload
    /// policy stays the one the service was created with; a differing
    /// `on_invalid_reload` is logged and not applied.
    ///
    /// # Errors
    ///
    /// Returns `ValidationErrors` if any configured entry is rejected.
    pub fn reload(&self, config: &ExternalFrameworksConfig) -> Result<usize, ValidationErrors> {
        info!(
            entries = config.external_frameworks.len(),
            "Loading external framework configuration"
        );
        if config.on_invalid_reload != self.registry.policy() {
            warn!(
                requested = config.on_invalid_reload.as_str(),
                active = self.registry.policy().as_str(),
                "Ignoring onInvalidReload change; the policy is fixed at startup"
            );
        }
        self.registry.initialize(&config.external_frameworks)
    }

    #[must_use]
    pub fn registry(&self) -> Arc<AdapterRegistry> {
        Arc::clone(&self.registry)
    }
}
