//! Registry of external framework adapters.
//!
//! The registry holds an immutable snapshot behind an `ArcSwap`. A build
//! validates the whole batch into a private map and publishes it with one
//! pointer swap, so readers see either the previous snapshot or the new one.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;

use arc_swap::ArcSwap;
use external_frameworks_sdk::{Adapter, ExternalFrameworkConfig, GroupVersionKind};
use tracing::{debug, info, warn};

use super::error::{EntryError, ValidationErrors};
use super::gvk::parse_gvk;
use crate::config::InvalidReloadPolicy;

type AdapterMap = BTreeMap<GroupVersionKind, Arc<Adapter>>;

#[derive(Default)]
struct Snapshot {
    adapters: Arc<AdapterMap>,
    generation: u64,
}

/// Process-wide set of adapters, one per configured GVK.
///
/// Owned explicitly and shared through `Arc`; there is no global instance.
pub struct AdapterRegistry {
    current: ArcSwap<Snapshot>,
    policy: InvalidReloadPolicy,
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AdapterRegistry {
    /// Creates an empty registry that keeps its last good snapshot on failure.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(InvalidReloadPolicy::default())
    }

    #[must_use]
    pub fn with_policy(policy: InvalidReloadPolicy) -> Self {
        Self {
            current: ArcSwap::from_pointee(Snapshot::default()),
            policy,
        }
    }

    #[must_use]
    pub fn policy(&self) -> InvalidReloadPolicy {
        self.policy
    }

    /// Validates `configs` and, if the whole batch is valid, replaces the
    /// published adapters with one adapter per configured GVK.
    ///
    /// Every entry is checked even after a failure. The first entry for a GVK
    /// wins; later ones are reported as duplicates. Prior contents are
    /// discarded on success, never merged.
    ///
    /// Returns the number of adapters this call published.
    ///
    /// # Errors
    ///
    /// Returns `ValidationErrors` holding every rejected entry, in input
    /// order. The published snapshot then follows the registry's
    /// `InvalidReloadPolicy` and never contains entries from this batch.
    pub fn initialize(
        &self,
        configs: &[ExternalFrameworkConfig],
    ) -> Result<usize, ValidationErrors> {
        match validate(configs) {
            Ok(adapters) => {
                let count = adapters.len();
                let generation = self.publish(Arc::new(adapters));
                info!(
                    adapters = count,
                    generation, "Published external framework adapters"
                );
                Ok(count)
            }
            Err(errors) => {
                warn!(
                    errors = errors.len(),
                    policy = self.policy.as_str(),
                    "Rejected external framework configuration batch"
                );
                if self.policy == InvalidReloadPolicy::Clear {
                    self.clear();
                }
                Err(errors)
            }
        }
    }

    /// Returns the published adapters ordered by GVK.
    #[must_use]
    pub fn adapters(&self) -> Vec<Arc<Adapter>> {
        self.current.load().adapters.values().cloned().collect()
    }

    /// Returns the GVKs of the published adapters in order.
    #[must_use]
    pub fn gvks(&self) -> Vec<GroupVersionKind> {
        self.current.load().adapters.keys().cloned().collect()
    }

    #[must_use]
    pub fn get(&self, gvk: &GroupVersionKind) -> Option<Arc<Adapter>> {
        self.current.load().adapters.get(gvk).cloned()
    }

    #[must_use]
    pub fn contains(&self, gvk: &GroupVersionKind) -> bool {
        self.current.load().adapters.contains_key(gvk)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.current.load().adapters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.load().adapters.is_empty()
    }

    /// Number of times the published snapshot has been replaced.
    ///
    /// Zero until the first successful `initialize`.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.current.load().generation
    }

    // An already empty snapshot is left in place so a registry that was
    // never built keeps generation zero.
    fn clear(&self) {
        let previous = self.current.rcu(|current| {
            if current.adapters.is_empty() {
                Arc::clone(current)
            } else {
                Arc::new(Snapshot {
                    adapters: Arc::new(AdapterMap::new()),
                    generation: current.generation + 1,
                })
            }
        });
        if !previous.adapters.is_empty() {
            info!(
                generation = previous.generation + 1,
                "Cleared external framework adapters"
            );
        }
    }

    fn publish(&self, adapters: Arc<AdapterMap>) -> u64 {
        let previous = self.current.rcu(|current| Snapshot {
            adapters: Arc::clone(&adapters),
            generation: current.generation + 1,
        });
        previous.generation + 1
    }
}

fn validate(configs: &[ExternalFrameworkConfig]) -> Result<AdapterMap, ValidationErrors> {
    let mut accepted: BTreeMap<GroupVersionKind, &ExternalFrameworkConfig> = BTreeMap::new();
    let mut errors = Vec::new();

    for config in configs {
        let gvk = match parse_gvk(&config.name) {
            Ok(gvk) => gvk,
            Err(source) => {
                let err = EntryError::InvalidInput {
                    name: config.name.clone(),
                    source,
                };
                warn!(name = %config.name, error = %err, "Invalid external framework entry");
                errors.push(err);
                continue;
            }
        };

        match accepted.entry(gvk) {
            Entry::Occupied(first) => {
                let err = EntryError::DuplicateGvk {
                    name: config.name.clone(),
                    gvk: first.key().clone(),
                };
                warn!(
                    name = %config.name,
                    first = %first.get().name,
                    error = %err,
                    "Duplicate external framework entry"
                );
                errors.push(err);
            }
            Entry::Vacant(slot) => {
                debug!(name = %config.name, gvk = %slot.key(), "Accepted external framework entry");
                slot.insert(config);
            }
        }
    }

    if let Some(errors) = ValidationErrors::from_errors(errors) {
        return Err(errors);
    }

    Ok(accepted
        .into_keys()
        .map(|gvk| {
            let adapter = Arc::new(Adapter::new(gvk.clone()));
            (gvk, adapter)
        })
        .collect())
}
