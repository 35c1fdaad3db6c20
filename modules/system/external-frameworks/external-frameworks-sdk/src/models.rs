//! Public models for the `external-frameworks` module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the `external-frameworks` module and its consumers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies an API resource type by group, version and kind.
///
/// Ordering compares group, then version, then kind. Registry snapshots use
/// this ordering so listings are stable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupVersionKind {
    /// API group. Empty for the core group.
    pub group: String,
    /// API version within the group, e.g. `v1`.
    pub version: String,
    /// Resource kind, e.g. `Job`.
    pub kind: String,
}

impl GroupVersionKind {
    #[must_use]
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            kind: kind.into(),
        }
    }

    /// Parses the short-form `Kind.version.group` argument syntax.
    ///
    /// The argument must contain at least two dots. It is split at the first
    /// two, so the group keeps any remaining dots
    /// (`Deployment.v1.apps.example.com` has group `apps.example.com`).
    /// A trailing dot spells the core group: `Pod.v1.`.
    ///
    /// Returns `None` when the argument does not have the required shape.
    /// Component contents are not checked.
    #[must_use]
    pub fn parse_kind_arg(arg: &str) -> Option<Self> {
        if arg.matches('.').count() < 2 {
            return None;
        }
        let mut parts = arg.splitn(3, '.');
        let kind = parts.next()?;
        let version = parts.next()?;
        let group = parts.next()?;
        Some(Self::new(group, version, kind))
    }

    /// Renders the GVK back into `Kind.version.group` form.
    ///
    /// The result parses back into an equal value.
    #[must_use]
    pub fn to_kind_arg(&self) -> String {
        format!("{}.{}.{}", self.kind, self.version, self.group)
    }

    /// Returns `true` if the GVK belongs to the core (empty) API group.
    #[must_use]
    pub fn is_core_group(&self) -> bool {
        self.group.is_empty()
    }
}

impl fmt::Display for GroupVersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}, Kind={}", self.group, self.version, self.kind)
    }
}

/// A single external framework entry supplied by the operator.
///
/// `name` carries the GVK in `Kind.version.group` form. It is kept as raw
/// text here; validation happens when the registry is built so that every
/// problem in a batch is reported together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExternalFrameworkConfig {
    #[serde(default)]
    pub name: String,
}

impl ExternalFrameworkConfig {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Adapter handle for one externally dispatchable workload type.
///
/// The registry publishes exactly one handle per configured GVK.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adapter {
    gvk: GroupVersionKind,
}

impl Adapter {
    #[must_use]
    pub fn new(gvk: GroupVersionKind) -> Self {
        Self { gvk }
    }

    /// The resource type this adapter handles.
    #[must_use]
    pub fn gvk(&self) -> &GroupVersionKind {
        &self.gvk
    }
}
