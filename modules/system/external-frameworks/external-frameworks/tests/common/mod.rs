#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for external-frameworks integration tests

use std::collections::BTreeSet;

use external_frameworks::AdapterRegistry;
use external_frameworks_sdk::{ExternalFrameworkConfig, GroupVersionKind};

pub fn entries(names: &[&str]) -> Vec<ExternalFrameworkConfig> {
    names
        .iter()
        .map(|name| ExternalFrameworkConfig::new(*name))
        .collect()
}

pub fn gvk(kind_arg: &str) -> GroupVersionKind {
    GroupVersionKind::parse_kind_arg(kind_arg).unwrap()
}

pub fn published_gvks(registry: &AdapterRegistry) -> BTreeSet<GroupVersionKind> {
    registry
        .adapters()
        .iter()
        .map(|adapter| adapter.gvk().clone())
        .collect()
}
