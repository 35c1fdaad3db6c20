//! Domain layer for the External Frameworks module.

pub mod error;
pub mod gvk;
pub mod registry;
pub mod service;
