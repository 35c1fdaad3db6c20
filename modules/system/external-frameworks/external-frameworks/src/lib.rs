//! External Frameworks module
//!
//! Turns operator supplied external framework entries into a registry of
//! adapter handles, one per unique `GroupVersionKind`.
//!
//! A batch is validated as a whole: every malformed name and every duplicate
//! GVK is collected and reported in one `ValidationErrors` value. The registry
//! only changes when the complete batch is valid, and readers always observe a
//! whole snapshot.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod local_client;

pub use config::{ConfigError, ExternalFrameworksConfig, InvalidReloadPolicy};
pub use domain::error::{EntryError, EntryErrorKind, GvkError, ValidationErrors};
pub use domain::gvk::parse_gvk;
pub use domain::registry::AdapterRegistry;
pub use domain::service::ExternalFrameworksService;
pub use local_client::ExternalFrameworksLocalClient;
