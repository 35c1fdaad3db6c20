//! External Frameworks SDK
//!
//! This crate provides the public API for the `external-frameworks` module:
//! - `GroupVersionKind` identifying an externally dispatchable workload type
//! - `ExternalFrameworkConfig`, the operator supplied configuration entry
//! - `Adapter` handles published by the registry
//! - `ExternalFrameworksApi` trait for inter-module communication
//! - `ExternalFrameworksError` for error handling
//!
//! ## Usage
//!
//! ```ignore
//! use external_frameworks_sdk::{ExternalFrameworksApi, GroupVersionKind};
//!
//! let client: Arc<dyn ExternalFrameworksApi> = /* obtained from the module */;
//!
//! let job = GroupVersionKind::new("batch", "v1", "Job");
//! if client.is_registered(&job) {
//!     let adapter = client.adapter(&job)?;
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod models;

pub use api::ExternalFrameworksApi;
pub use error::ExternalFrameworksError;
pub use models::{Adapter, ExternalFrameworkConfig, GroupVersionKind};
