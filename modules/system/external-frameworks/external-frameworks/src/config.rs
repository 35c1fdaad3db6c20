//! Configuration for the External Frameworks module.
//!
//! The module reads its section from the host configuration document:
//!
//! ```yaml
//! modules:
//!   external-frameworks:
//!     config:
//!       externalFrameworks:
//!         - name: Job.v1.batch
//!         - name: PipelineRun.v1.tekton.dev
//!       onInvalidReload: keepLastGood
//! ```
//!
//! Loading is lenient about absence: a missing module entry or `config`
//! section yields the default (empty) configuration. A section that is
//! present but malformed is an error.
//!
//! Entry names are kept as raw strings. They are validated when the registry
//! is built, so all problems in a batch are reported together.

use std::path::{Path, PathBuf};

use external_frameworks_sdk::ExternalFrameworkConfig;
use serde::{Deserialize, Serialize};

/// Name of this module's section under `modules` in the host configuration.
pub const MODULE_NAME: &str = "external-frameworks";

/// Configuration error for loading the module configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML in config: {0}")]
    Yaml(String),
    #[error("invalid JSON in config: {0}")]
    Json(#[source] serde_json::Error),
    #[error("invalid config for module '{module}': {source}")]
    InvalidConfig {
        module: String,
        #[source]
        source: serde_json::Error,
    },
}

/// What a rejected reload does to the published registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvalidReloadPolicy {
    /// Keep serving the last successfully published adapters.
    #[default]
    KeepLastGood,
    /// Publish an empty registry.
    Clear,
}

impl InvalidReloadPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KeepLastGood => "keepLastGood",
            Self::Clear => "clear",
        }
    }
}

/// Configuration for the External Frameworks module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default, rename_all = "camelCase")]
pub struct ExternalFrameworksConfig {
    /// Workload types dispatched to remote clusters, in operator order.
    pub external_frameworks: Vec<ExternalFrameworkConfig>,

    /// Behavior when a reload is rejected.
    /// Default: `keepLastGood`
    pub on_invalid_reload: InvalidReloadPolicy,
}

impl ExternalFrameworksConfig {
    /// Builds a configuration from framework names with the default policy.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            external_frameworks: names
                .into_iter()
                .map(ExternalFrameworkConfig::new)
                .collect(),
            on_invalid_reload: InvalidReloadPolicy::default(),
        }
    }

    /// Parses a bare module configuration from YAML.
    ///
    /// # Errors
    /// Returns `ConfigError::Yaml` if the text is not valid YAML for this config.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        serde_saphyr::from_str(yaml).map_err(|e| ConfigError::Yaml(e.to_string()))
    }

    /// Deserializes a bare module configuration from a JSON value.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidConfig` if the value does not match the config shape.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value.clone()).map_err(|e| ConfigError::InvalidConfig {
            module: MODULE_NAME.to_owned(),
            source: e,
        })
    }

    /// Reads a bare module configuration file.
    ///
    /// Files ending in `.json` are parsed as JSON, anything else as YAML.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let value = read_document(path)?;
        Self::from_json_value(&value)
    }

    /// Reads a host configuration file and extracts this module's section.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or parsed, or if the
    /// module section is present but invalid.
    pub fn load_from_host(path: &Path) -> Result<Self, ConfigError> {
        let host = read_document(path)?;
        module_config_or_default(&host)
    }
}

/// Lenient loader for this module's section of a host configuration document.
///
/// - If `modules.external-frameworks` is absent → `Ok(default)`
/// - If the module value is not an object → `Ok(default)`
/// - If it has no `config` field → `Ok(default)`
/// - If `config` is present but invalid → `Err(ConfigError::InvalidConfig)`
///
/// # Errors
/// Returns `ConfigError::InvalidConfig` if the config section exists but cannot be deserialized.
pub fn module_config_or_default(
    host: &serde_json::Value,
) -> Result<ExternalFrameworksConfig, ConfigError> {
    let Some(module_raw) = host.get("modules").and_then(|m| m.get(MODULE_NAME)) else {
        return Ok(ExternalFrameworksConfig::default());
    };

    let Some(obj) = module_raw.as_object() else {
        return Ok(ExternalFrameworksConfig::default());
    };

    let Some(config_section) = obj.get("config") else {
        return Ok(ExternalFrameworksConfig::default());
    };

    ExternalFrameworksConfig::from_json_value(config_section)
}

fn read_document(path: &Path) -> Result<serde_json::Value, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(&content).map_err(ConfigError::Json)
    } else {
        serde_saphyr::from_str(&content).map_err(|e| ConfigError::Yaml(e.to_string()))
    }
}
