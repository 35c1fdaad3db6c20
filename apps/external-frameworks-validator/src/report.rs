//! Validation report rendering.

use std::path::{Path, PathBuf};

use colored::Colorize;
use external_frameworks::{
    AdapterRegistry, EntryError, EntryErrorKind, ExternalFrameworksConfig, ValidationErrors,
};
use serde::Serialize;

/// A single rejected configuration entry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EntryReport {
    /// The entry name exactly as configured
    pub name: String,
    /// `invalid_input` or `duplicate_gvk`
    pub kind: &'static str,
    /// Human-readable error description
    pub message: String,
}

impl From<&EntryError> for EntryReport {
    fn from(e: &EntryError) -> Self {
        let kind = match e.kind() {
            EntryErrorKind::InvalidInput => "invalid_input",
            EntryErrorKind::DuplicateGvk => "duplicate_gvk",
        };
        Self {
            name: e.name().to_owned(),
            kind,
            message: e.to_string(),
        }
    }
}

/// Outcome of validating one configuration file.
#[derive(Debug, Serialize)]
pub struct Report {
    pub config: PathBuf,
    pub entries: usize,
    pub ok: bool,
    /// GVKs registered on success, ordered
    pub adapters: Vec<String>,
    pub errors: Vec<EntryReport>,
}

impl Report {
    #[must_use]
    pub fn new(
        path: &Path,
        config: &ExternalFrameworksConfig,
        registry: &AdapterRegistry,
        errors: Option<&ValidationErrors>,
    ) -> Self {
        let errors: Vec<EntryReport> = errors
            .map(|e| e.errors().iter().map(EntryReport::from).collect())
            .unwrap_or_default();

        Self {
            config: path.to_path_buf(),
            entries: config.external_frameworks.len(),
            ok: errors.is_empty(),
            adapters: registry
                .adapters()
                .iter()
                .map(|a| a.gvk().to_string())
                .collect(),
            errors,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn print(&self) {
        println!();
        println!("{}", "=".repeat(80));
        println!("  {}", "EXTERNAL FRAMEWORKS VALIDATOR".bold());
        println!("{}", "=".repeat(80));
        println!();
        println!("  Config:        {}", self.config.display());
        println!("  Entries:       {}", self.entries);
        println!("  Errors found:  {}", self.errors.len());
        println!();

        if self.ok {
            println!("{}", "-".repeat(80));
            println!("  {}", "ADAPTERS".green().bold());
            println!("{}", "-".repeat(80));
            for gvk in &self.adapters {
                println!("  {gvk}");
            }
        } else {
            println!("{}", "-".repeat(80));
            println!("  {}", "ERRORS".red().bold());
            println!("{}", "-".repeat(80));
            for error in &self.errors {
                println!("  {}", error.message.red());
            }
        }
        println!();

        println!("{}", "=".repeat(80));
        if self.ok {
            println!(
                "{}",
                format!("OK: {} external framework adapters", self.adapters.len()).green()
            );
        } else {
            println!(
                "{}",
                format!("FAILED: {} problems in external frameworks", self.errors.len()).red()
            );
            println!();
            println!("  To fix:");
            println!("    - Names use the Kind.version.group form (e.g. Job.v1.batch)");
            println!("    - Core group kinds end with a dot (e.g. Pod.v1.)");
            println!("    - Each GVK may be configured only once");
        }
        println!("{}", "=".repeat(80));
    }
}
