//! Domain error types for the External Frameworks module.

use std::collections::HashSet;
use std::fmt;

use external_frameworks_sdk::{ExternalFrameworksError, GroupVersionKind};
use thiserror::Error;

/// A framework name could not be turned into a GVK.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GvkError {
    /// The name is empty.
    #[error("name is required")]
    NameRequired,

    /// The name does not follow the `Kind.version.group` grammar.
    #[error("invalid GVK format '{name}'")]
    InvalidFormat { name: String },
}

/// Category of a rejected configuration entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryErrorKind {
    /// Empty or unparsable name.
    InvalidInput,
    /// The name resolves to a GVK configured by an earlier entry.
    DuplicateGvk,
}

/// Problem found with a single configuration entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error(
        "invalid external framework configuration for \"{}\": {source}",
        .name.escape_debug()
    )]
    InvalidInput {
        name: String,
        #[source]
        source: GvkError,
    },

    #[error("duplicate configuration for GVK {gvk}")]
    DuplicateGvk {
        name: String,
        gvk: GroupVersionKind,
    },
}

impl EntryError {
    #[must_use]
    pub const fn kind(&self) -> EntryErrorKind {
        match self {
            Self::InvalidInput { .. } => EntryErrorKind::InvalidInput,
            Self::DuplicateGvk { .. } => EntryErrorKind::DuplicateGvk,
        }
    }

    /// Name of the offending entry, exactly as configured.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::InvalidInput { name, .. } | Self::DuplicateGvk { name, .. } => name,
        }
    }
}

/// Every problem found in a rejected batch, in detection order.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<EntryError>,
}

impl ValidationErrors {
    /// Wraps the collected errors, or returns `None` if there are none.
    #[must_use]
    pub fn from_errors(errors: Vec<EntryError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    #[must_use]
    pub fn errors(&self) -> &[EntryError] {
        &self.errors
    }

    /// Number of collected errors. Always at least one.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn into_errors(self) -> Vec<EntryError> {
        self.errors
    }

    /// Number of collected errors of the given kind.
    #[must_use]
    pub fn count(&self, kind: EntryErrorKind) -> usize {
        self.errors.iter().filter(|e| e.kind() == kind).count()
    }
}

// One error renders as its own message. Several render as a bracketed,
// comma separated list with repeated messages shown once.
impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [only] = self.errors.as_slice() {
            return write!(f, "{only}");
        }

        let mut seen = HashSet::new();
        let messages: Vec<String> = self
            .errors
            .iter()
            .map(ToString::to_string)
            .filter(|msg| seen.insert(msg.clone()))
            .collect();

        if let [only] = messages.as_slice() {
            return f.write_str(only);
        }
        write!(f, "[{}]", messages.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationErrors> for ExternalFrameworksError {
    fn from(e: ValidationErrors) -> Self {
        ExternalFrameworksError::invalid_configuration(e.to_string())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn job() -> GroupVersionKind {
        GroupVersionKind::new("batch", "v1", "Job")
    }

    fn duplicate_job() -> EntryError {
        EntryError::DuplicateGvk {
            name: "Job.v1.batch".to_owned(),
            gvk: job(),
        }
    }

    fn empty_name() -> EntryError {
        EntryError::InvalidInput {
            name: String::new(),
            source: GvkError::NameRequired,
        }
    }

    #[test]
    fn test_entry_error_display() {
        assert_eq!(
            empty_name().to_string(),
            "invalid external framework configuration for \"\": name is required"
        );
        assert_eq!(
            duplicate_job().to_string(),
            "duplicate configuration for GVK batch/v1, Kind=Job"
        );

        let invalid = EntryError::InvalidInput {
            name: "???".to_owned(),
            source: GvkError::InvalidFormat {
                name: "???".to_owned(),
            },
        };
        assert_eq!(
            invalid.to_string(),
            "invalid external framework configuration for \"???\": invalid GVK format '???'"
        );
    }

    #[test]
    fn test_entry_error_escapes_quoted_name() {
        let err = EntryError::InvalidInput {
            name: "a\"b".to_owned(),
            source: GvkError::InvalidFormat {
                name: "a\"b".to_owned(),
            },
        };
        assert_eq!(
            err.to_string(),
            "invalid external framework configuration for \"a\\\"b\": invalid GVK format 'a\"b'"
        );
    }

    #[test]
    fn test_entry_error_source_is_gvk_error() {
        use std::error::Error as _;

        let err = empty_name();
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "name is required");
        assert!(duplicate_job().source().is_none());
    }

    #[test]
    fn test_entry_error_kind_and_name() {
        assert_eq!(empty_name().kind(), EntryErrorKind::InvalidInput);
        assert_eq!(empty_name().name(), "");
        assert_eq!(duplicate_job().kind(), EntryErrorKind::DuplicateGvk);
        assert_eq!(duplicate_job().name(), "Job.v1.batch");
    }

    #[test]
    fn test_validation_errors_never_empty() {
        assert!(ValidationErrors::from_errors(Vec::new()).is_none());
        let errors = ValidationErrors::from_errors(vec![empty_name()]).unwrap();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_single_error_renders_plain() {
        let errors = ValidationErrors::from_errors(vec![duplicate_job()]).unwrap();
        assert_eq!(
            errors.to_string(),
            "duplicate configuration for GVK batch/v1, Kind=Job"
        );
    }

    #[test]
    fn test_multiple_errors_render_as_list() {
        let errors = ValidationErrors::from_errors(vec![empty_name(), duplicate_job()]).unwrap();
        assert_eq!(
            errors.to_string(),
            "[invalid external framework configuration for \"\": name is required, \
             duplicate configuration for GVK batch/v1, Kind=Job]"
        );
        assert_eq!(errors.count(EntryErrorKind::InvalidInput), 1);
        assert_eq!(errors.count(EntryErrorKind::DuplicateGvk), 1);
    }

    #[test]
    fn test_repeated_messages_render_once() {
        let errors =
            ValidationErrors::from_errors(vec![duplicate_job(), duplicate_job()]).unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.to_string(),
            "duplicate configuration for GVK batch/v1, Kind=Job"
        );
    }

    #[test]
    fn test_into_sdk_error() {
        let errors = ValidationErrors::from_errors(vec![empty_name()]).unwrap();
        let sdk_err: ExternalFrameworksError = errors.into();
        assert!(sdk_err.is_invalid_configuration());
        assert_eq!(
            sdk_err.to_string(),
            "invalid external framework configuration: \
             invalid external framework configuration for \"\": name is required"
        );
    }
}
