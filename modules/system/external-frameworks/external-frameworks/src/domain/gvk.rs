//! Normalization of configured framework names into GVKs.

use external_frameworks_sdk::GroupVersionKind;

use super::error::GvkError;

/// Parses a configured framework name into a `GroupVersionKind`.
///
/// Only the shape of the name is checked. Whether the resource type exists
/// in any cluster is not.
///
/// # Errors
///
/// * `NameRequired` - If `name` is empty
/// * `InvalidFormat` - If `name` is not in `Kind.version.group` form
pub fn parse_gvk(name: &str) -> Result<GroupVersionKind, GvkError> {
    if name.is_empty() {
        return Err(GvkError::NameRequired);
    }

    GroupVersionKind::parse_kind_arg(name).ok_or_else(|| GvkError::InvalidFormat {
        name: name.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_name() {
        let gvk = parse_gvk("Job.v1.batch").unwrap();
        assert_eq!(gvk, GroupVersionKind::new("batch", "v1", "Job"));
    }

    #[test]
    fn test_parse_empty_name() {
        let err = parse_gvk("").unwrap_err();
        assert_eq!(err, GvkError::NameRequired);
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_parse_invalid_format_embeds_name() {
        let err = parse_gvk("???").unwrap_err();
        assert_eq!(
            err,
            GvkError::InvalidFormat {
                name: "???".to_owned()
            }
        );
        assert_eq!(err.to_string(), "invalid GVK format '???'");
    }

    #[test]
    fn test_parse_kind_and_version_only_is_rejected() {
        assert!(matches!(
            parse_gvk("Job.v1"),
            Err(GvkError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_parse_whitespace_is_not_trimmed() {
        let gvk = parse_gvk(" Job.v1.batch").unwrap();
        assert_eq!(gvk.kind, " Job");
    }
}
