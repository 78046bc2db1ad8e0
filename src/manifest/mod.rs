//! Bale manifest handling
//!
//! The user-authored manifest lives at the workspace root; the tool-managed
//! internal copy is written under the local app directory and used by
//! subsequent build steps.

pub mod loader;
pub mod patcher;
pub mod writer;

/// User-authored manifest filename
pub const MANIFEST_FILE: &str = "baler.yaml";

/// Tool-managed directory holding the internal copy of the manifest
pub const LOCAL_APP_DIR: &str = ".baler/app";

/// Internal manifest filename inside [`LOCAL_APP_DIR`]
pub const LOCAL_MANIFEST_FILE: &str = "baler.yaml";

/// Manifest fields eligible for dynamic updating, as `(field, manifest path)`
/// pairs applied in declared order. Extending the patchable set is a matter
/// of adding a row.
pub(crate) const FIELD_PATHS: &[(&str, &str)] = &[("name", "name"), ("version", "version")];

/// Manifest fields eligible for dynamic updating prior to saving the
/// internal manifest
#[derive(Debug, Clone, Default)]
pub struct MetadataOverrides {
    /// Replacement bale name
    pub name: Option<String>,

    /// Replacement bale version
    pub version: Option<String>,

    /// Tag recorded by publish flows; not written to any manifest field
    #[allow(dead_code)]
    pub tag: Option<String>,
}

impl MetadataOverrides {
    /// Value for a patchable field. `None` and the empty string both mean
    /// "do not change".
    pub(crate) fn value_of(&self, field: &str) -> Option<&str> {
        let value = match field {
            "name" => self.name.as_deref(),
            "version" => self.version.as_deref(),
            _ => None,
        };
        value.filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_of_name() {
        let overrides = MetadataOverrides {
            name: Some("mybale".to_string()),
            ..Default::default()
        };
        assert_eq!(overrides.value_of("name"), Some("mybale"));
        assert_eq!(overrides.value_of("version"), None);
    }

    #[test]
    fn test_value_of_empty_string_means_no_change() {
        let overrides = MetadataOverrides {
            name: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(overrides.value_of("name"), None);
    }

    #[test]
    fn test_value_of_unknown_field() {
        let overrides = MetadataOverrides {
            tag: Some("v1.0.0".to_string()),
            ..Default::default()
        };
        // tag has no row in the field table
        assert_eq!(overrides.value_of("tag"), None);
    }

    #[test]
    fn test_field_table_order() {
        let fields: Vec<_> = FIELD_PATHS.iter().map(|(field, _)| *field).collect();
        assert_eq!(fields, vec!["name", "version"]);
    }
}
