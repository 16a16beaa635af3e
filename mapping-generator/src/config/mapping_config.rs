//! Configuration types for index request generation.

use mapping_generator_shared::IndexSettings;
use tracing::warn;

/// What to do with a field whose type cannot be resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnresolvedFieldPolicy {
    /// Drop the field silently.
    #[default]
    Skip,
    /// Drop the field and log a warning.
    Warn,
    /// Stop generation with `MappingError::UnresolvedFieldType`.
    Fail,
}

impl UnresolvedFieldPolicy {
    /// Parse a policy name.
    ///
    /// Valid values: "skip", "warn" or "fail" (case-insensitive), plus the
    /// aliases "lenient" for skip and "strict" for fail.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "skip" | "lenient" => Some(Self::Skip),
            "warn" => Some(Self::Warn),
            "fail" | "strict" => Some(Self::Fail),
            _ => None,
        }
    }

    /// Read the policy from a variable lookup.
    ///
    /// Defaults to `Skip` if the variable is not set or invalid.
    pub(crate) fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        match lookup("UNRESOLVED_FIELD_POLICY") {
            None => Self::default(),
            Some(value) => Self::parse(&value).unwrap_or_else(|| {
                warn!(value = %value, "Invalid UNRESOLVED_FIELD_POLICY, defaulting to 'skip'");
                Self::default()
            }),
        }
    }
}

/// Configuration for index request generation.
///
/// The default configuration drops unresolvable fields silently and attaches
/// no index settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingConfig {
    /// Policy for fields without a resolvable type.
    pub unresolved_field_policy: UnresolvedFieldPolicy,
    /// Settings attached to every generated request.
    pub settings: Option<IndexSettings>,
}

impl MappingConfig {
    /// Create a config that fails on unresolvable fields.
    pub fn strict() -> Self {
        Self {
            unresolved_field_policy: UnresolvedFieldPolicy::Fail,
            settings: None,
        }
    }

    /// Create a config with the given unresolved field policy.
    pub fn with_policy(unresolved_field_policy: UnresolvedFieldPolicy) -> Self {
        Self {
            unresolved_field_policy,
            settings: None,
        }
    }

    /// Attach index settings to every generated request.
    pub fn with_settings(mut self, settings: IndexSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Read the configuration through a variable lookup.
    ///
    /// # Variables
    ///
    /// - `UNRESOLVED_FIELD_POLICY`: "skip", "warn" or "fail" (default: skip)
    /// - `INDEX_NUMBER_OF_SHARDS`: Shard count for every index (optional)
    /// - `INDEX_NUMBER_OF_REPLICAS`: Replica count for every index (optional)
    pub(crate) fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let settings = IndexSettings::new(
            parse_count(lookup, "INDEX_NUMBER_OF_SHARDS"),
            parse_count(lookup, "INDEX_NUMBER_OF_REPLICAS"),
        );

        Self {
            unresolved_field_policy: UnresolvedFieldPolicy::from_lookup(lookup),
            settings: (!settings.is_empty()).then_some(settings),
        }
    }
}

fn parse_count(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<u32> {
    let value = lookup(key)?;
    match value.trim().parse::<u32>() {
        Ok(count) => Some(count),
        Err(_) => {
            warn!(key = key, value = %value, "Ignoring invalid index setting");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!(UnresolvedFieldPolicy::parse("skip"), Some(UnresolvedFieldPolicy::Skip));
        assert_eq!(UnresolvedFieldPolicy::parse("WARN"), Some(UnresolvedFieldPolicy::Warn));
        assert_eq!(UnresolvedFieldPolicy::parse(" fail "), Some(UnresolvedFieldPolicy::Fail));
        assert_eq!(UnresolvedFieldPolicy::parse("strict"), Some(UnresolvedFieldPolicy::Fail));
        assert_eq!(UnresolvedFieldPolicy::parse("lenient"), Some(UnresolvedFieldPolicy::Skip));
        assert_eq!(UnresolvedFieldPolicy::parse("loud"), None);
    }

    #[test]
    fn test_default_config() {
        let config = MappingConfig::default();
        assert_eq!(config.unresolved_field_policy, UnresolvedFieldPolicy::Skip);
        assert!(config.settings.is_none());
        assert_eq!(MappingConfig::from_lookup(&lookup_from(&[])), config);
    }

    #[test]
    fn test_strict_config() {
        assert_eq!(
            MappingConfig::strict().unresolved_field_policy,
            UnresolvedFieldPolicy::Fail
        );
    }

    #[test]
    fn test_from_lookup() {
        let config = MappingConfig::from_lookup(&lookup_from(&[
            ("UNRESOLVED_FIELD_POLICY", "warn"),
            ("INDEX_NUMBER_OF_SHARDS", "3"),
        ]));

        assert_eq!(config.unresolved_field_policy, UnresolvedFieldPolicy::Warn);
        assert_eq!(config.settings, Some(IndexSettings::new(Some(3), None)));
    }

    #[test]
    fn test_from_lookup_invalid_values_fall_back() {
        let config = MappingConfig::from_lookup(&lookup_from(&[
            ("UNRESOLVED_FIELD_POLICY", "sometimes"),
            ("INDEX_NUMBER_OF_SHARDS", "many"),
            ("INDEX_NUMBER_OF_REPLICAS", "-1"),
        ]));

        assert_eq!(config.unresolved_field_policy, UnresolvedFieldPolicy::Skip);
        assert!(config.settings.is_none());
    }
}
