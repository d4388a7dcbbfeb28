//! Well-known label keys and selector helpers
//!
//! Addons are tagged with `addon.kubeblocks.io/*` labels. Addons packaged
//! before 0.8.0 carry their provider under `kubeblocks.io/provider` instead,
//! so lookups fall back to that key.

use std::collections::BTreeMap;

use crate::defaults::ADDON_RELEASE_PREFIX;

pub const ADDON_PROVIDER_LABEL_KEY: &str = "addon.kubeblocks.io/provider";
/// Provider label used before 0.8.0
pub const PROVIDER_LABEL_KEY: &str = "kubeblocks.io/provider";
pub const ADDON_VERSION_LABEL_KEY: &str = "addon.kubeblocks.io/version";
pub const ADDON_NAME_LABEL_KEY: &str = "addon.kubeblocks.io/name";
pub const ADDON_MODEL_LABEL_KEY: &str = "addon.kubeblocks.io/model";

/// Provider label as named by the KubeBlocks operator
pub const KB_ADDON_PROVIDER_LABEL_KEY: &str = PROVIDER_LABEL_KEY;

/// Every distinct label key, for validation and completion
pub const ALL_LABEL_KEYS: &[&str] = &[
    ADDON_PROVIDER_LABEL_KEY,
    PROVIDER_LABEL_KEY,
    ADDON_VERSION_LABEL_KEY,
    ADDON_NAME_LABEL_KEY,
    ADDON_MODEL_LABEL_KEY,
];

/// Get an addon's provider, preferring the current key over the legacy one
pub fn addon_provider(labels: &BTreeMap<String, String>) -> Option<&str> {
    labels
        .get(ADDON_PROVIDER_LABEL_KEY)
        .or_else(|| labels.get(PROVIDER_LABEL_KEY))
        .map(|s| s.as_str())
}

pub fn addon_version(labels: &BTreeMap<String, String>) -> Option<&str> {
    labels.get(ADDON_VERSION_LABEL_KEY).map(|s| s.as_str())
}

pub fn addon_model(labels: &BTreeMap<String, String>) -> Option<&str> {
    labels.get(ADDON_MODEL_LABEL_KEY).map(|s| s.as_str())
}

/// Label selector matching the resources of one addon
pub fn addon_selector(name: &str) -> String {
    format!("{}={}", ADDON_NAME_LABEL_KEY, name)
}

/// Helm release name an addon is installed under
pub fn addon_release_name(name: &str) -> String {
    format!("{}-{}", ADDON_RELEASE_PREFIX, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn make_labels(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_label_keys_are_unique() {
        let keys: HashSet<_> = ALL_LABEL_KEYS.iter().collect();
        assert_eq!(keys.len(), ALL_LABEL_KEYS.len());
    }

    #[test]
    fn test_addon_provider_prefers_current_key() {
        let labels = make_labels(&[
            ("addon.kubeblocks.io/provider", "community"),
            ("kubeblocks.io/provider", "apecloud"),
        ]);
        assert_eq!(addon_provider(&labels), Some("community"));
    }

    #[test]
    fn test_addon_provider_falls_back_to_legacy_key() {
        let labels = make_labels(&[("kubeblocks.io/provider", "apecloud")]);
        assert_eq!(addon_provider(&labels), Some("apecloud"));

        let empty = BTreeMap::new();
        assert_eq!(addon_provider(&empty), None);
    }

    #[test]
    fn test_addon_version_and_model() {
        let labels = make_labels(&[
            ("addon.kubeblocks.io/version", "0.8.1"),
            ("addon.kubeblocks.io/model", "RDBMS"),
        ]);
        assert_eq!(addon_version(&labels), Some("0.8.1"));
        assert_eq!(addon_model(&labels), Some("RDBMS"));
    }

    #[test]
    fn test_addon_selector_and_release_name() {
        assert_eq!(addon_selector("mysql"), "addon.kubeblocks.io/name=mysql");
        assert_eq!(addon_release_name("mysql"), "kb-addon-mysql");
    }
}
