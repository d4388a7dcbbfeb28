//! Well-known annotation keys and their parsers

use std::collections::BTreeMap;

/// HA virtual-IP type requested for a Service
pub const SERVICE_HAVIP_TYPE_ANNOTATION_KEY: &str = "service.kubernetes.io/kubeblocks-havip-type";
pub const SERVICE_HAVIP_TYPE_ANNOTATION_VALUE: &str = "private-ip";
pub const SERVICE_FLOATING_IP_ANNOTATION_KEY: &str =
    "service.kubernetes.io/kubeblocks-havip-floating-ip";

/// Marks ConfigMaps to load on reload
pub const RELOAD_CONFIG_MAP_ANNOTATION_KEY: &str = "kubeblocks.io/reload-configmap";

/// KubeBlocks version constraint an addon is validated against
pub const KB_VERSION_VALIDATE_ANNOTATION_KEY: &str = "addon.kubeblocks.io/kubeblocks-version";

/// Marks the ClusterVersion used when none is given
pub const KB_DEFAULT_CLUSTER_VERSION_ANNOTATION_KEY: &str =
    "kubeblocks.io/is-default-cluster-version";

pub const ALL_ANNOTATION_KEYS: &[&str] = &[
    SERVICE_HAVIP_TYPE_ANNOTATION_KEY,
    SERVICE_FLOATING_IP_ANNOTATION_KEY,
    RELOAD_CONFIG_MAP_ANNOTATION_KEY,
    KB_VERSION_VALIDATE_ANNOTATION_KEY,
    KB_DEFAULT_CLUSTER_VERSION_ANNOTATION_KEY,
];

fn get<'a>(annotations: &'a BTreeMap<String, String>, key: &str) -> Option<&'a str> {
    annotations.get(key).map(|s| s.as_str())
}

pub fn is_default_cluster_version(annotations: &BTreeMap<String, String>) -> bool {
    get(annotations, KB_DEFAULT_CLUSTER_VERSION_ANNOTATION_KEY)
        .map(|s| s.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

pub fn kb_version_constraint(annotations: &BTreeMap<String, String>) -> Option<&str> {
    get(annotations, KB_VERSION_VALIDATE_ANNOTATION_KEY)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Check if the Service asks for a private HA virtual IP
pub fn is_private_havip(annotations: &BTreeMap<String, String>) -> bool {
    get(annotations, SERVICE_HAVIP_TYPE_ANNOTATION_KEY) == Some(SERVICE_HAVIP_TYPE_ANNOTATION_VALUE)
}

pub fn floating_ip(annotations: &BTreeMap<String, String>) -> Option<&str> {
    get(annotations, SERVICE_FLOATING_IP_ANNOTATION_KEY)
}

/// Parse the ConfigMap names under the reload marker
/// Format: "name" or "name,name"
pub fn reload_config_maps(annotations: &BTreeMap<String, String>) -> Vec<String> {
    get(annotations, RELOAD_CONFIG_MAP_ANNOTATION_KEY)
        .map(|s| {
            s.split(',')
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn make_annotations(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_annotation_keys_are_unique() {
        let keys: HashSet<_> = ALL_ANNOTATION_KEYS.iter().collect();
        assert_eq!(keys.len(), ALL_ANNOTATION_KEYS.len());
    }

    #[test]
    fn test_is_default_cluster_version() {
        let annotations =
            make_annotations(&[("kubeblocks.io/is-default-cluster-version", "true")]);
        assert!(is_default_cluster_version(&annotations));

        let annotations =
            make_annotations(&[("kubeblocks.io/is-default-cluster-version", "TRUE")]);
        assert!(is_default_cluster_version(&annotations));

        let annotations =
            make_annotations(&[("kubeblocks.io/is-default-cluster-version", "false")]);
        assert!(!is_default_cluster_version(&annotations));

        assert!(!is_default_cluster_version(&BTreeMap::new()));
    }

    #[test]
    fn test_kb_version_constraint() {
        let annotations =
            make_annotations(&[("addon.kubeblocks.io/kubeblocks-version", ">=0.7.0")]);
        assert_eq!(kb_version_constraint(&annotations), Some(">=0.7.0"));

        let annotations = make_annotations(&[("addon.kubeblocks.io/kubeblocks-version", " ")]);
        assert_eq!(kb_version_constraint(&annotations), None);
    }

    #[test]
    fn test_havip() {
        let annotations = make_annotations(&[
            ("service.kubernetes.io/kubeblocks-havip-type", "private-ip"),
            (
                "service.kubernetes.io/kubeblocks-havip-floating-ip",
                "172.31.0.10",
            ),
        ]);
        assert!(is_private_havip(&annotations));
        assert_eq!(floating_ip(&annotations), Some("172.31.0.10"));

        let annotations =
            make_annotations(&[("service.kubernetes.io/kubeblocks-havip-type", "public")]);
        assert!(!is_private_havip(&annotations));
        assert_eq!(floating_ip(&annotations), None);
    }

    #[test]
    fn test_reload_config_maps() {
        let annotations = make_annotations(&[(
            "kubeblocks.io/reload-configmap",
            "mysql-config, mysql-scripts,,",
        )]);
        assert_eq!(
            reload_config_maps(&annotations),
            vec!["mysql-config", "mysql-scripts"]
        );

        assert!(reload_config_maps(&BTreeMap::new()).is_empty());
    }
}
