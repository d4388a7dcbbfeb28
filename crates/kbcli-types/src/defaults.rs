//! CLI defaults: home layout, namespace, Helm coordinates, addon index
//!
//! Values derived from other constants are built at compile time with
//! `concatcp!`, so there is nothing to initialize at runtime.

use const_format::concatcp;
use std::path::MAIN_SEPARATOR_STR;

// ============================================================================
// Home directory layout
// ============================================================================

/// Directory under the user's home that holds kbcli state
pub const CLI_DEFAULT_HOME: &str = ".kbcli";
/// Environment variable overriding the kbcli home directory
pub const CLI_HOME_ENV: &str = "KBCLI_HOME";
pub const CLI_CLUSTER_TYPE_CONFIGS: &str = "cluster_types";
pub const CLI_CHARTS_CACHE: &str = "charts";
pub const CLI_LOG_DIR: &str = "logs";
pub const DEFAULT_LOG_FILE_PREFIX: &str = "kbcli";

// ============================================================================
// Addon index
// ============================================================================

/// Environment variable overriding the addon index directory
pub const ADDON_INDEX_DIR_ENV: &str = "KBCLI_ADDON_INDEX_DIR";
pub const DEFAULT_INDEX_NAME: &str = "kubeblocks";
pub const DEFAULT_ADDON_INDEX_URL: &str = "https://github.com/apecloud/block-index.git";
/// Addon index location relative to the kbcli home
pub const ADDON_INDEX_DIR: &str = concatcp!("addon", MAIN_SEPARATOR_STR, "index");

// ============================================================================
// Cluster-side defaults
// ============================================================================

/// Namespace KubeBlocks is installed into unless told otherwise
pub const DEFAULT_NAMESPACE: &str = "kb-system";

pub const KUBEBLOCKS_REPO_NAME: &str = "kubeblocks";
pub const KUBEBLOCKS_CHART_NAME: &str = "kubeblocks";
pub const KUBEBLOCKS_RELEASE_NAME: &str = "kubeblocks";
pub const KUBEBLOCKS_CHART_URL: &str = "https://apecloud.github.io/helm-charts";
/// Mirror of the chart repo hosted on GitLab
pub const GITLAB_HELM_CHART_REPO: &str =
    "https://jihulab.com/api/v4/projects/85949/packages/helm/stable";

/// Selector for the Helm release secrets of the KubeBlocks chart
pub const KUBEBLOCKS_HELM_LABEL: &str =
    concatcp!("name", "=", KUBEBLOCKS_CHART_NAME, ",", "owner", "=", "helm");

pub const KUBEBLOCKS_MANAGER_CONFIG_MAP_NAME: &str =
    concatcp!(KUBEBLOCKS_CHART_NAME, "-manager-config");

// ============================================================================
// Addon charts
// ============================================================================

pub const ADDON_RELEASE_PREFIX: &str = "kb-addon";
/// Values key prefixing the names of every resource an addon renders
pub const ADDON_RESOURCE_NAME_PREFIX: &str = "resourceNamePrefix";
/// Image registry key in addon chart values
pub const IMAGE_REGISTRY_KEY: &str = "image.registry";

// ============================================================================
// Misc
// ============================================================================

/// k3d cluster name used by the playground
pub const K3D_CLUSTER_NAME: &str = "kb-playground";

/// Placeholder for empty table cells
pub const NONE: &str = "<none>";
