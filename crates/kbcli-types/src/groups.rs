//! API groups and resource names
//!
//! Built-in group names come from the `k8s-openapi` type definitions instead
//! of string literals so they follow upstream if it ever renames a group.

use k8s_openapi::Resource;
use k8s_openapi::api::admissionregistration::v1::ValidatingWebhookConfiguration;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::batch::v1::Job;
use k8s_openapi::api::core::v1::Pod;
use k8s_openapi::api::rbac::v1::ClusterRole;
use k8s_openapi::api::storage::v1::StorageClass;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;

use crate::coordinate::ApiGroupVersion;

// ============================================================================
// Kubernetes built-in groups
// ============================================================================

/// Version shared by the core group and most built-in groups kbcli uses
pub const K8S_CORE_API_VERSION: &str = "v1";

pub const CORE_API_GROUP: &str = <Pod as Resource>::GROUP;
pub const CORE_API: ApiGroupVersion = ApiGroupVersion::new(CORE_API_GROUP, K8S_CORE_API_VERSION);

pub const K8S_APPS_API_GROUP: &str = <Deployment as Resource>::GROUP;
pub const K8S_APPS_API: ApiGroupVersion =
    ApiGroupVersion::new(K8S_APPS_API_GROUP, K8S_CORE_API_VERSION);

pub const K8S_BATCH_API_GROUP: &str = <Job as Resource>::GROUP;
pub const K8S_BATCH_API_VERSION: &str = "v1";
pub const BATCH_API: ApiGroupVersion =
    ApiGroupVersion::new(K8S_BATCH_API_GROUP, K8S_BATCH_API_VERSION);

pub const RBAC_API_GROUP: &str = <ClusterRole as Resource>::GROUP;
pub const RBAC_API_VERSION: &str = "v1";
pub const RBAC_API: ApiGroupVersion = ApiGroupVersion::new(RBAC_API_GROUP, RBAC_API_VERSION);

pub const WEBHOOK_API_GROUP: &str = <ValidatingWebhookConfiguration as Resource>::GROUP;
pub const K8S_WEBHOOK_API_VERSION: &str = "v1";
pub const WEBHOOK_API: ApiGroupVersion =
    ApiGroupVersion::new(WEBHOOK_API_GROUP, K8S_WEBHOOK_API_VERSION);

pub const CUSTOM_RESOURCE_DEFINITION_API_GROUP: &str =
    <CustomResourceDefinition as Resource>::GROUP;
pub const CUSTOM_RESOURCE_DEFINITION_API_VERSION: &str = "v1";
pub const CRD_API: ApiGroupVersion = ApiGroupVersion::new(
    CUSTOM_RESOURCE_DEFINITION_API_GROUP,
    CUSTOM_RESOURCE_DEFINITION_API_VERSION,
);

pub const K8S_STORAGE_API_GROUP: &str = <StorageClass as Resource>::GROUP;
pub const K8S_STORAGE_API: ApiGroupVersion =
    ApiGroupVersion::new(K8S_STORAGE_API_GROUP, K8S_CORE_API_VERSION);

/// CSI external-snapshotter group (not part of the built-in API types)
pub const SNAPSHOT_API_GROUP: &str = "snapshot.storage.k8s.io";
pub const SNAPSHOT_API: ApiGroupVersion =
    ApiGroupVersion::new(SNAPSHOT_API_GROUP, K8S_CORE_API_VERSION);

pub const RESOURCE_PODS: &str = "pods";
pub const RESOURCE_CONFIGMAPS: &str = "configmaps";
pub const RESOURCE_SECRETS: &str = "secrets";
pub const RESOURCE_SERVICES: &str = "services";
pub const RESOURCE_PERSISTENT_VOLUME_CLAIMS: &str = "persistentvolumeclaims";
pub const RESOURCE_PERSISTENT_VOLUMES: &str = "persistentvolumes";
pub const RESOURCE_DEPLOYMENTS: &str = "deployments";
pub const RESOURCE_STATEFUL_SETS: &str = "statefulsets";
pub const RESOURCE_DAEMON_SETS: &str = "daemonsets";
pub const RESOURCE_JOBS: &str = "jobs";
pub const RESOURCE_CRON_JOBS: &str = "cronjobs";
pub const RESOURCE_VALIDATING_WEBHOOK_CONFIGURATIONS: &str = "validatingwebhookconfigurations";
pub const RESOURCE_MUTATING_WEBHOOK_CONFIGURATIONS: &str = "mutatingwebhookconfigurations";
pub const RESOURCE_CUSTOM_RESOURCE_DEFINITION: &str = "customresourcedefinitions";
pub const RESOURCE_STORAGE_CLASSES: &str = "storageclasses";
pub const RESOURCE_VOLUME_SNAPSHOT_CLASSES: &str = "volumesnapshotclasses";

pub const CLUSTER_ROLES: &str = "clusterroles";
pub const CLUSTER_ROLE_BINDINGS: &str = "clusterrolebindings";
pub const ROLES: &str = "roles";
pub const ROLE_BINDINGS: &str = "rolebindings";
pub const SERVICE_ACCOUNTS: &str = "serviceaccounts";

// ============================================================================
// KubeBlocks apps group
// ============================================================================

pub const APPS_API_GROUP: &str = "apps.kubeblocks.io";
pub const APPS_API_VERSION: &str = "v1alpha1";
/// Version the config-constraint API graduated to
pub const APPS_API_BETA_VERSION: &str = "v1beta1";
pub const APPS_API: ApiGroupVersion = ApiGroupVersion::new(APPS_API_GROUP, APPS_API_VERSION);

pub const RESOURCE_CLUSTERS: &str = "clusters";
pub const RESOURCE_CLUSTER_DEFS: &str = "clusterdefinitions";
pub const RESOURCE_CLUSTER_VERSIONS: &str = "clusterversions";
pub const RESOURCE_COMPONENT_DEFS: &str = "componentdefinitions";
pub const RESOURCE_COMPONENTS: &str = "components";
pub const RESOURCE_OPS_REQUESTS: &str = "opsrequests";
pub const RESOURCE_OPS_DEFINITIONS: &str = "opsdefinitions";
pub const RESOURCE_CONFIG_CONSTRAINT_VERSIONS: &str = "configconstraints";
pub const RESOURCE_CONFIGURATION_VERSIONS: &str = "configurations";
pub const RESOURCE_COMPONENT_RESOURCE_CONSTRAINT: &str = "componentresourceconstraints";
pub const RESOURCE_COMPONENT_CLASS_DEFINITION: &str = "componentclassdefinitions";

// ============================================================================
// KubeBlocks workloads group
// ============================================================================

pub const WORKLOADS_API_GROUP: &str = "workloads.kubeblocks.io";
pub const WORKLOADS_API_VERSION: &str = "v1alpha1";
pub const WORKLOADS_API: ApiGroupVersion =
    ApiGroupVersion::new(WORKLOADS_API_GROUP, WORKLOADS_API_VERSION);

pub const RESOURCE_RSM: &str = "replicatedstatemachines";

// ============================================================================
// Data protection group
// ============================================================================

pub const DP_API_GROUP: &str = "dataprotection.kubeblocks.io";
pub const DP_API_VERSION: &str = "v1alpha1";
pub const DP_API: ApiGroupVersion = ApiGroupVersion::new(DP_API_GROUP, DP_API_VERSION);

pub const RESOURCE_BACKUPS: &str = "backups";
pub const RESOURCE_ACTION_SETS: &str = "actionsets";
pub const RESOURCE_RESTORES: &str = "restores";
pub const RESOURCE_BACKUP_POLICIES: &str = "backuppolicies";
pub const RESOURCE_BACKUP_REPOS: &str = "backuprepos";
pub const RESOURCE_BACKUP_SCHEDULES: &str = "backupschedules";
pub const RESOURCE_BACKUP_TEMPLATES: &str = "backuppolicytemplates";

// ============================================================================
// Extensions, storage and migration groups
// ============================================================================

pub const EXTENSIONS_API_GROUP: &str = "extensions.kubeblocks.io";
pub const EXTENSIONS_API_VERSION: &str = "v1alpha1";
pub const EXTENSIONS_API: ApiGroupVersion =
    ApiGroupVersion::new(EXTENSIONS_API_GROUP, EXTENSIONS_API_VERSION);

pub const RESOURCE_ADDONS: &str = "addons";

pub const STORAGE_API_GROUP: &str = "storage.kubeblocks.io";
pub const STORAGE_API_VERSION: &str = "v1alpha1";
pub const STORAGE_API: ApiGroupVersion =
    ApiGroupVersion::new(STORAGE_API_GROUP, STORAGE_API_VERSION);

pub const RESOURCE_STORAGE_PROVIDERS: &str = "storageproviders";

pub const MIGRATION_API_GROUP: &str = "datamigration.apecloud.io";
pub const MIGRATION_API_VERSION: &str = "v1alpha1";
pub const MIGRATION_API: ApiGroupVersion =
    ApiGroupVersion::new(MIGRATION_API_GROUP, MIGRATION_API_VERSION);

pub const RESOURCE_MIGRATION_TASKS: &str = "migrationtasks";
pub const RESOURCE_MIGRATION_TEMPLATES: &str = "migrationtemplates";

// ============================================================================
// Kubebench group
// ============================================================================

pub const KUBEBENCH_API_GROUP: &str = "benchmark.apecloud.io";
pub const KUBEBENCH_API_VERSION: &str = "v1alpha1";
pub const KUBEBENCH_API: ApiGroupVersion =
    ApiGroupVersion::new(KUBEBENCH_API_GROUP, KUBEBENCH_API_VERSION);

pub const RESOURCE_PG_BENCH: &str = "pgbenches";
pub const RESOURCE_SYS_BENCH: &str = "sysbenches";
pub const RESOURCE_YCSB: &str = "ycsbs";
pub const RESOURCE_TPCC: &str = "tpccs";
pub const RESOURCE_TPCH: &str = "tpches";
pub const RESOURCE_TPCDS: &str = "tpcds";
pub const RESOURCE_REDIS_BENCH: &str = "redisbenches";
