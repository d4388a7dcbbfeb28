//! Catalogue of every resource kind kbcli addresses
//!
//! [`ResourceKind`] ties a Kubernetes `Kind` name to its coordinate so a
//! command can go from user input (`cluster`, `Backup`, `opsrequests`) to a
//! dynamic [`ApiResource`] without a per-command table.

use std::fmt;
use std::str::FromStr;

use kube::core::ApiResource;
use serde::{Serialize, Serializer};

use crate::coordinate::ResourceCoordinate;
use crate::error::TypesError;
use crate::gvr;

pub const KIND_CLUSTER: &str = "Cluster";
pub const KIND_COMPONENT_CLASS_DEFINITION: &str = "ComponentClassDefinition";
pub const KIND_CLUSTER_DEF: &str = "ClusterDefinition";
pub const KIND_CLUSTER_VERSION: &str = "ClusterVersion";
pub const KIND_CONFIG_CONSTRAINT: &str = "ConfigConstraint";
pub const KIND_CONFIGURATION: &str = "Configuration";
pub const KIND_BACKUP: &str = "Backup";
pub const KIND_RESTORE: &str = "Restore";
pub const KIND_BACKUP_POLICY: &str = "BackupPolicy";
pub const KIND_OPS: &str = "OpsRequest";
pub const KIND_BACKUP_SCHEDULE: &str = "BackupSchedule";
pub const KIND_BACKUP_POLICY_TEMPLATE: &str = "BackupPolicyTemplate";
pub const KIND_STATEFUL_SET: &str = "StatefulSet";
pub const KIND_DEPLOYMENT: &str = "Deployment";
pub const KIND_RSM: &str = "ReplicatedStateMachine";
pub const KIND_CONFIG_MAP: &str = "ConfigMap";

/// A logical resource kind with a fixed coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Pod,
    ConfigMap,
    Secret,
    Service,
    PersistentVolumeClaim,
    PersistentVolume,
    ServiceAccount,
    Deployment,
    StatefulSet,
    DaemonSet,
    Job,
    CronJob,
    ClusterRole,
    ClusterRoleBinding,
    Role,
    RoleBinding,
    ValidatingWebhookConfiguration,
    MutatingWebhookConfiguration,
    CustomResourceDefinition,
    StorageClass,
    VolumeSnapshotClass,
    Cluster,
    ClusterDefinition,
    ClusterVersion,
    ComponentDefinition,
    Component,
    OpsRequest,
    OpsDefinition,
    ComponentResourceConstraint,
    ComponentClassDefinition,
    ConfigConstraint,
    Configuration,
    BackupPolicyTemplate,
    ReplicatedStateMachine,
    Backup,
    BackupPolicy,
    BackupSchedule,
    ActionSet,
    BackupRepo,
    Restore,
    Addon,
    StorageProvider,
    MigrationTask,
    MigrationTemplate,
    Pgbench,
    Sysbench,
    Ycsb,
    Tpcc,
    Tpch,
    Tpcds,
    RedisBench,
}

impl ResourceKind {
    pub const ALL: &'static [ResourceKind] = &[
        Self::Pod,
        Self::ConfigMap,
        Self::Secret,
        Self::Service,
        Self::PersistentVolumeClaim,
        Self::PersistentVolume,
        Self::ServiceAccount,
        Self::Deployment,
        Self::StatefulSet,
        Self::DaemonSet,
        Self::Job,
        Self::CronJob,
        Self::ClusterRole,
        Self::ClusterRoleBinding,
        Self::Role,
        Self::RoleBinding,
        Self::ValidatingWebhookConfiguration,
        Self::MutatingWebhookConfiguration,
        Self::CustomResourceDefinition,
        Self::StorageClass,
        Self::VolumeSnapshotClass,
        Self::Cluster,
        Self::ClusterDefinition,
        Self::ClusterVersion,
        Self::ComponentDefinition,
        Self::Component,
        Self::OpsRequest,
        Self::OpsDefinition,
        Self::ComponentResourceConstraint,
        Self::ComponentClassDefinition,
        Self::ConfigConstraint,
        Self::Configuration,
        Self::BackupPolicyTemplate,
        Self::ReplicatedStateMachine,
        Self::Backup,
        Self::BackupPolicy,
        Self::BackupSchedule,
        Self::ActionSet,
        Self::BackupRepo,
        Self::Restore,
        Self::Addon,
        Self::StorageProvider,
        Self::MigrationTask,
        Self::MigrationTemplate,
        Self::Pgbench,
        Self::Sysbench,
        Self::Ycsb,
        Self::Tpcc,
        Self::Tpch,
        Self::Tpcds,
        Self::RedisBench,
    ];

    /// The Kubernetes `Kind` name
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Pod => "Pod",
            Self::ConfigMap => KIND_CONFIG_MAP,
            Self::Secret => "Secret",
            Self::Service => "Service",
            Self::PersistentVolumeClaim => "PersistentVolumeClaim",
            Self::PersistentVolume => "PersistentVolume",
            Self::ServiceAccount => "ServiceAccount",
            Self::Deployment => KIND_DEPLOYMENT,
            Self::StatefulSet => KIND_STATEFUL_SET,
            Self::DaemonSet => "DaemonSet",
            Self::Job => "Job",
            Self::CronJob => "CronJob",
            Self::ClusterRole => "ClusterRole",
            Self::ClusterRoleBinding => "ClusterRoleBinding",
            Self::Role => "Role",
            Self::RoleBinding => "RoleBinding",
            Self::ValidatingWebhookConfiguration => "ValidatingWebhookConfiguration",
            Self::MutatingWebhookConfiguration => "MutatingWebhookConfiguration",
            Self::CustomResourceDefinition => "CustomResourceDefinition",
            Self::StorageClass => "StorageClass",
            Self::VolumeSnapshotClass => "VolumeSnapshotClass",
            Self::Cluster => KIND_CLUSTER,
            Self::ClusterDefinition => KIND_CLUSTER_DEF,
            Self::ClusterVersion => KIND_CLUSTER_VERSION,
            Self::ComponentDefinition => "ComponentDefinition",
            Self::Component => "Component",
            Self::OpsRequest => KIND_OPS,
            Self::OpsDefinition => "OpsDefinition",
            Self::ComponentResourceConstraint => "ComponentResourceConstraint",
            Self::ComponentClassDefinition => KIND_COMPONENT_CLASS_DEFINITION,
            Self::ConfigConstraint => KIND_CONFIG_CONSTRAINT,
            Self::Configuration => KIND_CONFIGURATION,
            Self::BackupPolicyTemplate => KIND_BACKUP_POLICY_TEMPLATE,
            Self::ReplicatedStateMachine => KIND_RSM,
            Self::Backup => KIND_BACKUP,
            Self::BackupPolicy => KIND_BACKUP_POLICY,
            Self::BackupSchedule => KIND_BACKUP_SCHEDULE,
            Self::ActionSet => "ActionSet",
            Self::BackupRepo => "BackupRepo",
            Self::Restore => KIND_RESTORE,
            Self::Addon => "Addon",
            Self::StorageProvider => "StorageProvider",
            Self::MigrationTask => "MigrationTask",
            Self::MigrationTemplate => "MigrationTemplate",
            Self::Pgbench => "Pgbench",
            Self::Sysbench => "Sysbench",
            Self::Ycsb => "Ycsb",
            Self::Tpcc => "Tpcc",
            Self::Tpch => "Tpch",
            Self::Tpcds => "Tpcds",
            Self::RedisBench => "RedisBench",
        }
    }

    pub const fn coordinate(self) -> ResourceCoordinate {
        match self {
            Self::Pod => gvr::pod_gvr(),
            Self::ConfigMap => gvr::configmap_gvr(),
            Self::Secret => gvr::secret_gvr(),
            Self::Service => gvr::service_gvr(),
            Self::PersistentVolumeClaim => gvr::pvc_gvr(),
            Self::PersistentVolume => gvr::pv_gvr(),
            Self::ServiceAccount => gvr::service_account_gvr(),
            Self::Deployment => gvr::deploy_gvr(),
            Self::StatefulSet => gvr::stateful_set_gvr(),
            Self::DaemonSet => gvr::daemon_set_gvr(),
            Self::Job => gvr::job_gvr(),
            Self::CronJob => gvr::cron_job_gvr(),
            Self::ClusterRole => gvr::cluster_role_gvr(),
            Self::ClusterRoleBinding => gvr::cluster_role_binding_gvr(),
            Self::Role => gvr::role_gvr(),
            Self::RoleBinding => gvr::role_binding_gvr(),
            Self::ValidatingWebhookConfiguration => gvr::validating_webhook_configuration_gvr(),
            Self::MutatingWebhookConfiguration => gvr::mutating_webhook_configuration_gvr(),
            Self::CustomResourceDefinition => gvr::custom_resource_definition_gvr(),
            Self::StorageClass => gvr::storage_class_gvr(),
            Self::VolumeSnapshotClass => gvr::volume_snapshot_class_gvr(),
            Self::Cluster => gvr::cluster_gvr(),
            Self::ClusterDefinition => gvr::cluster_def_gvr(),
            Self::ClusterVersion => gvr::cluster_version_gvr(),
            Self::ComponentDefinition => gvr::comp_def_gvr(),
            Self::Component => gvr::component_gvr(),
            Self::OpsRequest => gvr::ops_gvr(),
            Self::OpsDefinition => gvr::ops_definition_gvr(),
            Self::ComponentResourceConstraint => gvr::component_resource_constraint_gvr(),
            Self::ComponentClassDefinition => gvr::component_class_definition_gvr(),
            Self::ConfigConstraint => gvr::config_constraint_gvr(),
            Self::Configuration => gvr::configuration_gvr(),
            Self::BackupPolicyTemplate => gvr::backup_policy_template_gvr(),
            Self::ReplicatedStateMachine => gvr::rsm_gvr(),
            Self::Backup => gvr::backup_gvr(),
            Self::BackupPolicy => gvr::backup_policy_gvr(),
            Self::BackupSchedule => gvr::backup_schedule_gvr(),
            Self::ActionSet => gvr::action_set_gvr(),
            Self::BackupRepo => gvr::backup_repo_gvr(),
            Self::Restore => gvr::restore_gvr(),
            Self::Addon => gvr::addon_gvr(),
            Self::StorageProvider => gvr::storage_provider_gvr(),
            Self::MigrationTask => gvr::migration_task_gvr(),
            Self::MigrationTemplate => gvr::migration_template_gvr(),
            Self::Pgbench => gvr::pg_bench_gvr(),
            Self::Sysbench => gvr::sysbench_gvr(),
            Self::Ycsb => gvr::ycsb_gvr(),
            Self::Tpcc => gvr::tpcc_gvr(),
            Self::Tpch => gvr::tpch_gvr(),
            Self::Tpcds => gvr::tpcds_gvr(),
            Self::RedisBench => gvr::redis_bench_gvr(),
        }
    }

    /// Dynamic-client description of this kind
    pub fn api_resource(self) -> ApiResource {
        self.coordinate().api_resource(self.kind())
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

/// Accepts a Kind name in any case, or a plural resource name
impl FromStr for ResourceKind {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .iter()
            .find(|k| k.kind().eq_ignore_ascii_case(name))
            .or_else(|| {
                Self::ALL
                    .iter()
                    .find(|k| k.coordinate().resource.eq_ignore_ascii_case(name))
            })
            .copied()
            .ok_or_else(|| TypesError::UnknownResourceKind {
                name: s.to_string(),
            })
    }
}

impl Serialize for ResourceKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.kind())
    }
}
