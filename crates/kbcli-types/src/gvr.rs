//! One accessor per resource kind
//!
//! Every function is a `const fn` with a single fixed result. A few
//! KubeBlocks resources pair the apps group with a version borrowed from
//! another group (`configuration_gvr`, `backup_policy_template_gvr`); these
//! triples match what the API server serves and must stay as they are.

use crate::coordinate::ResourceCoordinate;
use crate::groups::*;

// Core group

pub const fn pod_gvr() -> ResourceCoordinate {
    CORE_API.resource(RESOURCE_PODS)
}

pub const fn configmap_gvr() -> ResourceCoordinate {
    CORE_API.resource(RESOURCE_CONFIGMAPS)
}

pub const fn secret_gvr() -> ResourceCoordinate {
    CORE_API.resource(RESOURCE_SECRETS)
}

pub const fn service_gvr() -> ResourceCoordinate {
    CORE_API.resource(RESOURCE_SERVICES)
}

pub const fn pvc_gvr() -> ResourceCoordinate {
    CORE_API.resource(RESOURCE_PERSISTENT_VOLUME_CLAIMS)
}

pub const fn pv_gvr() -> ResourceCoordinate {
    CORE_API.resource(RESOURCE_PERSISTENT_VOLUMES)
}

pub const fn service_account_gvr() -> ResourceCoordinate {
    CORE_API.resource(SERVICE_ACCOUNTS)
}

// Built-in workloads and batch

pub const fn deploy_gvr() -> ResourceCoordinate {
    K8S_APPS_API.resource(RESOURCE_DEPLOYMENTS)
}

pub const fn stateful_set_gvr() -> ResourceCoordinate {
    K8S_APPS_API.resource(RESOURCE_STATEFUL_SETS)
}

pub const fn daemon_set_gvr() -> ResourceCoordinate {
    K8S_APPS_API.resource(RESOURCE_DAEMON_SETS)
}

pub const fn job_gvr() -> ResourceCoordinate {
    BATCH_API.resource(RESOURCE_JOBS)
}

pub const fn cron_job_gvr() -> ResourceCoordinate {
    BATCH_API.resource(RESOURCE_CRON_JOBS)
}

// RBAC

pub const fn cluster_role_gvr() -> ResourceCoordinate {
    RBAC_API.resource(CLUSTER_ROLES)
}

pub const fn cluster_role_binding_gvr() -> ResourceCoordinate {
    RBAC_API.resource(CLUSTER_ROLE_BINDINGS)
}

pub const fn role_gvr() -> ResourceCoordinate {
    RBAC_API.resource(ROLES)
}

pub const fn role_binding_gvr() -> ResourceCoordinate {
    RBAC_API.resource(ROLE_BINDINGS)
}

// Admission webhooks

pub const fn validating_webhook_configuration_gvr() -> ResourceCoordinate {
    WEBHOOK_API.resource(RESOURCE_VALIDATING_WEBHOOK_CONFIGURATIONS)
}

pub const fn mutating_webhook_configuration_gvr() -> ResourceCoordinate {
    WEBHOOK_API.resource(RESOURCE_MUTATING_WEBHOOK_CONFIGURATIONS)
}

// CRDs and storage

/// Short alias of [`custom_resource_definition_gvr`]
pub const fn crd_gvr() -> ResourceCoordinate {
    ResourceCoordinate::new(
        CUSTOM_RESOURCE_DEFINITION_API_GROUP,
        K8S_CORE_API_VERSION,
        RESOURCE_CUSTOM_RESOURCE_DEFINITION,
    )
}

pub const fn custom_resource_definition_gvr() -> ResourceCoordinate {
    CRD_API.resource(RESOURCE_CUSTOM_RESOURCE_DEFINITION)
}

pub const fn storage_class_gvr() -> ResourceCoordinate {
    K8S_STORAGE_API.resource(RESOURCE_STORAGE_CLASSES)
}

pub const fn volume_snapshot_class_gvr() -> ResourceCoordinate {
    SNAPSHOT_API.resource(RESOURCE_VOLUME_SNAPSHOT_CLASSES)
}

// KubeBlocks apps

pub const fn cluster_gvr() -> ResourceCoordinate {
    APPS_API.resource(RESOURCE_CLUSTERS)
}

pub const fn cluster_def_gvr() -> ResourceCoordinate {
    APPS_API.resource(RESOURCE_CLUSTER_DEFS)
}

pub const fn cluster_version_gvr() -> ResourceCoordinate {
    APPS_API.resource(RESOURCE_CLUSTER_VERSIONS)
}

pub const fn comp_def_gvr() -> ResourceCoordinate {
    APPS_API.resource(RESOURCE_COMPONENT_DEFS)
}

pub const fn component_gvr() -> ResourceCoordinate {
    APPS_API.resource(RESOURCE_COMPONENTS)
}

pub const fn ops_definition_gvr() -> ResourceCoordinate {
    APPS_API.resource(RESOURCE_OPS_DEFINITIONS)
}

pub const fn ops_gvr() -> ResourceCoordinate {
    APPS_API.resource(RESOURCE_OPS_REQUESTS)
}

pub const fn component_resource_constraint_gvr() -> ResourceCoordinate {
    APPS_API.resource(RESOURCE_COMPONENT_RESOURCE_CONSTRAINT)
}

pub const fn component_class_definition_gvr() -> ResourceCoordinate {
    APPS_API.resource(RESOURCE_COMPONENT_CLASS_DEFINITION)
}

pub const fn config_constraint_gvr() -> ResourceCoordinate {
    ResourceCoordinate::new(
        APPS_API_GROUP,
        APPS_API_BETA_VERSION,
        RESOURCE_CONFIG_CONSTRAINT_VERSIONS,
    )
}

pub const fn configuration_gvr() -> ResourceCoordinate {
    ResourceCoordinate::new(APPS_API_GROUP, DP_API_VERSION, RESOURCE_CONFIGURATION_VERSIONS)
}

pub const fn backup_policy_template_gvr() -> ResourceCoordinate {
    ResourceCoordinate::new(APPS_API_GROUP, DP_API_VERSION, RESOURCE_BACKUP_TEMPLATES)
}

pub const fn rsm_gvr() -> ResourceCoordinate {
    WORKLOADS_API.resource(RESOURCE_RSM)
}

// Data protection

pub const fn backup_gvr() -> ResourceCoordinate {
    DP_API.resource(RESOURCE_BACKUPS)
}

pub const fn backup_policy_gvr() -> ResourceCoordinate {
    DP_API.resource(RESOURCE_BACKUP_POLICIES)
}

pub const fn backup_schedule_gvr() -> ResourceCoordinate {
    DP_API.resource(RESOURCE_BACKUP_SCHEDULES)
}

pub const fn action_set_gvr() -> ResourceCoordinate {
    DP_API.resource(RESOURCE_ACTION_SETS)
}

pub const fn backup_repo_gvr() -> ResourceCoordinate {
    DP_API.resource(RESOURCE_BACKUP_REPOS)
}

pub const fn restore_gvr() -> ResourceCoordinate {
    DP_API.resource(RESOURCE_RESTORES)
}

// Extensions, storage providers, migration

pub const fn addon_gvr() -> ResourceCoordinate {
    EXTENSIONS_API.resource(RESOURCE_ADDONS)
}

pub const fn storage_provider_gvr() -> ResourceCoordinate {
    STORAGE_API.resource(RESOURCE_STORAGE_PROVIDERS)
}

pub const fn migration_task_gvr() -> ResourceCoordinate {
    MIGRATION_API.resource(RESOURCE_MIGRATION_TASKS)
}

pub const fn migration_template_gvr() -> ResourceCoordinate {
    MIGRATION_API.resource(RESOURCE_MIGRATION_TEMPLATES)
}

// Kubebench

pub const fn pg_bench_gvr() -> ResourceCoordinate {
    KUBEBENCH_API.resource(RESOURCE_PG_BENCH)
}

pub const fn sysbench_gvr() -> ResourceCoordinate {
    KUBEBENCH_API.resource(RESOURCE_SYS_BENCH)
}

pub const fn ycsb_gvr() -> ResourceCoordinate {
    KUBEBENCH_API.resource(RESOURCE_YCSB)
}

pub const fn tpcc_gvr() -> ResourceCoordinate {
    KUBEBENCH_API.resource(RESOURCE_TPCC)
}

pub const fn tpch_gvr() -> ResourceCoordinate {
    KUBEBENCH_API.resource(RESOURCE_TPCH)
}

pub const fn tpcds_gvr() -> ResourceCoordinate {
    KUBEBENCH_API.resource(RESOURCE_TPCDS)
}

pub const fn redis_bench_gvr() -> ResourceCoordinate {
    KUBEBENCH_API.resource(RESOURCE_REDIS_BENCH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(c: ResourceCoordinate) -> (&'static str, &'static str, &'static str) {
        (c.group, c.version, c.resource)
    }

    #[test]
    fn test_core_resources() {
        assert_eq!(triple(pod_gvr()), ("", "v1", "pods"));
        assert_eq!(triple(configmap_gvr()), ("", "v1", "configmaps"));
        assert_eq!(triple(secret_gvr()), ("", "v1", "secrets"));
        assert_eq!(triple(service_gvr()), ("", "v1", "services"));
        assert_eq!(triple(pvc_gvr()), ("", "v1", "persistentvolumeclaims"));
        assert_eq!(triple(pv_gvr()), ("", "v1", "persistentvolumes"));
        assert_eq!(triple(service_account_gvr()), ("", "v1", "serviceaccounts"));
    }

    #[test]
    fn test_builtin_workloads() {
        assert_eq!(triple(deploy_gvr()), ("apps", "v1", "deployments"));
        assert_eq!(triple(stateful_set_gvr()), ("apps", "v1", "statefulsets"));
        assert_eq!(triple(daemon_set_gvr()), ("apps", "v1", "daemonsets"));
        assert_eq!(triple(job_gvr()), ("batch", "v1", "jobs"));
        assert_eq!(triple(cron_job_gvr()), ("batch", "v1", "cronjobs"));
    }

    #[test]
    fn test_rbac_and_webhooks() {
        let rbac = "rbac.authorization.k8s.io";
        assert_eq!(triple(cluster_role_gvr()), (rbac, "v1", "clusterroles"));
        assert_eq!(
            triple(cluster_role_binding_gvr()),
            (rbac, "v1", "clusterrolebindings")
        );
        assert_eq!(triple(role_gvr()), (rbac, "v1", "roles"));
        assert_eq!(triple(role_binding_gvr()), (rbac, "v1", "rolebindings"));

        assert_eq!(
            triple(validating_webhook_configuration_gvr()),
            (
                "admissionregistration.k8s.io",
                "v1",
                "validatingwebhookconfigurations"
            )
        );
        assert_eq!(
            triple(mutating_webhook_configuration_gvr()),
            (
                "admissionregistration.k8s.io",
                "v1",
                "mutatingwebhookconfigurations"
            )
        );
    }

    #[test]
    fn test_crd_and_storage() {
        let crd = ("apiextensions.k8s.io", "v1", "customresourcedefinitions");
        assert_eq!(triple(crd_gvr()), crd);
        assert_eq!(triple(custom_resource_definition_gvr()), crd);
        assert_eq!(
            triple(storage_class_gvr()),
            ("storage.k8s.io", "v1", "storageclasses")
        );
        assert_eq!(
            triple(volume_snapshot_class_gvr()),
            ("snapshot.storage.k8s.io", "v1", "volumesnapshotclasses")
        );
    }

    #[test]
    fn test_kubeblocks_apps() {
        let g = "apps.kubeblocks.io";
        assert_eq!(triple(cluster_gvr()), (g, "v1alpha1", "clusters"));
        assert_eq!(triple(cluster_def_gvr()), (g, "v1alpha1", "clusterdefinitions"));
        assert_eq!(triple(cluster_version_gvr()), (g, "v1alpha1", "clusterversions"));
        assert_eq!(triple(comp_def_gvr()), (g, "v1alpha1", "componentdefinitions"));
        assert_eq!(triple(component_gvr()), (g, "v1alpha1", "components"));
        assert_eq!(triple(ops_gvr()), (g, "v1alpha1", "opsrequests"));
        assert_eq!(triple(ops_definition_gvr()), (g, "v1alpha1", "opsdefinitions"));
        assert_eq!(
            triple(component_resource_constraint_gvr()),
            (g, "v1alpha1", "componentresourceconstraints")
        );
        assert_eq!(
            triple(component_class_definition_gvr()),
            (g, "v1alpha1", "componentclassdefinitions")
        );
        assert_eq!(
            triple(backup_policy_template_gvr()),
            (g, "v1alpha1", "backuppolicytemplates")
        );
    }

    #[test]
    fn test_config_constraint_and_configuration_versions_differ() {
        assert_eq!(
            triple(config_constraint_gvr()),
            ("apps.kubeblocks.io", "v1beta1", "configconstraints")
        );
        assert_eq!(
            triple(configuration_gvr()),
            ("apps.kubeblocks.io", "v1alpha1", "configurations")
        );
    }

    #[test]
    fn test_data_protection() {
        let g = "dataprotection.kubeblocks.io";
        assert_eq!(triple(backup_gvr()), (g, "v1alpha1", "backups"));
        assert_eq!(triple(backup_policy_gvr()), (g, "v1alpha1", "backuppolicies"));
        assert_eq!(triple(backup_schedule_gvr()), (g, "v1alpha1", "backupschedules"));
        assert_eq!(triple(action_set_gvr()), (g, "v1alpha1", "actionsets"));
        assert_eq!(triple(backup_repo_gvr()), (g, "v1alpha1", "backuprepos"));
        assert_eq!(triple(restore_gvr()), (g, "v1alpha1", "restores"));
    }

    #[test]
    fn test_other_kubeblocks_groups() {
        assert_eq!(
            triple(addon_gvr()),
            ("extensions.kubeblocks.io", "v1alpha1", "addons")
        );
        assert_eq!(
            triple(storage_provider_gvr()),
            ("storage.kubeblocks.io", "v1alpha1", "storageproviders")
        );
        assert_eq!(
            triple(rsm_gvr()),
            ("workloads.kubeblocks.io", "v1alpha1", "replicatedstatemachines")
        );
        assert_eq!(
            triple(migration_task_gvr()),
            ("datamigration.apecloud.io", "v1alpha1", "migrationtasks")
        );
        assert_eq!(
            triple(migration_template_gvr()),
            ("datamigration.apecloud.io", "v1alpha1", "migrationtemplates")
        );
    }

    #[test]
    fn test_kubebench() {
        let g = "benchmark.apecloud.io";
        assert_eq!(triple(pg_bench_gvr()), (g, "v1alpha1", "pgbenches"));
        assert_eq!(triple(sysbench_gvr()), (g, "v1alpha1", "sysbenches"));
        assert_eq!(triple(ycsb_gvr()), (g, "v1alpha1", "ycsbs"));
        assert_eq!(triple(tpcc_gvr()), (g, "v1alpha1", "tpccs"));
        assert_eq!(triple(tpch_gvr()), (g, "v1alpha1", "tpches"));
        assert_eq!(triple(tpcds_gvr()), (g, "v1alpha1", "tpcds"));
        assert_eq!(triple(redis_bench_gvr()), (g, "v1alpha1", "redisbenches"));
    }

    #[test]
    fn test_accessors_are_usable_in_const_context() {
        const CLUSTER: ResourceCoordinate = cluster_gvr();
        assert_eq!(CLUSTER, cluster_gvr());
    }
}
