//! API coordinates for dynamic clients
//!
//! A [`ResourceCoordinate`] is the (group, version, plural resource) triple
//! that addresses a REST endpoint. Coordinates are plain `&'static str` data
//! built in `const` context from an [`ApiGroupVersion`], so every resource of
//! one API group picks up a version change from a single constant.

use std::fmt;

use kube::core::{ApiResource, GroupVersionResource};
use serde::Serialize;

/// An API group together with the version kbcli talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ApiGroupVersion {
    /// API group ("" for the core group)
    pub group: &'static str,
    /// Served version
    pub version: &'static str,
}

impl ApiGroupVersion {
    pub const fn new(group: &'static str, version: &'static str) -> Self {
        Self { group, version }
    }

    /// Address a resource of this group by its plural name
    pub const fn resource(self, resource: &'static str) -> ResourceCoordinate {
        ResourceCoordinate::new(self.group, self.version, resource)
    }
}

/// Group, version and plural resource name of an API endpoint
///
/// Two coordinates are equal iff all three fields are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ResourceCoordinate {
    /// API group ("" for the core group)
    pub group: &'static str,
    /// API version
    pub version: &'static str,
    /// Lower-case plural resource name as used in REST paths
    pub resource: &'static str,
}

impl ResourceCoordinate {
    pub const fn new(group: &'static str, version: &'static str, resource: &'static str) -> Self {
        Self {
            group,
            version,
            resource,
        }
    }

    /// Check if this resource lives in the legacy core group
    pub const fn is_core(&self) -> bool {
        self.group.is_empty()
    }

    /// The `apiVersion` field value for objects of this resource
    pub fn api_version(&self) -> String {
        if self.is_core() {
            self.version.to_string()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }

    /// Describe this resource for `Api::<DynamicObject>`
    pub fn api_resource(&self, kind: &str) -> ApiResource {
        ApiResource {
            group: self.group.to_string(),
            version: self.version.to_string(),
            api_version: self.api_version(),
            kind: kind.to_string(),
            plural: self.resource.to_string(),
        }
    }
}

impl From<ResourceCoordinate> for GroupVersionResource {
    fn from(c: ResourceCoordinate) -> Self {
        GroupVersionResource::gvr(c.group, c.version, c.resource)
    }
}

/// Fully-qualified form used by kubectl: `clusters.v1alpha1.apps.kubeblocks.io`
impl fmt::Display for ResourceCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_core() {
            write!(f, "{}.{}", self.resource, self.version)
        } else {
            write!(f, "{}.{}.{}", self.resource, self.version, self.group)
        }
    }
}
