//! kbcli types - where kbcli finds things in a KubeBlocks cluster
//!
//! This crate provides:
//! - **Coordinates**: the (group, version, resource) triple of every API kbcli
//!   talks to, as `const` values ready for a dynamic client
//! - **Resource kinds**: a catalogue mapping Kind names and plurals to coordinates
//! - **Labels & annotations**: well-known keys and small lookup helpers
//! - **Defaults**: home directory layout, namespace, Helm chart and addon index
//!
//! Nothing here performs I/O or holds mutable state.

pub mod annotations;
pub mod coordinate;
pub mod defaults;
pub mod error;
pub mod groups;
pub mod gvr;
pub mod kind;
pub mod labels;

pub use coordinate::{ApiGroupVersion, ResourceCoordinate};
pub use error::{Result, TypesError};
pub use kind::ResourceKind;
