//! Error types for kbcli-types

use thiserror::Error;

/// Result type for kbcli-types operations
pub type Result<T> = std::result::Result<T, TypesError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TypesError {
    /// Neither a known Kind nor a known plural resource name
    #[error("unknown resource kind '{name}'")]
    UnknownResourceKind { name: String },
}
