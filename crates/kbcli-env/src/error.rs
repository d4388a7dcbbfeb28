//! Error types for kbcli-env

use std::path::PathBuf;

use kbcli_types::defaults::CLI_HOME_ENV;
use thiserror::Error;

/// Result type for kbcli-env operations
pub type Result<T> = std::result::Result<T, EnvError>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EnvError {
    /// No user home directory and no override
    #[error(
        "could not determine the user home directory\nHint: set {} to choose where kbcli keeps its files",
        CLI_HOME_ENV
    )]
    HomeNotFound,

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
