//! kbcli home directory layout
//!
//! ```text
//! ~/.kbcli/              (or $KBCLI_HOME)
//! ├── logs/              kbcli.<pid>.log
//! ├── charts/            Helm chart cache
//! ├── cluster_types/     cluster-type configs
//! └── addon/index/       addon indexes (or $KBCLI_ADDON_INDEX_DIR)
//!     └── kubeblocks/    default index
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use kbcli_types::defaults::{
    ADDON_INDEX_DIR, ADDON_INDEX_DIR_ENV, CLI_CHARTS_CACHE, CLI_CLUSTER_TYPE_CONFIGS,
    CLI_DEFAULT_HOME, CLI_HOME_ENV, CLI_LOG_DIR, DEFAULT_INDEX_NAME, DEFAULT_LOG_FILE_PREFIX,
};

use crate::error::{EnvError, Result};

/// Resolved kbcli home directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliHome {
    root: PathBuf,
    addon_index_override: Option<PathBuf>,
}

impl CliHome {
    /// Resolve from the process environment and the user's home directory
    pub fn resolve() -> Result<Self> {
        Self::resolve_with(|key| std::env::var_os(key), dirs::home_dir())
    }

    /// Resolve with an explicit environment lookup
    ///
    /// Empty values count as unset.
    pub fn resolve_with<F>(lookup: F, home_dir: Option<PathBuf>) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let var = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        };

        let root = match var(CLI_HOME_ENV) {
            Some(root) => {
                tracing::debug!("Using kbcli home from {}: {}", CLI_HOME_ENV, root.display());
                root
            }
            None => home_dir.ok_or(EnvError::HomeNotFound)?.join(CLI_DEFAULT_HOME),
        };

        let addon_index_override = var(ADDON_INDEX_DIR_ENV);
        if let Some(dir) = &addon_index_override {
            tracing::debug!(
                "Using addon index dir from {}: {}",
                ADDON_INDEX_DIR_ENV,
                dir.display()
            );
        }

        Ok(Self {
            root,
            addon_index_override,
        })
    }

    /// Use `root` as the home directory, ignoring the environment
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            addon_index_override: None,
        }
    }

    /// Keep addon indexes outside the home directory
    pub fn with_addon_index_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.addon_index_override = Some(dir.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn log_dir(&self) -> PathBuf {
        self.root.join(CLI_LOG_DIR)
    }

    /// Log file for the process `pid`
    pub fn log_file(&self, pid: u32) -> PathBuf {
        self.log_dir()
            .join(format!("{}.{}.log", DEFAULT_LOG_FILE_PREFIX, pid))
    }

    pub fn charts_cache_dir(&self) -> PathBuf {
        self.root.join(CLI_CHARTS_CACHE)
    }

    pub fn cluster_types_dir(&self) -> PathBuf {
        self.root.join(CLI_CLUSTER_TYPE_CONFIGS)
    }

    pub fn addon_index_dir(&self) -> PathBuf {
        match &self.addon_index_override {
            Some(dir) => dir.clone(),
            None => self.root.join(ADDON_INDEX_DIR),
        }
    }

    /// Checkout of the default addon index
    pub fn default_index_dir(&self) -> PathBuf {
        self.addon_index_dir().join(DEFAULT_INDEX_NAME)
    }

    /// Create the home directory and the subdirectories kbcli writes to
    pub fn ensure_dirs(&self) -> Result<()> {
        let dirs = [
            self.root.clone(),
            self.log_dir(),
            self.charts_cache_dir(),
            self.addon_index_dir(),
        ];

        for dir in dirs {
            if dir.is_dir() {
                continue;
            }
            std::fs::create_dir_all(&dir).map_err(|source| EnvError::CreateDir {
                path: dir.clone(),
                source,
            })?;
            tracing::debug!("Created {}", dir.display());
        }
        Ok(())
    }
}
