//! kbcli env - where kbcli keeps its files on the local machine
//!
//! Resolves the kbcli home directory (`~/.kbcli` unless `KBCLI_HOME` says
//! otherwise) and the log, chart-cache and addon-index directories under it.

pub mod error;
pub mod home;

pub use error::{EnvError, Result};
pub use home::CliHome;
