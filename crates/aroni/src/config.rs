//! Configuration file.
use crate::{Error, Result};
use aroni_anchor::{BatchAnchorCoordinator, FileStore, OtsNotary};
use aroni_core::Tolerance;
use aroni_logs::Logger;
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

/// Configuration for the command line tool.
///
/// Relative paths are resolved against the directory that
/// contains the configuration file.
#[derive(Default, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AroniConfig {
    /// Storage for metadata, scan logs and anchors.
    pub storage: StorageConfig,

    /// External notarization of anchored roots.
    pub notary: NotaryConfig,

    /// Tolerances used when comparing scans to metadata.
    pub tolerance: Tolerance,

    /// Log file settings.
    pub logs: LogsConfig,

    #[serde(skip)]
    file: Option<PathBuf>,
}

/// Configuration for storage.
#[derive(Debug, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path to the store document.
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("aroni.json"),
        }
    }
}

/// Configuration for the notary.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct NotaryConfig {
    /// Submit anchored roots to the notary.
    pub enabled: bool,
    /// OpenTimestamps client executable.
    pub command: PathBuf,
    /// Directory for stamp files.
    pub output: PathBuf,
    /// Seconds to wait for the notary.
    pub timeout_secs: u64,
}

impl Default for NotaryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            command: PathBuf::from("ots"),
            output: PathBuf::from("stamps"),
            timeout_secs: 30,
        }
    }
}

/// Configuration for log files.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LogsConfig {
    /// Directory for log files.
    pub directory: PathBuf,
    /// Default log level when `RUST_LOG` is not set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("logs"),
            level: None,
        }
    }
}

impl AroniConfig {
    /// Load a config from a file path.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !tokio::fs::try_exists(path.as_ref()).await? {
            return Err(Error::NotFile(path.as_ref().to_path_buf()));
        }

        let contents = tokio::fs::read_to_string(path.as_ref()).await?;
        let mut config: AroniConfig = toml::from_str(&contents)?;
        config.file = Some(path.as_ref().canonicalize()?);
        Ok(config)
    }

    /// Path the config was loaded from.
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Parent directory of the configuration file.
    fn directory(&self) -> PathBuf {
        self.file
            .as_ref()
            .and_then(|file| file.parent())
            .map(|dir| dir.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_relative() {
            self.directory().join(path)
        } else {
            path.to_owned()
        }
    }

    /// Path to the store document.
    pub fn storage_path(&self) -> PathBuf {
        self.resolve(&self.storage.path)
    }

    /// Directory for notary stamp files.
    pub fn notary_output(&self) -> PathBuf {
        self.resolve(&self.notary.output)
    }

    /// Directory for log files.
    pub fn logs_dir(&self) -> PathBuf {
        self.resolve(&self.logs.directory)
    }

    /// Store backed by the configured storage path.
    pub fn store(&self) -> FileStore {
        FileStore::new(self.storage_path())
    }

    /// Coordinator for the configured store and notary.
    pub fn coordinator(&self) -> BatchAnchorCoordinator<FileStore> {
        let coordinator = BatchAnchorCoordinator::new(self.store());
        if self.notary.enabled {
            coordinator.with_notary(
                OtsNotary::new(&self.notary.command, self.notary_output()),
                Duration::from_secs(self.notary.timeout_secs),
            )
        } else {
            coordinator
        }
    }

    /// Logger writing to the configured directory.
    pub fn logger(&self) -> Logger {
        Logger::new(self.logs_dir())
    }
}
