use crate::Result;
use std::path::{Path, PathBuf};
use time::{format_description, OffsetDateTime};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

const LOG_FILE_NAME: &str = "aroni.log";
const DEFAULT_LOG_LEVEL: &str = "aroni=info";

/// State of the log files on disc.
#[derive(Debug, Clone)]
pub struct LogFileStatus {
    /// Path to the log file for today.
    pub current: PathBuf,
    /// All log files in the directory.
    pub log_files: Vec<PathBuf>,
    /// Total size of the log files in bytes.
    pub total: u64,
}

/// Application logger.
///
/// Writes human readable output to stderr and, when a file
/// subscriber is installed, JSON lines to a file that is rolled
/// over daily.
pub struct Logger {
    logs_dir: PathBuf,
    name: String,
}

impl Logger {
    /// Create a logger writing to a directory.
    pub fn new(logs_dir: impl AsRef<Path>) -> Self {
        Self::new_name(logs_dir, LOG_FILE_NAME)
    }

    /// Create a logger with a custom file name prefix.
    pub fn new_name(logs_dir: impl AsRef<Path>, name: impl Into<String>) -> Self {
        Self {
            logs_dir: logs_dir.as_ref().to_path_buf(),
            name: name.into(),
        }
    }

    /// Directory for log files.
    pub fn logs_dir(&self) -> &Path {
        &self.logs_dir
    }

    /// Install a global subscriber writing to stderr and to
    /// the rolling log file.
    ///
    /// The `RUST_LOG` environment variable takes precedence over
    /// the default log level.
    pub fn init_file_subscriber(
        &self,
        default_log_level: Option<String>,
    ) -> Result<()> {
        std::fs::create_dir_all(&self.logs_dir)?;
        let logfile =
            RollingFileAppender::new(Rotation::DAILY, &self.logs_dir, &self.name);

        let file_layer = fmt::layer()
            .json()
            .with_ansi(false)
            .with_writer(logfile);
        let stderr_layer = fmt::layer()
            .without_time()
            .with_target(false)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(env_filter(default_log_level)?)
            .with(file_layer)
            .with(stderr_layer)
            .try_init()?;
        Ok(())
    }

    /// Install a global subscriber writing only to stderr.
    pub fn init_subscriber(default_log_level: Option<String>) -> Result<()> {
        tracing_subscriber::registry()
            .with(env_filter(default_log_level)?)
            .with(
                fmt::layer()
                    .without_time()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
        Ok(())
    }

    /// Path to the log file for today.
    pub fn current_log_file(&self) -> Result<PathBuf> {
        let format = format_description::parse("[year]-[month]-[day]")?;
        let date = OffsetDateTime::now_utc().date().format(&format)?;
        Ok(self.logs_dir.join(format!("{}.{}", self.name, date)))
    }

    /// Status of the log files.
    pub fn status(&self) -> Result<LogFileStatus> {
        let current = self.current_log_file()?;
        let log_files = self.log_files()?;
        let mut total = 0;
        for path in &log_files {
            total += std::fs::metadata(path)?.len();
        }
        Ok(LogFileStatus {
            current,
            log_files,
            total,
        })
    }

    /// Delete every log file except the one for today.
    pub fn delete_logs(&self) -> Result<()> {
        let current = self.current_log_file()?;
        for path in self.log_files()? {
            if path != current {
                std::fs::remove_file(path)?;
            }
        }
        Ok(())
    }

    fn log_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        if !self.logs_dir.exists() {
            return Ok(files);
        }
        for entry in std::fs::read_dir(&self.logs_dir)? {
            let entry = entry?;
            let path = entry.path();
            let is_log = path
                .file_name()
                .map(|name| name.to_string_lossy().starts_with(&self.name))
                .unwrap_or(false);
            if path.is_file() && is_log {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

fn env_filter(default_log_level: Option<String>) -> Result<EnvFilter> {
    let directives = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(value) if !value.is_empty() => value,
        _ => default_log_level.unwrap_or_else(|| DEFAULT_LOG_LEVEL.into()),
    };
    Ok(EnvFilter::try_new(directives)?)
}
