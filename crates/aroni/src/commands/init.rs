use crate::{AroniConfig, Error, Result, StorageConfig};
use std::path::PathBuf;

/// Write a default configuration file.
pub async fn init(output: PathBuf, mut path: Option<PathBuf>) -> Result<()> {
    if tokio::fs::try_exists(&output).await? {
        return Err(Error::FileExists(output));
    }

    let mut config: AroniConfig = Default::default();
    if let Some(path) = path.take() {
        config.storage = StorageConfig { path };
    }

    let content = toml::to_string_pretty(&config)?;
    tokio::fs::write(&output, content.as_bytes()).await?;
    Ok(())
}
