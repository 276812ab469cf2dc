//! Implementations of the command line subcommands.
mod anchor;
mod init;
mod logs;
mod scan;
mod tools;

pub use anchor::{anchor, list_anchors, proof};
pub use init::init;
pub use logs::logs;
pub use scan::{declare_metadata, history, record_scan};
pub use tools::{hash, root, verify};

use crate::{Error, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;

/// Read a JSON document from a file.
pub(crate) async fn read_json<T: DeserializeOwned>(file: &Path) -> Result<T> {
    if !tokio::fs::metadata(file).await?.is_file() {
        return Err(Error::NotFile(file.to_path_buf()));
    }
    let buffer = tokio::fs::read(file).await?;
    Ok(serde_json::from_slice(&buffer)?)
}

/// Print a value as pretty JSON to stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
