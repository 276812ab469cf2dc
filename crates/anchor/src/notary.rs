//! External notarization of anchored roots.
use crate::{Error, Result};
use aroni_core::LeafHash;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Independent timestamping of an anchored root.
///
/// Notarization is best effort; the coordinator never lets a
/// notary failure undo an anchor.
#[async_trait]
pub trait Notary: Send + Sync {
    /// Submit a root hash for notarization.
    async fn anchor(&self, root: &LeafHash) -> Result<()>;
}

/// Notary that stamps roots with the OpenTimestamps client.
///
/// The root is written to `<output>/<root>.txt` and stamped
/// with `<command> stamp`, which leaves the proof next to it
/// as `<root>.txt.ots`.
pub struct OtsNotary {
    command: PathBuf,
    output: PathBuf,
}

impl OtsNotary {
    /// Create a notary using the client command and an output
    /// directory for stamp files.
    pub fn new(command: impl AsRef<Path>, output: impl AsRef<Path>) -> Self {
        Self {
            command: command.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
        }
    }

    /// Path to the file that is stamped for a root.
    pub fn stamp_source(&self, root: &LeafHash) -> PathBuf {
        self.output.join(format!("{}.txt", root))
    }

    /// Path to the stamp proof for a root.
    pub fn stamp_file(&self, root: &LeafHash) -> PathBuf {
        self.output.join(format!("{}.txt.ots", root))
    }
}

#[async_trait]
impl Notary for OtsNotary {
    async fn anchor(&self, root: &LeafHash) -> Result<()> {
        tokio::fs::create_dir_all(&self.output).await?;
        let source = self.stamp_source(root);
        tokio::fs::write(&source, root.to_hex()).await?;

        let output = Command::new(&self.command)
            .arg("stamp")
            .arg(&source)
            .kill_on_drop(true)
            .output()
            .await?;
        if !output.status.success() {
            return Err(Error::Notary(format!(
                "{} stamp exited with {}: {}",
                self.command.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim(),
            )));
        }

        let stamp = self.stamp_file(root);
        if !tokio::fs::try_exists(&stamp).await? {
            return Err(Error::Notary(format!(
                "stamp file {} was not created",
                stamp.display()
            )));
        }

        tracing::debug!(root = %root, stamp = %stamp.display(), "notary::stamped");
        Ok(())
    }
}
