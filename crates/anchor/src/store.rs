//! Backing store collaborators.
use crate::{Error, Result};
use aroni_core::{BatchAnchor, ScanLogEntry, ShipmentMetadata, TrackingId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};
use tokio::sync::{Mutex, RwLock};

/// Persistence of metadata, scan logs and anchors.
///
/// Anchors and scan log entries are append only; a store never
/// rewrites or removes them.
#[async_trait]
pub trait Store: Send + Sync {
    /// Declare metadata for a shipment.
    async fn save_metadata(&self, metadata: ShipmentMetadata) -> Result<()>;

    /// Metadata declared for a shipment.
    async fn fetch_metadata(
        &self,
        tracking_id: &str,
    ) -> Result<Option<ShipmentMetadata>>;

    /// Append an entry to the scan log.
    async fn append_scan_log(&self, entry: ScanLogEntry) -> Result<()>;

    /// All scan log entries in the order they were appended.
    async fn scan_logs(&self) -> Result<Vec<ScanLogEntry>>;

    /// Scan log entries for a shipment.
    async fn scan_history(
        &self,
        tracking_id: &str,
    ) -> Result<Vec<ScanLogEntry>> {
        Ok(self
            .scan_logs()
            .await?
            .into_iter()
            .filter(|entry| entry.tracking_id() == tracking_id)
            .collect())
    }

    /// Hexadecimal leaf hashes of every logged scan paired with
    /// the tracking identifier of the scan.
    async fn list_leaf_hashes(&self) -> Result<Vec<(String, TrackingId)>> {
        Ok(self
            .scan_logs()
            .await?
            .into_iter()
            .map(|entry| {
                (entry.leaf_hash().to_hex(), entry.tracking_id().to_owned())
            })
            .collect())
    }

    /// Persist a new anchor.
    async fn persist_anchor(&self, anchor: &BatchAnchor) -> Result<()>;

    /// Most recently persisted anchor.
    async fn latest_anchor(&self) -> Result<Option<BatchAnchor>>;

    /// All anchors in the order they were persisted.
    async fn anchors(&self) -> Result<Vec<BatchAnchor>>;
}

/// Contents of a store.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct StoreState {
    metadata: BTreeMap<TrackingId, ShipmentMetadata>,
    scan_log: Vec<ScanLogEntry>,
    anchors: Vec<BatchAnchor>,
}

impl StoreState {
    fn insert_metadata(&mut self, metadata: ShipmentMetadata) -> Result<()> {
        if self.metadata.contains_key(&metadata.tracking_id) {
            return Err(Error::MetadataExists(metadata.tracking_id));
        }
        self.metadata.insert(metadata.tracking_id.clone(), metadata);
        Ok(())
    }
}

/// Store that keeps everything in memory.
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

impl MemoryStore {
    /// Create an empty memory store.
    pub fn new() -> Self {
        Default::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn save_metadata(&self, metadata: ShipmentMetadata) -> Result<()> {
        self.state.write().await.insert_metadata(metadata)
    }

    async fn fetch_metadata(
        &self,
        tracking_id: &str,
    ) -> Result<Option<ShipmentMetadata>> {
        Ok(self.state.read().await.metadata.get(tracking_id).cloned())
    }

    async fn append_scan_log(&self, entry: ScanLogEntry) -> Result<()> {
        self.state.write().await.scan_log.push(entry);
        Ok(())
    }

    async fn scan_logs(&self) -> Result<Vec<ScanLogEntry>> {
        Ok(self.state.read().await.scan_log.clone())
    }

    async fn persist_anchor(&self, anchor: &BatchAnchor) -> Result<()> {
        self.state.write().await.anchors.push(anchor.clone());
        Ok(())
    }

    async fn latest_anchor(&self) -> Result<Option<BatchAnchor>> {
        Ok(self.state.read().await.anchors.last().cloned())
    }

    async fn anchors(&self) -> Result<Vec<BatchAnchor>> {
        Ok(self.state.read().await.anchors.clone())
    }
}

/// Store that keeps everything in a single JSON document.
///
/// The document is read for every operation and rewritten for
/// every mutation; writes are serialized within the process
/// but not across processes.
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    /// Create a store backed by the file at path.
    ///
    /// The file is created on the first write.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    /// Path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<StoreState> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Ok(Default::default());
        }
        let buffer = tokio::fs::read(&self.path).await?;
        serde_json::from_slice(&buffer)
            .map_err(|e| Error::CorruptStore(self.path.clone(), e))
    }

    async fn save(&self, state: &StoreState) -> Result<()> {
        let buffer = serde_json::to_vec_pretty(state)?;
        let mut temp = self.path.clone().into_os_string();
        temp.push(".tmp");
        let temp = PathBuf::from(temp);
        tokio::fs::write(&temp, &buffer).await?;
        tokio::fs::rename(&temp, &self.path).await?;
        Ok(())
    }

    async fn update<F>(&self, func: F) -> Result<()>
    where
        F: FnOnce(&mut StoreState) -> Result<()> + Send,
    {
        let _guard = self.lock.lock().await;
        let mut state = self.load().await?;
        func(&mut state)?;
        self.save(&state).await
    }
}

#[async_trait]
impl Store for FileStore {
    async fn save_metadata(&self, metadata: ShipmentMetadata) -> Result<()> {
        self.update(move |state| state.insert_metadata(metadata))
            .await
    }

    async fn fetch_metadata(
        &self,
        tracking_id: &str,
    ) -> Result<Option<ShipmentMetadata>> {
        Ok(self.load().await?.metadata.remove(tracking_id))
    }

    async fn append_scan_log(&self, entry: ScanLogEntry) -> Result<()> {
        self.update(move |state| {
            state.scan_log.push(entry);
            Ok(())
        })
        .await
    }

    async fn scan_logs(&self) -> Result<Vec<ScanLogEntry>> {
        Ok(self.load().await?.scan_log)
    }

    async fn persist_anchor(&self, anchor: &BatchAnchor) -> Result<()> {
        let anchor = anchor.clone();
        self.update(move |state| {
            state.anchors.push(anchor);
            Ok(())
        })
        .await
    }

    async fn latest_anchor(&self) -> Result<Option<BatchAnchor>> {
        Ok(self.load().await?.anchors.pop())
    }

    async fn anchors(&self) -> Result<Vec<BatchAnchor>> {
        Ok(self.load().await?.anchors)
    }
}
