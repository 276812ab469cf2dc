use anyhow::Result;
use aroni_anchor::{
    ingest, BatchAnchorCoordinator, Error, FileStore, MemoryStore, Notary,
    Store,
};
use aroni_core::{
    BatchAnchor, LeafHash, ScanLogEntry, ShipmentMetadata, Tolerance,
    TrackingId,
};
use aroni_unit_tests::{mock_metadata, mock_scan, mock_store};
use async_trait::async_trait;
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

struct FailingNotary(Arc<AtomicUsize>);

#[async_trait]
impl Notary for FailingNotary {
    async fn anchor(&self, _root: &LeafHash) -> aroni_anchor::Result<()> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Err(Error::Notary("service unavailable".to_owned()))
    }
}

struct SlowNotary;

#[async_trait]
impl Notary for SlowNotary {
    async fn anchor(&self, _root: &LeafHash) -> aroni_anchor::Result<()> {
        tokio::time::sleep(Duration::from_secs(10)).await;
        Ok(())
    }
}

/// Store that reports its leaf hashes in uppercase.
struct UppercaseStore(MemoryStore);

#[async_trait]
impl Store for UppercaseStore {
    async fn save_metadata(
        &self,
        metadata: ShipmentMetadata,
    ) -> aroni_anchor::Result<()> {
        self.0.save_metadata(metadata).await
    }

    async fn fetch_metadata(
        &self,
        tracking_id: &str,
    ) -> aroni_anchor::Result<Option<ShipmentMetadata>> {
        self.0.fetch_metadata(tracking_id).await
    }

    async fn append_scan_log(
        &self,
        entry: ScanLogEntry,
    ) -> aroni_anchor::Result<()> {
        self.0.append_scan_log(entry).await
    }

    async fn scan_logs(&self) -> aroni_anchor::Result<Vec<ScanLogEntry>> {
        self.0.scan_logs().await
    }

    async fn list_leaf_hashes(
        &self,
    ) -> aroni_anchor::Result<Vec<(String, TrackingId)>> {
        Ok(self
            .0
            .list_leaf_hashes()
            .await?
            .into_iter()
            .map(|(hash, tracking_id)| (hash.to_uppercase(), tracking_id))
            .collect())
    }

    async fn persist_anchor(
        &self,
        anchor: &BatchAnchor,
    ) -> aroni_anchor::Result<()> {
        self.0.persist_anchor(anchor).await
    }

    async fn latest_anchor(&self) -> aroni_anchor::Result<Option<BatchAnchor>> {
        self.0.latest_anchor().await
    }

    async fn anchors(&self) -> aroni_anchor::Result<Vec<BatchAnchor>> {
        self.0.anchors().await
    }
}

#[tokio::test]
async fn anchor_batch_empty_store() -> Result<()> {
    let coordinator = BatchAnchorCoordinator::new(MemoryStore::new());
    let result = coordinator.anchor_batch(None).await;
    assert!(matches!(
        result,
        Err(Error::Core(aroni_core::Error::EmptyBatch))
    ));
    assert!(coordinator.store().latest_anchor().await?.is_none());
    Ok(())
}

#[tokio::test]
async fn anchor_batch_commits_all_leaves() -> Result<()> {
    let (store, entries) = mock_store(&["TRK-3", "TRK-1", "TRK-2"]).await?;
    let coordinator = BatchAnchorCoordinator::new(store);
    let anchor = coordinator.anchor_batch(None).await?;

    assert_eq!(3, anchor.leaf_count());
    assert!(anchor.note().starts_with("Batch anchored at "));
    assert_eq!(Some(anchor.clone()), coordinator.store().latest_anchor().await?);

    // Tracking identifiers stay parallel to the sorted leaves
    for entry in &entries {
        let index = anchor
            .leaves()
            .iter()
            .position(|leaf| leaf == entry.leaf_hash())
            .ok_or_else(|| anyhow::anyhow!("leaf not anchored"))?;
        assert_eq!(entry.tracking_id(), &anchor.tracking_ids()[index]);
    }
    Ok(())
}

#[tokio::test]
async fn anchor_batch_keeps_note() -> Result<()> {
    let (store, _) = mock_store(&["TRK-1"]).await?;
    let coordinator = BatchAnchorCoordinator::new(store);
    let anchor = coordinator
        .anchor_batch(Some("end of shift".to_owned()))
        .await?;
    assert_eq!("end of shift", anchor.note());
    Ok(())
}

#[tokio::test]
async fn anchor_batch_proof_for_every_scan() -> Result<()> {
    let (store, entries) =
        mock_store(&["TRK-1", "TRK-2", "TRK-3", "TRK-4", "TRK-5"]).await?;
    let coordinator = BatchAnchorCoordinator::new(store);
    let anchor = coordinator.anchor_batch(None).await?;

    for entry in &entries {
        let proof = coordinator
            .proof_for_hash(&entry.leaf_hash().to_hex())
            .await?;
        assert!(proof.verify());
        assert_eq!(anchor.root_hash(), &proof.root_hash);
        assert_eq!(anchor.id(), &proof.anchor_id);
        assert_eq!(entry.tracking_id(), &proof.tracking_id);
    }
    Ok(())
}

#[tokio::test]
async fn anchor_batch_proof_uses_anchored_snapshot() -> Result<()> {
    let (store, entries) = mock_store(&["TRK-1", "TRK-2", "TRK-3"]).await?;
    let coordinator = BatchAnchorCoordinator::new(store);
    let anchor = coordinator.anchor_batch(None).await?;

    // Logged after the anchor so only present in the store
    coordinator.store().save_metadata(mock_metadata("TRK-4")).await?;
    let newer = ingest::record_scan(
        coordinator.store(),
        mock_scan("TRK-4"),
        &Tolerance::default(),
    )
    .await?;

    let result = coordinator
        .proof_for_hash(&newer.leaf_hash().to_hex())
        .await;
    assert!(matches!(
        result,
        Err(Error::Core(aroni_core::Error::NotFound(_)))
    ));

    // Older scans still prove against the anchored root
    let proof = coordinator
        .proof_for_hash(&entries[0].leaf_hash().to_hex())
        .await?;
    assert_eq!(anchor.root_hash(), &proof.root_hash);
    assert!(proof.verify());
    Ok(())
}

#[tokio::test]
async fn anchor_batch_proof_without_anchor() -> Result<()> {
    let (store, entries) = mock_store(&["TRK-1"]).await?;
    let coordinator = BatchAnchorCoordinator::new(store);
    let result = coordinator
        .proof_for_hash(&entries[0].leaf_hash().to_hex())
        .await;
    assert!(matches!(
        result,
        Err(Error::Core(aroni_core::Error::NotFound(_)))
    ));
    Ok(())
}

#[tokio::test]
async fn anchor_batch_proof_malformed_hash() -> Result<()> {
    let (store, _) = mock_store(&["TRK-1"]).await?;
    let coordinator = BatchAnchorCoordinator::new(store);
    coordinator.anchor_batch(None).await?;
    let result = coordinator.proof_for_hash("0xdeadbeef").await;
    let Err(error) = result else {
        panic!("expected a malformed hash error");
    };
    assert!(matches!(
        error,
        Error::Core(aroni_core::Error::MalformedHash(_))
    ));
    assert!(error.is_client_error());
    Ok(())
}

#[tokio::test]
async fn anchor_batch_survives_notary_failure() -> Result<()> {
    let calls = Arc::new(AtomicUsize::new(0));
    let (store, _) = mock_store(&["TRK-1", "TRK-2"]).await?;
    let coordinator = BatchAnchorCoordinator::new(store).with_notary(
        FailingNotary(Arc::clone(&calls)),
        Duration::from_secs(5),
    );

    let anchor = coordinator.anchor_batch(None).await?;
    assert_eq!(1, calls.load(Ordering::SeqCst));
    assert_eq!(Some(anchor.clone()), coordinator.store().latest_anchor().await?);

    // Notarization can be retried for a committed anchor
    assert!(matches!(
        coordinator.notarize(&anchor).await,
        Err(Error::Notary(_))
    ));
    assert_eq!(2, calls.load(Ordering::SeqCst));
    Ok(())
}

#[tokio::test]
async fn anchor_batch_notary_timeout() -> Result<()> {
    let (store, _) = mock_store(&["TRK-1"]).await?;
    let coordinator = BatchAnchorCoordinator::new(store)
        .with_notary(SlowNotary, Duration::from_millis(50));

    let anchor = coordinator.anchor_batch(None).await?;
    assert_eq!(Some(anchor.clone()), coordinator.store().latest_anchor().await?);
    assert!(matches!(
        coordinator.notarize(&anchor).await,
        Err(Error::NotaryTimeout(_))
    ));
    Ok(())
}

#[tokio::test]
async fn anchor_batch_file_store() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("aroni.json");

    let store = FileStore::new(&path);
    store.save_metadata(mock_metadata("TRK-1")).await?;
    store.save_metadata(mock_metadata("TRK-2")).await?;
    let first =
        ingest::record_scan(&store, mock_scan("TRK-1"), &Tolerance::default())
            .await?;
    ingest::record_scan(&store, mock_scan("TRK-2"), &Tolerance::default())
        .await?;

    let coordinator = BatchAnchorCoordinator::new(store);
    let anchor = coordinator.anchor_batch(None).await?;

    // Reopen the store from disc
    let coordinator = BatchAnchorCoordinator::new(FileStore::new(&path));
    assert_eq!(2, coordinator.store().scan_logs().await?.len());
    assert_eq!(vec![anchor.clone()], coordinator.store().anchors().await?);

    let proof = coordinator
        .proof_for_hash(&first.leaf_hash().to_hex())
        .await?;
    assert_eq!(anchor.root_hash(), &proof.root_hash);
    assert!(proof.verify());
    Ok(())
}

#[tokio::test]
async fn anchor_batch_corrupt_file_store() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("aroni.json");
    std::fs::write(&path, b"{ not json")?;
    let store = FileStore::new(&path);
    assert!(matches!(
        store.scan_logs().await,
        Err(Error::CorruptStore(_, _))
    ));
    Ok(())
}

#[tokio::test]
async fn anchor_batch_duplicate_metadata() -> Result<()> {
    let store = MemoryStore::new();
    store.save_metadata(mock_metadata("TRK-1")).await?;
    let result = store.save_metadata(mock_metadata("TRK-1")).await;
    assert!(matches!(result, Err(Error::MetadataExists(_))));
    Ok(())
}

#[tokio::test]
async fn anchor_batch_malformed_stored_hash() -> Result<()> {
    let (store, _) = mock_store(&["TRK-1", "TRK-2"]).await?;
    let coordinator = BatchAnchorCoordinator::new(UppercaseStore(store));
    let Err(error) = coordinator.anchor_batch(None).await else {
        panic!("expected a corrupt leaf hash error");
    };
    assert!(matches!(error, Error::CorruptLeafHash(_)));
    assert!(!error.is_client_error());
    assert!(coordinator.store().latest_anchor().await?.is_none());
    Ok(())
}
