//! Anchor batches of scan log leaves and serve inclusion proofs.
use crate::{Error, Notary, Result, Store};
use aroni_core::{
    AnchorId, BatchAnchor, LeafHash, Proof, TrackingId, UtcDateTime,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default time allowed for a notary to answer.
const NOTARY_TIMEOUT: Duration = Duration::from_secs(30);

/// Proof that a scan log leaf is part of an anchored batch.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct InclusionProof {
    /// Leaf hash of the scan.
    pub scan_hash: LeafHash,
    /// Sibling hashes from the leaf to the root.
    pub proof: Proof,
    /// Root of the anchored batch.
    pub root_hash: LeafHash,
    /// Tracking identifier of the scan.
    pub tracking_id: TrackingId,
    /// Anchor the proof was generated against.
    pub anchor_id: AnchorId,
}

impl InclusionProof {
    /// Determine if the proof leads from the scan hash
    /// to the root hash.
    pub fn verify(&self) -> bool {
        self.proof.verify(&self.scan_hash, &self.root_hash)
    }
}

/// Coordinates anchoring batches against a store.
pub struct BatchAnchorCoordinator<S> {
    store: S,
    notary: Option<Box<dyn Notary>>,
    notary_timeout: Duration,
}

impl<S: Store> BatchAnchorCoordinator<S> {
    /// Create a coordinator without a notary.
    pub fn new(store: S) -> Self {
        Self {
            store,
            notary: None,
            notary_timeout: NOTARY_TIMEOUT,
        }
    }

    /// Notarize anchored roots with a notary that must answer
    /// within the timeout.
    pub fn with_notary(
        mut self,
        notary: impl Notary + 'static,
        timeout: Duration,
    ) -> Self {
        self.notary = Some(Box::new(notary));
        self.notary_timeout = timeout;
        self
    }

    /// Backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Anchor every leaf hash currently known to the store.
    ///
    /// The anchor is committed before notarization is attempted
    /// and a notarization failure does not fail the anchor;
    /// call [BatchAnchorCoordinator::notarize] to retry.
    pub async fn anchor_batch(
        &self,
        note: Option<String>,
    ) -> Result<BatchAnchor> {
        let pairs = self
            .store
            .list_leaf_hashes()
            .await?
            .into_iter()
            .map(|(hash, tracking_id)| -> Result<(LeafHash, TrackingId)> {
                let leaf = LeafHash::from_hex(&hash)
                    .map_err(|_| Error::CorruptLeafHash(hash))?;
                Ok((leaf, tracking_id))
            })
            .collect::<Result<Vec<_>>>()?;

        let note = match note {
            Some(note) if !note.is_empty() => note,
            _ => format!("Batch anchored at {}", UtcDateTime::now()),
        };

        let (anchor, _) = BatchAnchor::from_pairs(pairs, note)?;
        self.store.persist_anchor(&anchor).await?;

        tracing::info!(
            anchor_id = %anchor.id(),
            root = %anchor.root_hash(),
            leaves = anchor.leaf_count(),
            "anchor::committed"
        );

        if self.notary.is_some() {
            if let Err(error) = self.notarize(&anchor).await {
                tracing::warn!(
                    anchor_id = %anchor.id(),
                    root = %anchor.root_hash(),
                    error = %error,
                    "anchor::notarize_pending"
                );
            }
        }

        Ok(anchor)
    }

    /// Submit the root of an anchor to the notary.
    ///
    /// Does nothing when no notary is configured.
    pub async fn notarize(&self, anchor: &BatchAnchor) -> Result<()> {
        let Some(notary) = &self.notary else {
            return Ok(());
        };
        tokio::time::timeout(
            self.notary_timeout,
            notary.anchor(anchor.root_hash()),
        )
        .await
        .map_err(|_| Error::NotaryTimeout(self.notary_timeout))??;
        tracing::info!(
            anchor_id = %anchor.id(),
            root = %anchor.root_hash(),
            "anchor::notarized"
        );
        Ok(())
    }

    /// Inclusion proof for a scan hash in the most recent anchor.
    ///
    /// The tree is rebuilt from the leaves captured by the anchor
    /// so scans logged after the anchor are never part of the
    /// proof, even when they are already in the store.
    pub async fn proof_for_hash(
        &self,
        scan_hash: &str,
    ) -> Result<InclusionProof> {
        let scan_hash = LeafHash::from_hex(scan_hash)?;
        let anchor = self.store.latest_anchor().await?.ok_or_else(|| {
            aroni_core::Error::NotFound(scan_hash.to_hex())
        })?;

        let tree = anchor.tree()?;
        if &tree.root() != anchor.root_hash() {
            return Err(Error::RootMismatch {
                expected: *anchor.root_hash(),
                actual: tree.root(),
            });
        }

        let index = tree.index_of(&scan_hash).ok_or_else(|| {
            aroni_core::Error::NotFound(scan_hash.to_hex())
        })?;
        let proof = tree.proof(index)?;
        let tracking_id = anchor
            .tracking_id(index)
            .cloned()
            .unwrap_or_default();

        tracing::debug!(
            anchor_id = %anchor.id(),
            scan_hash = %scan_hash,
            index = index,
            "anchor::proof"
        );

        Ok(InclusionProof {
            scan_hash,
            proof,
            root_hash: tree.root(),
            tracking_id,
            anchor_id: *anchor.id(),
        })
    }
}
