use crate::{
    commit::{HashTree, LeafHash},
    Error, Result, TrackingId, UtcDateTime,
};
use serde::{Deserialize, Serialize};

/// Identifier for a batch anchor.
pub type AnchorId = uuid::Uuid;

/// Persisted commitment to a batch of scan log leaves.
///
/// The anchor keeps the leaf hashes it committed to so that
/// proofs can be served against exactly this batch even after
/// newer scans have been logged.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BatchAnchor {
    id: AnchorId,
    root_hash: LeafHash,
    leaf_count: usize,
    tracking_ids: Vec<TrackingId>,
    leaves: Vec<LeafHash>,
    note: String,
    created_at: UtcDateTime,
}

impl BatchAnchor {
    /// Build the tree for a batch of leaf hashes paired with
    /// their tracking identifiers and create an anchor for it.
    ///
    /// Pairs are sorted together so the tracking identifiers
    /// stay parallel to the canonical leaf order.
    pub fn from_pairs(
        mut pairs: Vec<(LeafHash, TrackingId)>,
        note: String,
    ) -> Result<(Self, HashTree)> {
        pairs.sort();
        let (leaves, tracking_ids): (Vec<_>, Vec<_>) =
            pairs.into_iter().unzip();
        let tree = HashTree::build(leaves.iter().copied())?;
        let anchor = Self {
            id: AnchorId::new_v4(),
            root_hash: tree.root(),
            leaf_count: tree.len(),
            tracking_ids,
            leaves,
            note,
            created_at: UtcDateTime::now(),
        };
        Ok((anchor, tree))
    }

    /// Anchor identifier.
    pub fn id(&self) -> &AnchorId {
        &self.id
    }

    /// Root hash of the batch tree.
    pub fn root_hash(&self) -> &LeafHash {
        &self.root_hash
    }

    /// Number of leaves in the batch.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Tracking identifiers in canonical leaf order.
    pub fn tracking_ids(&self) -> &[TrackingId] {
        &self.tracking_ids
    }

    /// Leaf hashes in canonical order.
    pub fn leaves(&self) -> &[LeafHash] {
        &self.leaves
    }

    /// Free text note.
    pub fn note(&self) -> &str {
        &self.note
    }

    /// When the anchor was created.
    pub fn created_at(&self) -> &UtcDateTime {
        &self.created_at
    }

    /// Tracking identifier for the leaf at an index.
    pub fn tracking_id(&self, index: usize) -> Option<&TrackingId> {
        self.tracking_ids.get(index)
    }

    /// Rebuild the tree from the leaf snapshot.
    pub fn tree(&self) -> Result<HashTree> {
        if self.leaves.len() != self.tracking_ids.len() {
            return Err(Error::BatchLengthMismatch {
                leaves: self.leaves.len(),
                identifiers: self.tracking_ids.len(),
            });
        }
        HashTree::build(self.leaves.iter().copied())
    }
}
