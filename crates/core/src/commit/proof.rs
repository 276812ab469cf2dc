//! Inclusion proofs and their verification.
use crate::Result;
use serde::{Deserialize, Serialize};

use super::{combine, LeafHash};

/// Ordered sibling hashes from a leaf up to the root.
///
/// Levels where the proved node had no sibling are omitted.
#[derive(Default, Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Proof(Vec<LeafHash>);

impl Proof {
    /// Create a proof from sibling hashes.
    pub fn new(siblings: Vec<LeafHash>) -> Self {
        Self(siblings)
    }

    /// Parse a proof from hexadecimal sibling hashes.
    pub fn from_hex<S: AsRef<str>>(siblings: &[S]) -> Result<Self> {
        let siblings = siblings
            .iter()
            .map(|hash| LeafHash::from_hex(hash.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self(siblings))
    }

    /// Sibling hashes in order from the leaf to the root.
    pub fn siblings(&self) -> &[LeafHash] {
        &self.0
    }

    /// Sibling hashes as hexadecimal.
    pub fn to_hex(&self) -> Vec<String> {
        self.0.iter().map(LeafHash::to_hex).collect()
    }

    /// Number of sibling hashes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Determine if this proof is empty.
    ///
    /// A single leaf batch has an empty proof.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Root computed by folding the siblings into a leaf.
    pub fn compute_root(&self, leaf: &LeafHash) -> LeafHash {
        self.0
            .iter()
            .fold(*leaf, |computed, sibling| combine(&computed, sibling))
    }

    /// Determine if this proof shows the leaf is committed
    /// to by the root.
    pub fn verify(&self, leaf: &LeafHash, root: &LeafHash) -> bool {
        &self.compute_root(leaf) == root
    }
}

impl From<Vec<LeafHash>> for Proof {
    fn from(value: Vec<LeafHash>) -> Self {
        Self(value)
    }
}

impl From<Proof> for Vec<LeafHash> {
    fn from(value: Proof) -> Self {
        value.0
    }
}

/// Verify an inclusion proof supplied as hexadecimal.
///
/// Needs no tree; the root is recomputed from the leaf and the
/// siblings. A proof that does not lead to the root is not an
/// error and yields `false`; only undecodable input is an error.
pub fn verify_proof<S: AsRef<str>>(
    leaf_hash: &str,
    proof: &[S],
    root: &str,
) -> Result<bool> {
    let leaf = LeafHash::from_hex(leaf_hash)?;
    let proof = Proof::from_hex(proof)?;
    let root = LeafHash::from_hex(root)?;
    Ok(proof.verify(&leaf, &root))
}
