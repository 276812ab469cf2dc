use crate::{Error, Result};

use super::{combine, LeafHash, Proof};

/// Binary hash tree over a batch of leaf hashes.
///
/// Leaves are kept in canonical order (ascending by byte value)
/// so the same batch always yields the same tree regardless of
/// the order the hashes were supplied in. At a level with an odd
/// number of nodes the trailing node is promoted unchanged.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HashTree {
    levels: Vec<Vec<LeafHash>>,
    root: LeafHash,
}

impl HashTree {
    /// Build a tree from a batch of leaf hashes.
    pub fn build<I>(leaves: I) -> Result<Self>
    where
        I: IntoIterator<Item = LeafHash>,
    {
        let mut leaves: Vec<LeafHash> = leaves.into_iter().collect();
        if leaves.is_empty() {
            return Err(Error::EmptyBatch);
        }
        leaves.sort_unstable();

        let mut levels = vec![leaves];
        while let Some(next) = levels
            .last()
            .filter(|level| level.len() > 1)
            .map(|level| next_level(level))
        {
            levels.push(next);
        }

        let root = levels[levels.len() - 1][0];
        Ok(Self { levels, root })
    }

    /// Build a tree from hexadecimal leaf hashes.
    pub fn from_hex<I, S>(leaves: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let leaves = leaves
            .into_iter()
            .map(|hash| LeafHash::from_hex(hash.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::build(leaves)
    }

    /// Root hash of the tree.
    pub fn root(&self) -> LeafHash {
        self.root
    }

    /// Root hash of the tree as hexadecimal.
    pub fn root_hex(&self) -> String {
        self.root.to_hex()
    }

    /// Leaves in canonical order.
    pub fn leaves(&self) -> &[LeafHash] {
        &self.levels[0]
    }

    /// All levels of the tree, from the leaves up to the root.
    pub fn levels(&self) -> &[Vec<LeafHash>] {
        &self.levels
    }

    /// Number of leaves in the tree.
    pub fn len(&self) -> usize {
        self.leaves().len()
    }

    /// Determine if this tree is empty.
    ///
    /// Always false as a tree cannot be built without leaves.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of a leaf in canonical order.
    ///
    /// When a batch contains duplicate hashes the first
    /// position is returned.
    pub fn index_of(&self, leaf: &LeafHash) -> Option<usize> {
        let leaves = self.leaves();
        let index = leaves.partition_point(|candidate| candidate < leaf);
        (leaves.get(index) == Some(leaf)).then_some(index)
    }

    /// Proof for the leaf at an index in canonical order.
    pub fn proof(&self, index: usize) -> Result<Proof> {
        let len = self.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        let mut siblings = Vec::new();
        let mut position = index;
        for level in &self.levels[..self.levels.len() - 1] {
            // Promoted nodes have no sibling at this level
            if let Some(sibling) = level.get(position ^ 1) {
                siblings.push(*sibling);
            }
            position /= 2;
        }
        Ok(Proof::new(siblings))
    }

    /// Proof for a leaf hash.
    pub fn proof_for_leaf(&self, leaf: &LeafHash) -> Result<Proof> {
        let index = self
            .index_of(leaf)
            .ok_or_else(|| Error::NotFound(leaf.to_hex()))?;
        self.proof(index)
    }
}

/// Pair up the nodes of a level to compute the level above.
fn next_level(level: &[LeafHash]) -> Vec<LeafHash> {
    level
        .chunks(2)
        .map(|pair| match pair {
            [left, right] => combine(left, right),
            promoted => promoted[0],
        })
        .collect()
}
