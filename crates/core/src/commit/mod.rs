//! Hash tree commitments over scan log leaf hashes.
mod hash;
mod proof;
mod tree;

use rs_merkle::{algorithms::Sha256, Hasher};

/// Type for an Sha256 tree hash.
pub type TreeHash = [u8; 32];

pub use hash::LeafHash;
pub use proof::{verify_proof, Proof};
pub use tree::HashTree;

/// Combine two nodes into their parent node.
///
/// The children are ordered by byte value before hashing so
/// the parent does not depend on which side each child sits;
/// proofs therefore carry no direction flags. Tree construction
/// and proof verification must both go through this function.
pub fn combine(a: &LeafHash, b: &LeafHash) -> LeafHash {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    let mut buffer = [0u8; 64];
    buffer[..32].copy_from_slice(&low.0);
    buffer[32..].copy_from_slice(&high.0);
    LeafHash(Sha256::hash(&buffer))
}

/// Compute the Sha256 hash of some data.
pub fn hash(data: &[u8]) -> LeafHash {
    LeafHash(Sha256::hash(data))
}
