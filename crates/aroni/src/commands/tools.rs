use super::read_json;
use crate::{helpers::messages::success, Error, Result};
use aroni_core::{
    compute_leaf_hash, verify_proof, HashTree, LeafHash, ScanRecord,
};
use std::path::PathBuf;

/// Print the leaf hash of a scan record read from a JSON file.
pub async fn hash(file: PathBuf) -> Result<()> {
    let record: ScanRecord = read_json(&file).await?;
    println!("{}", compute_leaf_hash(&record)?);
    Ok(())
}

/// Print the root of a tree built from leaf hashes.
pub fn root(leaves: Vec<String>) -> Result<()> {
    let tree = HashTree::from_hex(&leaves)?;
    println!("{}", tree.root_hex());
    Ok(())
}

/// Verify an inclusion proof.
pub fn verify(leaf: String, proof: Vec<String>, root: String) -> Result<()> {
    if verify_proof(&leaf, proof.as_slice(), &root)? {
        success("proof verified");
        Ok(())
    } else {
        Err(Error::ProofRejected {
            leaf: LeafHash::from_hex(&leaf)?,
            root: LeafHash::from_hex(&root)?,
        })
    }
}
