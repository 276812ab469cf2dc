use super::print_json;
use crate::{helpers::messages::success, AroniConfig, Result};
use aroni_anchor::Store;

/// Anchor every logged scan.
pub async fn anchor(config: &AroniConfig, note: Option<String>) -> Result<()> {
    let anchor = config.coordinator().anchor_batch(note).await?;
    success(format!(
        "anchored {} leaves with root {}",
        anchor.leaf_count(),
        anchor.root_hash()
    ));
    print_json(&anchor)
}

/// Print every anchor.
pub async fn list_anchors(config: &AroniConfig) -> Result<()> {
    let anchors = config.store().anchors().await?;
    for anchor in anchors {
        println!(
            "{} {} {:>6} {}",
            anchor.created_at(),
            anchor.root_hash(),
            anchor.leaf_count(),
            anchor.note()
        );
    }
    Ok(())
}

/// Print the inclusion proof for a scan hash.
pub async fn proof(config: &AroniConfig, scan_hash: String) -> Result<()> {
    let proof = config.coordinator().proof_for_hash(&scan_hash).await?;
    print_json(&proof)
}
