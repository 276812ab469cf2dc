use super::{print_json, read_json};
use crate::{helpers::messages::success, AroniConfig, Result};
use aroni_anchor::{ingest, Store};
use aroni_core::{ScanEvent, ShipmentMetadata};
use std::path::PathBuf;

/// Declare metadata for a shipment from a JSON file.
pub async fn declare_metadata(config: &AroniConfig, file: PathBuf) -> Result<()> {
    let metadata: ShipmentMetadata = read_json(&file).await?;
    let tracking_id = metadata.tracking_id.clone();
    config.store().save_metadata(metadata).await?;
    success(format!("metadata declared for {}", tracking_id));
    Ok(())
}

/// Record a scan event from a JSON file.
pub async fn record_scan(config: &AroniConfig, file: PathBuf) -> Result<()> {
    let event: ScanEvent = read_json(&file).await?;
    let entry =
        ingest::record_scan(&config.store(), event, &config.tolerance).await?;
    print_json(&entry)
}

/// Print the scan log entries for a shipment.
pub async fn history(config: &AroniConfig, tracking_id: String) -> Result<()> {
    let entries = config.store().scan_history(&tracking_id).await?;
    print_json(&entries)
}
