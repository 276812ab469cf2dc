//! Record scans against declared shipment metadata.
use crate::{Error, Result, Store};
use aroni_core::{ScanEvent, ScanLogEntry, ScanRecord, Tolerance};

/// Compare a scan with the metadata declared for the shipment
/// and append the resulting entry to the scan log.
pub async fn record_scan<S>(
    store: &S,
    event: ScanEvent,
    tolerance: &Tolerance,
) -> Result<ScanLogEntry>
where
    S: Store + ?Sized,
{
    let metadata = store
        .fetch_metadata(&event.tracking_id)
        .await?
        .ok_or_else(|| Error::MetadataNotFound(event.tracking_id.clone()))?;

    let (result, reasons) = metadata.compare(&event, tolerance);
    let entry = ScanLogEntry::new(ScanRecord {
        event,
        result,
        reasons,
    })?;
    store.append_scan_log(entry.clone()).await?;

    tracing::info!(
        tracking_id = %entry.tracking_id(),
        result = %entry.result(),
        leaf_hash = %entry.leaf_hash(),
        "scan::logged"
    );

    Ok(entry)
}
