//! Scan events and the scan log entries that commit to them.
use crate::{
    canonical::compute_leaf_hash, commit::LeafHash, Result, TrackingId,
    UtcDateTime,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length, width and height in centimetres.
pub type Dimensions = [f64; 3];

/// Physical scan of a shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanEvent {
    /// Tracking identifier of the scanned shipment.
    pub tracking_id: TrackingId,
    /// Where the scan took place.
    #[serde(default)]
    pub location: String,
    /// Number of items counted.
    pub scanned_quantity: u64,
    /// Measured weight in kilograms.
    pub scanned_weight_kg: f64,
    /// Measured dimensions in centimetres.
    pub scanned_dimensions_cm: Dimensions,
    /// When the scan happened.
    ///
    /// Required when deserializing; the leaf hash commits to it.
    pub timestamp: UtcDateTime,
}

/// Outcome of comparing a scan to the declared metadata.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanResult {
    /// Scan agrees with the declared metadata.
    Match,
    /// Scan disagrees with the declared metadata.
    Mismatch,
}

impl ScanResult {
    /// Canonical name of the result.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Mismatch => "mismatch",
        }
    }
}

impl fmt::Display for ScanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Content of a scan log entry that is committed to by
/// the leaf hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    /// Scan that was recorded.
    #[serde(flatten)]
    pub event: ScanEvent,
    /// Comparison result.
    pub result: ScanResult,
    /// Reasons for a mismatch; empty for a match.
    #[serde(default)]
    pub reasons: Vec<String>,
}

/// Scan record together with its leaf hash.
///
/// Entries are never mutated after creation; the leaf hash
/// commits to the content of the record at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanLogEntry {
    #[serde(flatten)]
    record: ScanRecord,
    leaf_hash: LeafHash,
}

impl ScanLogEntry {
    /// Create an entry computing the leaf hash of the record.
    pub fn new(record: ScanRecord) -> Result<Self> {
        let leaf_hash = compute_leaf_hash(&record)?;
        Ok(Self { record, leaf_hash })
    }

    /// Committed record.
    pub fn record(&self) -> &ScanRecord {
        &self.record
    }

    /// Recorded scan event.
    pub fn event(&self) -> &ScanEvent {
        &self.record.event
    }

    /// Tracking identifier of the scanned shipment.
    pub fn tracking_id(&self) -> &TrackingId {
        &self.record.event.tracking_id
    }

    /// Comparison result.
    pub fn result(&self) -> ScanResult {
        self.record.result
    }

    /// Mismatch reasons.
    pub fn reasons(&self) -> &[String] {
        &self.record.reasons
    }

    /// Leaf hash of the record.
    pub fn leaf_hash(&self) -> &LeafHash {
        &self.leaf_hash
    }

    /// Determine if the stored leaf hash still matches the
    /// content of the record.
    pub fn is_intact(&self) -> Result<bool> {
        Ok(compute_leaf_hash(&self.record)? == self.leaf_hash)
    }
}

impl From<ScanLogEntry> for (ScanRecord, LeafHash) {
    fn from(value: ScanLogEntry) -> Self {
        (value.record, value.leaf_hash)
    }
}
