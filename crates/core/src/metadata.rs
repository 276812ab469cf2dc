//! Declared shipment metadata and scan comparison.
use crate::{Dimensions, ScanEvent, ScanResult, TrackingId, UtcDateTime};
use serde::{Deserialize, Serialize};

const DIMENSION_NAMES: [&str; 3] = ["length", "width", "height"];

/// Handling urgency of a shipment.
#[derive(
    Default, Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    /// Normal handling.
    #[default]
    Normal,
    /// Priority handling.
    Priority,
    /// Critical handling.
    Critical,
}

/// Metadata declared for a shipment before it is scanned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentMetadata {
    /// Stock keeping unit.
    pub sku: String,
    /// Declared number of items.
    pub quantity: u64,
    /// Declared weight in kilograms.
    pub weight_kg: f64,
    /// Declared dimensions in centimetres.
    pub dimensions_cm: Dimensions,
    /// Kind of packaging.
    pub package_type: String,
    /// Origin of the shipment.
    pub source_id: String,
    /// Destination of the shipment.
    pub destination_id: String,
    /// Carrier handling the shipment.
    #[serde(default)]
    pub carrier_id: String,
    /// Handling urgency.
    #[serde(default)]
    pub urgency_level: UrgencyLevel,
    /// Harmonized system customs code.
    pub hs_code: String,
    /// Tracking identifier of the shipment.
    pub tracking_id: TrackingId,
    /// When the metadata was declared.
    #[serde(default)]
    pub timestamp: UtcDateTime,
    /// Tracking identifier of an enclosing shipment.
    #[serde(default)]
    pub nested_within: String,
}

/// Allowed difference between declared and scanned measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Absolute weight tolerance in kilograms.
    pub weight_kg: f64,
    /// Absolute tolerance for each dimension in centimetres.
    pub dimension_cm: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            weight_kg: 0.05,
            dimension_cm: 0.5,
        }
    }
}

impl ShipmentMetadata {
    /// Compare a scan against this metadata.
    ///
    /// Quantities must match exactly; weight and each dimension
    /// may differ by at most the tolerance.
    pub fn compare(
        &self,
        scan: &ScanEvent,
        tolerance: &Tolerance,
    ) -> (ScanResult, Vec<String>) {
        let mut reasons = Vec::new();

        if scan.tracking_id != self.tracking_id {
            reasons.push(format!(
                "tracking id mismatch: declared {}, scanned {}",
                self.tracking_id, scan.tracking_id
            ));
        }

        if scan.scanned_quantity != self.quantity {
            reasons.push(format!(
                "quantity mismatch: declared {}, scanned {}",
                self.quantity, scan.scanned_quantity
            ));
        }

        if (scan.scanned_weight_kg - self.weight_kg).abs() > tolerance.weight_kg
        {
            reasons.push(format!(
                "weight mismatch: declared {} kg, scanned {} kg",
                self.weight_kg, scan.scanned_weight_kg
            ));
        }

        let measured = self.dimensions_cm.iter().zip(scan.scanned_dimensions_cm);
        for (name, (declared, scanned)) in DIMENSION_NAMES.iter().zip(measured)
        {
            if (scanned - declared).abs() > tolerance.dimension_cm {
                reasons.push(format!(
                    "{} mismatch: declared {} cm, scanned {} cm",
                    name, declared, scanned
                ));
            }
        }

        let result = if reasons.is_empty() {
            ScanResult::Match
        } else {
            ScanResult::Mismatch
        };
        (result, reasons)
    }
}
