//! Canonical encoding of scan log records.
//!
//! The leaf hash of a scan log entry is the Sha256 digest of
//! the canonical encoding of its record. The encoding never
//! depends on the iteration order of a container; fields are
//! written in this fixed order:
//!
//! | Field                      | Encoding                     |
//! |----------------------------|------------------------------|
//! | schema tag                 | string `aroni.scan-log.v1`   |
//! | `tracking_id`              | string                       |
//! | `location`                 | string                       |
//! | `scanned_quantity`         | u64                          |
//! | `scanned_weight_kg`        | f64                          |
//! | `scanned_dimensions_cm`    | three f64 values             |
//! | `timestamp`                | string, UTC with nanoseconds |
//! | `result`                   | string `match` or `mismatch` |
//! | `reasons`                  | u64 count then each string   |
//!
//! Strings are a big endian u32 byte length followed by the
//! UTF-8 bytes. Integers are big endian. Floating point values
//! are the big endian IEEE-754 bits; negative zero is written
//! as zero and non-finite values are rejected.
use crate::{
    commit::{self, LeafHash},
    constants::LEAF_SCHEMA,
    Error, Result, ScanRecord, UtcDateTime,
};

/// Compute the leaf hash for a scan record.
pub fn compute_leaf_hash(record: &ScanRecord) -> Result<LeafHash> {
    let bytes = encode_record(record)?;
    Ok(commit::hash(&bytes))
}

/// Canonical bytes for a scan record.
pub fn encode_record(record: &ScanRecord) -> Result<Vec<u8>> {
    let event = &record.event;
    let mut writer = CanonicalWriter::default();
    writer.write_str("schema", LEAF_SCHEMA)?;
    writer.write_str("tracking_id", &event.tracking_id)?;
    writer.write_str("location", &event.location)?;
    writer.write_u64(event.scanned_quantity);
    writer.write_f64("scanned_weight_kg", event.scanned_weight_kg)?;
    for value in event.scanned_dimensions_cm {
        writer.write_f64("scanned_dimensions_cm", value)?;
    }
    writer.write_time("timestamp", &event.timestamp)?;
    writer.write_str("result", record.result.as_str())?;
    writer.write_u64(record.reasons.len() as u64);
    for reason in &record.reasons {
        writer.write_str("reasons", reason)?;
    }
    Ok(writer.into_inner())
}

#[derive(Default)]
struct CanonicalWriter {
    buffer: Vec<u8>,
}

impl CanonicalWriter {
    fn write_str(&mut self, field: &'static str, value: &str) -> Result<()> {
        let len = u32::try_from(value.len()).map_err(|_| Error::Encoding {
            field,
            reason: format!("string of {} bytes is too long", value.len()),
        })?;
        self.buffer.extend_from_slice(&len.to_be_bytes());
        self.buffer.extend_from_slice(value.as_bytes());
        Ok(())
    }

    fn write_u64(&mut self, value: u64) {
        self.buffer.extend_from_slice(&value.to_be_bytes());
    }

    fn write_f64(&mut self, field: &'static str, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(Error::Encoding {
                field,
                reason: format!("{} is not a finite number", value),
            });
        }
        // -0.0 == 0.0 so both are written as positive zero
        let value = if value == 0.0 { 0.0 } else { value };
        self.write_u64(value.to_bits());
        Ok(())
    }

    fn write_time(
        &mut self,
        field: &'static str,
        value: &UtcDateTime,
    ) -> Result<()> {
        let text = value.to_canonical().map_err(|e| Error::Encoding {
            field,
            reason: e.to_string(),
        })?;
        self.write_str(field, &text)
    }

    fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}
