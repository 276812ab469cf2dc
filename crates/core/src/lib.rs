//! Core types for tamper-evident scan logs.
//!
//! Scan log records are canonically encoded and hashed into
//! leaf hashes, batches of leaf hashes are committed to by a
//! [HashTree] and membership of a leaf in a batch is shown with
//! a [Proof] that anyone can check with [verify_proof].
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

mod anchor;
pub mod canonical;
pub mod commit;
pub mod constants;
mod date_time;
mod error;
mod metadata;
mod scan;

pub use anchor::{AnchorId, BatchAnchor};
pub use canonical::compute_leaf_hash;
pub use commit::{verify_proof, HashTree, LeafHash, Proof};
pub use date_time::UtcDateTime;
pub use error::Error;
pub use metadata::{ShipmentMetadata, Tolerance, UrgencyLevel};
pub use scan::{Dimensions, ScanEvent, ScanLogEntry, ScanRecord, ScanResult};

/// Result type for the library.
pub(crate) type Result<T> = std::result::Result<T, Error>;

/// Opaque token identifying a shipment.
pub type TrackingId = String;
