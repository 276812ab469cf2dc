#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
//! Command line tool for tamper-evident shipment scan logs.
//!
//! Shipment metadata is declared up front, scans are compared
//! against it and logged, and batches of logged scans are
//! anchored so that any scan can later be proven to belong to
//! an anchored batch.

pub mod commands;
mod config;
mod error;
pub mod helpers;

pub use config::*;
pub use error::Error;

/// Result type for the executable.
#[doc(hidden)]
pub type Result<T> = std::result::Result<T, error::Error>;
