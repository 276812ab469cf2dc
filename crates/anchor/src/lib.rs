#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
//! Batch anchoring and proof serving for scan logs.
//!
//! The [BatchAnchorCoordinator] is the only part of the engine
//! that talks to collaborators; the backing [Store] and the
//! optional [Notary] are supplied by the caller.
mod coordinator;
mod error;
pub mod ingest;
mod notary;
mod store;

pub use coordinator::{BatchAnchorCoordinator, InclusionProof};
pub use error::Error;
pub use notary::{Notary, OtsNotary};
pub use store::{FileStore, MemoryStore, Store};

/// Result type for the library.
#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;
