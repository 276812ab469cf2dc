use aroni_core::{LeafHash, TrackingId};
use std::{path::PathBuf, time::Duration};
use thiserror::Error;

/// Errors generated anchoring batches and serving proofs.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a scan references a shipment
    /// without declared metadata.
    #[error("no shipment metadata for tracking id {0}")]
    MetadataNotFound(TrackingId),

    /// Error generated when metadata is declared twice for
    /// the same shipment.
    #[error("shipment metadata for tracking id {0} already exists")]
    MetadataExists(TrackingId),

    /// Error generated when the tree rebuilt from an anchor
    /// snapshot does not reproduce the anchored root.
    #[error("rebuilt root {actual} does not match anchored root {expected}")]
    RootMismatch {
        /// Root persisted with the anchor.
        expected: LeafHash,
        /// Root of the rebuilt tree.
        actual: LeafHash,
    },

    /// Error generated when the notary rejects a root.
    #[error("notarization failed: {0}")]
    Notary(String),

    /// Error generated when the notary does not answer in time.
    #[error("notarization timed out after {0:?}")]
    NotaryTimeout(Duration),

    /// Error generated when the store returns a leaf hash that
    /// is not valid hexadecimal.
    #[error("store returned malformed leaf hash '{0}'")]
    CorruptLeafHash(String),

    /// Error generated when a store file is not a valid document.
    #[error("store file {0} is corrupt: {1}")]
    CorruptStore(PathBuf, serde_json::Error),

    /// Errors generated by the core library.
    #[error(transparent)]
    Core(#[from] aroni_core::Error),

    /// Errors generated by the IO module.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Errors generated by the JSON library.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Determine if this error was caused by the input supplied
    /// by a caller rather than an internal or collaborator fault.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::MetadataNotFound(_) | Error::MetadataExists(_) => true,
            Error::Core(err) => err.is_client_error(),
            _ => false,
        }
    }
}
