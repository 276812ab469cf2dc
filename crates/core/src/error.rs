use thiserror::Error;

/// Errors generated by the core library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a batch has no leaf hashes.
    #[error("batch contains no leaf hashes")]
    EmptyBatch,

    /// Error generated when a hash is not 64 lowercase hex characters.
    #[error("malformed hash '{0}', expected 64 lowercase hex characters")]
    MalformedHash(String),

    /// Error generated when a proof is requested for a leaf
    /// index outside of the tree.
    #[error("leaf index {index} is out of range for a tree of {len} leaves")]
    IndexOutOfRange {
        /// Requested leaf index.
        index: usize,
        /// Number of leaves in the tree.
        len: usize,
    },

    /// Error generated when a leaf hash is not part of the
    /// anchored leaf set.
    #[error("hash {0} not found in the anchored leaf set")]
    NotFound(String),

    /// Error generated when a record field cannot be
    /// canonically encoded.
    #[error("unable to encode field '{field}': {reason}")]
    Encoding {
        /// Name of the field in the canonical schema.
        field: &'static str,
        /// Why the field could not be encoded.
        reason: String,
    },

    /// Error generated when the identifiers for a batch do not
    /// line up with the leaf hashes.
    #[error("batch has {leaves} leaves but {identifiers} tracking ids")]
    BatchLengthMismatch {
        /// Number of leaf hashes.
        leaves: usize,
        /// Number of tracking identifiers.
        identifiers: usize,
    },

    /// Error generated formatting a date time.
    #[error(transparent)]
    TimeFormat(#[from] time::error::Format),

    /// Error generated parsing a date time.
    #[error(transparent)]
    TimeParse(#[from] time::error::Parse),

    /// Error generated parsing a date time format description.
    #[error(transparent)]
    InvalidFormatDescription(#[from] time::error::InvalidFormatDescription),
}

impl Error {
    /// Determine if this error was caused by the input supplied
    /// by a caller rather than an internal fault.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::EmptyBatch | Error::MalformedHash(_) | Error::NotFound(_)
        )
    }
}
