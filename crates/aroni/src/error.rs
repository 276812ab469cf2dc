use aroni_core::LeafHash;
use std::path::PathBuf;
use thiserror::Error;

/// Errors generated by the command line tool.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a path is not a file.
    #[error("path {0} is not a file")]
    NotFile(PathBuf),

    /// Error generated when attempting to overwrite a file.
    #[error("file {0} already exists")]
    FileExists(PathBuf),

    /// Error generated when a proof does not lead to the root.
    #[error("proof for {leaf} does not lead to root {root}")]
    ProofRejected {
        /// Leaf hash the proof was checked for.
        leaf: LeafHash,
        /// Root hash the proof was checked against.
        root: LeafHash,
    },

    /// Errors generated by the core library.
    #[error(transparent)]
    Core(#[from] aroni_core::Error),

    /// Errors generated anchoring batches.
    #[error(transparent)]
    Anchor(#[from] aroni_anchor::Error),

    /// Errors generated by the logs library.
    #[error(transparent)]
    Logs(#[from] aroni_logs::Error),

    /// Errors generated by the IO module.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Errors generated by the JSON library.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Errors generated deserializing from TOML.
    #[error(transparent)]
    TomlDeser(#[from] toml::de::Error),

    /// Errors generated serializing to TOML.
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}
