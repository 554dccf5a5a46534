//! Checkpoint error types.

use thiserror::Error;

/// Errors raised while capturing, encoding or restoring a checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Encoding a checkpoint to JSON or bincode failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Decoding JSON or bincode bytes into a checkpoint failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Checkpoint was written by a different format version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Checkpoint does not fit the machine or arena it is restored into
    #[error("Checkpoint validation failed: {0}")]
    ValidationFailed(String),

    /// Reading or writing a checkpoint file failed
    #[error("Checkpoint file error: {0}")]
    Io(#[from] std::io::Error),
}
