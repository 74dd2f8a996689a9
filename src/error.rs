//! Error types for texbench operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for texbench operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while benchmarking a codec.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Error from a codec backend during encoding.
    #[error("Codec error ({codec}): {message}")]
    Codec {
        /// Codec identifier.
        codec: String,
        /// Error message from the backend.
        message: String,
    },

    /// Error from the generic decoder.
    #[error("Decode failed ({format}): {message}")]
    Decode {
        /// Compressed format that failed to decode.
        format: String,
        /// Error message from the decoder.
        message: String,
    },

    /// Reconstructed buffer length does not match the original.
    #[error("Size mismatch after decompression: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        /// Byte length of the original image.
        expected: usize,
        /// Byte length of the reconstruction.
        actual: usize,
    },

    /// Failed to enumerate or read the dataset directory.
    #[error("Dataset error: {path}: {reason}")]
    Dataset {
        /// Dataset directory path.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// Unknown format, codec, or quality name.
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// I/O error wrapper.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
