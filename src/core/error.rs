//! Error types for routedit
//!
//! The taxonomy is deliberately small. Pattern validation failures are not
//! represented here at all: validators return `bool` and the result is inline
//! field feedback. A [`Error::Schema`] aborts a whole config load and leaves
//! any previously loaded config untouched; a [`Error::Transport`] is
//! recoverable by user retry.

use thiserror::Error;

/// Core error type for routedit
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration document is structurally invalid
    #[error("invalid config document: {0}")]
    Schema(#[from] serde_json::Error),

    /// An HTTP request failed, timed out, or returned a non-2xx status
    #[error("transport error: {message}")]
    Transport {
        message: String,
        status: Option<u16>,
    },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
