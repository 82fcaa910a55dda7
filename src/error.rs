//! Error types for Festivo.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Festivo operations.
pub type Result<T> = std::result::Result<T, FestivoError>;

/// Errors that can occur in Festivo.
#[derive(Debug, Error)]
pub enum FestivoError {
    /// Failed to open or read a festival source file.
    #[error("Failed to read festival source: {path}")]
    SourceRead {
        /// Path of the source that could not be read.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// The festival payload was not valid JSON for the expected schema.
    #[error("Invalid festival payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// The background loader stopped without delivering a result.
    #[error("Festival loader stopped unexpectedly")]
    LoaderDisconnected,

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// Nothing to copy for the selected festival.
    #[error("No link available for {name}")]
    NoLink {
        /// Display name of the festival without a link.
        name: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FestivoError {
    /// Create a SourceRead error.
    pub fn source_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceRead {
            path: path.into(),
            source,
        }
    }

    /// Create a NoLink error.
    pub fn no_link(name: impl Into<String>) -> Self {
        Self::NoLink { name: name.into() }
    }
}
