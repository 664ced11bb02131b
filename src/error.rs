//! Error types for Folio.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Folio operations.
pub type Result<T> = std::result::Result<T, FolioError>;

/// Errors that can occur in Folio.
#[derive(Debug, Error)]
pub enum FolioError {
    /// A publication resource could not be fetched from the provider.
    #[error("Failed to fetch '{name}': {message}")]
    Fetch { name: &'static str, message: String },

    /// A publication resource contained invalid JSON.
    #[error("Failed to decode '{name}': {source}")]
    Decode {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FolioError {
    /// Create a Fetch error.
    pub fn fetch(name: &'static str, message: impl Into<String>) -> Self {
        Self::Fetch {
            name,
            message: message.into(),
        }
    }

    /// Create a Decode error.
    pub fn decode(name: &'static str, source: serde_json::Error) -> Self {
        Self::Decode { name, source }
    }
}
