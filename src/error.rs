//! Error types for the dochtml library.

use std::io;
use thiserror::Error;

/// Result type alias for dochtml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document lookup, fetch, and rendering.
#[derive(Error, Debug)]
pub enum Error {
    /// No document name was supplied.
    #[error("Missing document name parameter")]
    InputMissing,

    /// A required configuration value is absent.
    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    /// No document with the requested name exists in the collection.
    #[error("Document \"{0}\" not found in the collection")]
    NotFound(String),

    /// The provider rejected the request for lack of permission.
    #[error("Access denied: the account may not have permission to access this document or collection")]
    AccessDenied,

    /// The provider answered with an unexpected status.
    #[error("Provider error: {status} - {message}")]
    Provider {
        /// HTTP-like status category reported by the provider
        status: u16,
        /// Provider-supplied detail
        message: String,
    },

    /// Transport-level failure talking to the provider.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A provider payload or local input could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Error during rendering (JSON output).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// HTTP-like status code for the failure, for service boundaries that
    /// answer with one.
    ///
    /// Render degradations never reach this mapping: unknown styles and
    /// missing optional fields fall back to defaults instead of erroring.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::InputMissing => 400,
            Error::ConfigurationMissing(_) => 500,
            Error::NotFound(_) => 404,
            Error::AccessDenied => 403,
            Error::Provider { status, .. } => *status,
            Error::Http(_) => 502,
            Error::Io(_) => 500,
            Error::Decode(_) => 502,
            Error::Render(_) => 500,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}
