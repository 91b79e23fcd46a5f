//! Backup-related errors.

use thiserror::Error;

/// Errors that can occur when talking to the gist endpoint.
///
/// Always returned as values - a failed backup must never take the caller
/// down with it.
#[derive(Debug, Error)]
pub enum BackupError {
    /// Backup configuration is incomplete.
    #[error("backup configuration incomplete: {0}")]
    Config(String),

    /// HTTP transport failed (network error, DNS, TLS).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("gist API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The named file is absent from the gist.
    #[error("file \"{0}\" not found in the gist")]
    FileNotFound(String),

    /// Failed to parse the endpoint's response.
    #[error("response parse error: {0}")]
    Parse(String),
}
