//! Site error types.

use thiserror::Error;

/// Result type for site operations.
pub type SiteResult<T> = Result<T, SiteError>;

/// Errors that can occur while starting or serving the site.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Bind failed.
    #[error("failed to bind to {addr}: {source}")]
    BindFailed {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },

    /// I/O error.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Database pool error.
    #[error("database pool error: {0}")]
    Pool(String),

    /// Database migration error.
    #[error("database migration error: {0}")]
    Migration(String),
}
