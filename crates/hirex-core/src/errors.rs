//! Canonical error taxonomy shared by every storage backend
//!
//! Backends normalize only the "absence" signal of their underlying store
//! into [`Error::NotFound`]; every other fault passes through as an opaque
//! [`Error::Backend`]. Callers test by variant, never by error text.

use thiserror::Error;

/// Result type alias using the canonical [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Canonical error type for repository operations
#[derive(Debug, Error)]
pub enum Error {
    /// No record with the requested id exists
    ///
    /// Expected and routine for Get/Update/Delete; handler layers map it to
    /// a missing-resource response, not a server fault.
    #[error("record not found")]
    NotFound,

    /// Any other fault surfaced by the underlying store
    ///
    /// Unclassified beyond "not NotFound": connectivity loss, malformed
    /// query, constraint violation. Propagated unchanged.
    #[error("storage backend fault: {source}")]
    Backend {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// Invalid or incomplete store configuration
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Schema migration failed during startup
    #[error("migration failed: {message}")]
    Migration { message: String },
}

impl Error {
    /// Wrap a driver error as an opaque backend fault
    pub fn backend(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Error::Backend {
            source: Box::new(source),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Create a migration error
    pub fn migration(message: impl Into<String>) -> Self {
        Error::Migration {
            message: message.into(),
        }
    }

    /// Check whether this error is the canonical NotFound
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound)
    }
}
