//! Driver-fault translation helpers
//!
//! Only transport/statement faults come through here; the canonical
//! NotFound is decided from statement results (missing row, zero match
//! count, map lookup miss) so a driver's own absence signal never leaks
//! past the contract. NotFound is an expected outcome and is never logged
//! as an error.

use hirex_core::Error;

/// Wrap a postgres driver fault, logging the failed operation
pub(crate) fn from_sqlx(op: &'static str, err: sqlx::Error) -> Error {
    tracing::error!(op, error = %err, "postgres fault");
    Error::backend(err)
}

/// Wrap a mongo driver fault, logging the failed operation
pub(crate) fn from_mongo(op: &'static str, err: mongodb::error::Error) -> Error {
    tracing::error!(op, error = %err, "mongo fault");
    Error::backend(err)
}

/// Backend fault with no underlying driver error to carry
pub(crate) fn unexpected(op: &'static str, message: impl Into<String>) -> Error {
    let message = message.into();
    tracing::error!(op, %message, "storage backend fault");
    Error::Backend {
        source: message.into(),
    }
}
