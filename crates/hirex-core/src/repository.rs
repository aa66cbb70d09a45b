//! Repository contract implemented by every storage backend
//!
//! Callers program only against this trait, never against a concrete
//! backend. Every operation is an `async fn`; cancellation follows the
//! usual future semantics - dropping the returned future aborts the
//! in-flight store call.

use async_trait::async_trait;

use crate::errors::Result;
use crate::model::Entity;

/// Five-operation CRUD contract, polymorphic over the backend family
///
/// Error normalization: Get/Update/Delete on an id that does not exist fail
/// with the canonical [`Error::NotFound`](crate::Error::NotFound); any other
/// backend fault passes through unclassified. No operation retries.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Return every stored record of this kind
    ///
    /// Order is backend-specific (postgres: ascending by id; memory and
    /// mongo: unordered). Callers must not depend on it.
    async fn list(&self) -> Result<Vec<E>>;

    /// Persist a new record, ignoring any id on the input, and return the
    /// backend-assigned id
    async fn add(&self, entity: E) -> Result<String>;

    /// Return the full stored record with the given id
    async fn get(&self, id: &str) -> Result<E>;

    /// Overwrite exactly the fields present on `patch`
    ///
    /// A patch carrying no fields at all is a no-op that succeeds without
    /// touching the store.
    async fn update(&self, id: &str, patch: E) -> Result<()>;

    /// Permanently remove the record with the given id
    async fn delete(&self, id: &str) -> Result<()>;
}
