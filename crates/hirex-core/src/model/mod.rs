//! Entity value types for the three record kinds
//!
//! Every non-id field is optional, and the optionality is deliberately
//! overloaded: absent on Add means "store nothing", absent on Update means
//! "leave the stored value unchanged" while a present value (including an
//! empty one) means "overwrite". The [`SparseFields`] type makes the second
//! reading explicit for the persistent backends.

mod customer;
mod fields;
mod hire;
mod worker;

pub use customer::Customer;
pub use fields::{FieldValue, SparseFields};
pub use hire::Hire;
pub use worker::Worker;

/// Common surface of the three record kinds
///
/// Backends are generic over this trait: they assign ids, extract the
/// present-field set for sparse updates, and merge patches into stored
/// records without touching absent fields.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Record kind name used in log events
    const KIND: &'static str;

    /// Backend-assigned identifier; empty until the entity is stored
    fn id(&self) -> &str;

    /// Stamp the backend-assigned identifier onto the entity
    fn set_id(&mut self, id: String);

    /// Present fields in the backend field order
    fn sparse_fields(&self) -> SparseFields;

    /// Overwrite exactly the fields present on `patch`, leaving the rest
    fn merge(&mut self, patch: Self);
}
