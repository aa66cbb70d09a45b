//! HireX core - entities, repository contract, errors, logging
//!
//! Provides:
//! - Entity value types for the three record kinds (customer, worker, hire)
//! - The `SparseFields` set backing partial updates
//! - The async `Repository` contract every storage backend implements
//! - The canonical error taxonomy shared by all backends
//! - Logging facility initialization

pub mod errors;
pub mod logging;
pub mod model;
pub mod repository;

pub use errors::{Error, Result};
pub use model::{Customer, Entity, FieldValue, Hire, SparseFields, Worker};
pub use repository::Repository;
