//! HireX store - backend implementations and the repository aggregator
//!
//! Provides:
//! - Volatile in-process backend (tests, default startup)
//! - MongoDB document backend
//! - Postgres relational backend with embedded migrations
//! - `StoreConfig` backend selection and the `Repositories` aggregator that
//!   owns the chosen backend's connection

pub mod config;
mod errors;
pub mod memory;
pub mod mongo;
pub mod postgres;
mod repositories;

pub use config::StoreConfig;
pub use repositories::Repositories;
