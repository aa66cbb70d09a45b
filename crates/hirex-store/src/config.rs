//! Store configuration
//!
//! Exactly one backend family is selected per process, at startup, from the
//! environment. `.env` files are honored for development.

use hirex_core::{Error, Result};

const DEFAULT_BACKEND: &str = "memory";
const DEFAULT_MONGO_DATABASE: &str = "hirex";

/// Closed set of backend choices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// In-process volatile store; no parameters
    Memory,
    /// Document store: connection URL plus database name
    Mongo { uri: String, database: String },
    /// Relational store: connection string whose scheme prefix selects the
    /// SQL dialect and its migration set
    Postgres { dsn: String },
}

impl StoreConfig {
    /// Read the backend selection from the environment
    ///
    /// Variables: `STORE_BACKEND` (`memory` | `mongo` | `postgres`,
    /// defaults to `memory`), `MONGO_URI`, `MONGO_DATABASE`,
    /// `POSTGRES_DSN`.
    ///
    /// # Errors
    /// `Error::Config` if the backend name is unknown or a required
    /// variable for the chosen backend is missing.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let backend =
            std::env::var("STORE_BACKEND").unwrap_or_else(|_| DEFAULT_BACKEND.to_string());

        Self::from_parts(
            &backend,
            std::env::var("MONGO_URI").ok(),
            std::env::var("MONGO_DATABASE").ok(),
            std::env::var("POSTGRES_DSN").ok(),
        )
    }

    /// Build a configuration from already-read values
    pub fn from_parts(
        backend: &str,
        mongo_uri: Option<String>,
        mongo_database: Option<String>,
        postgres_dsn: Option<String>,
    ) -> Result<Self> {
        match backend.to_lowercase().as_str() {
            "memory" => Ok(StoreConfig::Memory),
            "mongo" => {
                let uri = mongo_uri
                    .ok_or_else(|| Error::config("MONGO_URI is required for the mongo backend"))?;
                let database =
                    mongo_database.unwrap_or_else(|| DEFAULT_MONGO_DATABASE.to_string());
                Ok(StoreConfig::Mongo { uri, database })
            }
            "postgres" => {
                let dsn = postgres_dsn.ok_or_else(|| {
                    Error::config("POSTGRES_DSN is required for the postgres backend")
                })?;
                Ok(StoreConfig::Postgres { dsn })
            }
            other => Err(Error::config(format!("unknown store backend '{other}'"))),
        }
    }
}
