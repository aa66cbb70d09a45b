//! Repository aggregator
//!
//! Constructed once at process start from a [`StoreConfig`], injected into
//! the service layer, and released once during orderly shutdown. Exactly
//! one backend family is wired for all three record kinds; callers never
//! branch on backend identity.

use std::sync::Arc;

use hirex_core::{Customer, Hire, Repository, Result, Worker};
use sqlx::PgPool;

use crate::config::StoreConfig;
use crate::memory::MemoryRepository;
use crate::{mongo, postgres};

/// Owned connection for the selected backend family
enum BackendHandle {
    Memory,
    Mongo(Option<mongodb::Client>),
    Postgres(PgPool),
}

/// One repository per record kind, all backed by the same family
///
/// Owns the underlying client/pool. The host process must call [`close`]
/// after it stops accepting requests; dropping without closing leaks no
/// memory but skips the drivers' clean shutdown.
///
/// [`close`]: Repositories::close
pub struct Repositories {
    pub customers: Arc<dyn Repository<Customer>>,
    pub workers: Arc<dyn Repository<Worker>>,
    pub hires: Arc<dyn Repository<Hire>>,
    handle: BackendHandle,
}

impl Repositories {
    /// Select, connect, and wire the configured backend family
    ///
    /// For mongo and postgres this establishes and health-checks the
    /// connection first, and for postgres applies pending migrations; any
    /// failure here is fatal to startup.
    pub async fn connect(config: StoreConfig) -> Result<Self> {
        match config {
            StoreConfig::Memory => {
                tracing::info!(backend = "memory", "store ready");
                Ok(Self {
                    customers: Arc::new(MemoryRepository::new()),
                    workers: Arc::new(MemoryRepository::new()),
                    hires: Arc::new(MemoryRepository::new()),
                    handle: BackendHandle::Memory,
                })
            }
            StoreConfig::Mongo { uri, database } => {
                let client = mongo::connect(&uri).await?;
                let database = client.database(&database);

                tracing::info!(backend = "mongo", database = %database.name(), "store ready");
                Ok(Self {
                    customers: Arc::new(mongo::CustomerRepository::new(&database)),
                    workers: Arc::new(mongo::WorkerRepository::new(&database)),
                    hires: Arc::new(mongo::HireRepository::new(&database)),
                    handle: BackendHandle::Mongo(Some(client)),
                })
            }
            StoreConfig::Postgres { dsn } => {
                let pool = postgres::connect(&dsn).await?;

                tracing::info!(backend = "postgres", "store ready, schema up to date");
                Ok(Self {
                    customers: Arc::new(postgres::CustomerRepository::new(pool.clone())),
                    workers: Arc::new(postgres::WorkerRepository::new(pool.clone())),
                    hires: Arc::new(postgres::HireRepository::new(pool.clone())),
                    handle: BackendHandle::Postgres(pool),
                })
            }
        }
    }

    /// Name of the active backend family
    pub fn backend_name(&self) -> &'static str {
        match self.handle {
            BackendHandle::Memory => "memory",
            BackendHandle::Mongo(_) => "mongo",
            BackendHandle::Postgres(_) => "postgres",
        }
    }

    /// Release the owned connection
    ///
    /// Safe to call more than once, and when no connection was ever
    /// opened. Repositories handed out earlier will fail on use after
    /// this.
    pub async fn close(&mut self) {
        match &mut self.handle {
            BackendHandle::Memory => {}
            BackendHandle::Mongo(client) => {
                if let Some(client) = client.take() {
                    client.shutdown().await;
                }
            }
            BackendHandle::Postgres(pool) => pool.close().await,
        }
        tracing::info!(backend = self.backend_name(), "store released");
    }
}
