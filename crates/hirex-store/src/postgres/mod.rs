//! Postgres relational backend
//!
//! One table per record kind with an id primary key, one column per field,
//! and an `updated_at` touch column. Partial updates build the `SET`
//! clause and positional bind list dynamically from the fields present on
//! the input. The embedded migration set is applied before any repository
//! is constructed.

mod customer;
mod hire;
mod worker;

pub use customer::CustomerRepository;
pub use hire::HireRepository;
pub use worker::WorkerRepository;

use hirex_core::{Error, FieldValue, Result, SparseFields};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::errors::from_sqlx;

const MAX_CONNECTIONS: u32 = 20;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations/postgres");

/// Resolve the SQL dialect from the connection string's scheme prefix
///
/// The prefix also selects which migration set applies; only the postgres
/// set is embedded.
///
/// # Errors
/// `Error::Config` when the scheme is missing or names an unsupported
/// dialect.
fn dialect(dsn: &str) -> Result<&'static str> {
    let (scheme, _) = dsn
        .split_once("://")
        .ok_or_else(|| Error::config("relational DSN has no scheme prefix"))?;

    match scheme.to_lowercase().as_str() {
        "postgres" | "postgresql" => Ok("postgres"),
        other => Err(Error::config(format!("unsupported sql dialect '{other}'"))),
    }
}

/// Establish a pool and bring the schema up to date
///
/// # Errors
/// Connection faults surface as `Error::Backend`, migration faults as
/// `Error::Migration`; both are fatal to startup.
pub async fn connect(dsn: &str) -> Result<PgPool> {
    dialect(dsn)?;

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(dsn)
        .await
        .map_err(|e| from_sqlx("connect", e))?;

    MIGRATOR
        .run(&pool)
        .await
        .map_err(|e| Error::migration(e.to_string()))?;

    Ok(pool)
}

/// Assemble `UPDATE <table> SET <present fields>, updated_at = now()
/// WHERE id = .. RETURNING id`
///
/// Callers guard the empty set; this builder requires at least one field.
fn build_update(table: &str, fields: &SparseFields, id: &str) -> QueryBuilder<'static, Postgres> {
    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!("UPDATE {table} SET "));

    {
        let mut clauses = builder.separated(", ");
        for (column, value) in fields.iter() {
            clauses.push(*column);
            clauses.push_unseparated(" = ");
            match value {
                FieldValue::Text(text) => clauses.push_bind_unseparated(text.clone()),
                FieldValue::Integer(number) => clauses.push_bind_unseparated(*number),
            };
        }
        clauses.push("updated_at = now()");
    }

    builder.push(" WHERE id = ");
    builder.push_bind(id.to_string());
    builder.push(" RETURNING id");

    builder
}

/// Execute a dynamic sparse update; a row must come back or the id does
/// not exist
pub(crate) async fn update_by_id(
    pool: &PgPool,
    table: &'static str,
    fields: &SparseFields,
    id: &str,
    op: &'static str,
) -> Result<()> {
    let mut builder = build_update(table, fields, id);

    let row = builder
        .build()
        .fetch_optional(pool)
        .await
        .map_err(|e| from_sqlx(op, e))?;

    match row {
        Some(_) => Ok(()),
        None => Err(Error::NotFound),
    }
}
