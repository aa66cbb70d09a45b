use async_trait::async_trait;
use hirex_core::{Customer, Entity, Error, Repository, Result};
use sqlx::PgPool;

use super::update_by_id;
use crate::errors::from_sqlx;

/// Row shape of the `customers` table
#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: String,
    full_name: Option<String>,
    pseudonym: Option<String>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            id: row.id,
            full_name: row.full_name,
            pseudonym: row.pseudonym,
        }
    }
}

/// Customer repository over the `customers` table
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Customer> for CustomerRepository {
    /// Ascending by id
    async fn list(&self) -> Result<Vec<Customer>> {
        let rows: Vec<CustomerRow> =
            sqlx::query_as("SELECT id, full_name, pseudonym FROM customers ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| from_sqlx("customer.list", e))?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn add(&self, entity: Customer) -> Result<String> {
        sqlx::query_scalar::<_, String>(
            "INSERT INTO customers (full_name, pseudonym) VALUES ($1, $2) RETURNING id",
        )
        .bind(entity.full_name)
        .bind(entity.pseudonym)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| from_sqlx("customer.add", e))
    }

    async fn get(&self, id: &str) -> Result<Customer> {
        let row: Option<CustomerRow> =
            sqlx::query_as("SELECT id, full_name, pseudonym FROM customers WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| from_sqlx("customer.get", e))?;

        row.map(Customer::from).ok_or(Error::NotFound)
    }

    async fn update(&self, id: &str, patch: Customer) -> Result<()> {
        let fields = patch.sparse_fields();
        if fields.is_empty() {
            return Ok(());
        }

        update_by_id(&self.pool, "customers", &fields, id, "customer.update").await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let deleted: Option<String> =
            sqlx::query_scalar("DELETE FROM customers WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| from_sqlx("customer.delete", e))?;

        deleted.map(|_| ()).ok_or(Error::NotFound)
    }
}
