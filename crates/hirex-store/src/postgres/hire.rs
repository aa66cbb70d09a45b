use async_trait::async_trait;
use hirex_core::{Entity, Error, Hire, Repository, Result};
use sqlx::PgPool;

use super::update_by_id;
use crate::errors::from_sqlx;

/// Row shape of the `hires` table
///
/// `customer_id` is a plain text column, deliberately not a foreign key.
#[derive(sqlx::FromRow)]
struct HireRow {
    id: String,
    job_name: Option<String>,
    amount: Option<i64>,
    description: Option<String>,
    position: Option<String>,
    customer_id: Option<String>,
}

impl From<HireRow> for Hire {
    fn from(row: HireRow) -> Self {
        Self {
            id: row.id,
            job_name: row.job_name,
            amount: row.amount,
            description: row.description,
            position: row.position,
            customer_id: row.customer_id,
        }
    }
}

/// Hire repository over the `hires` table
pub struct HireRepository {
    pool: PgPool,
}

impl HireRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Hire> for HireRepository {
    /// Ascending by id
    async fn list(&self) -> Result<Vec<Hire>> {
        let rows: Vec<HireRow> = sqlx::query_as(
            "SELECT id, job_name, amount, description, position, customer_id \
             FROM hires ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| from_sqlx("hire.list", e))?;

        Ok(rows.into_iter().map(Hire::from).collect())
    }

    async fn add(&self, entity: Hire) -> Result<String> {
        sqlx::query_scalar::<_, String>(
            "INSERT INTO hires (job_name, amount, description, position, customer_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(entity.job_name)
        .bind(entity.amount)
        .bind(entity.description)
        .bind(entity.position)
        .bind(entity.customer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| from_sqlx("hire.add", e))
    }

    async fn get(&self, id: &str) -> Result<Hire> {
        let row: Option<HireRow> = sqlx::query_as(
            "SELECT id, job_name, amount, description, position, customer_id \
             FROM hires WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| from_sqlx("hire.get", e))?;

        row.map(Hire::from).ok_or(Error::NotFound)
    }

    async fn update(&self, id: &str, patch: Hire) -> Result<()> {
        let fields = patch.sparse_fields();
        if fields.is_empty() {
            return Ok(());
        }

        update_by_id(&self.pool, "hires", &fields, id, "hire.update").await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let deleted: Option<String> =
            sqlx::query_scalar("DELETE FROM hires WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| from_sqlx("hire.delete", e))?;

        deleted.map(|_| ()).ok_or(Error::NotFound)
    }
}
