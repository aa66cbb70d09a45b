use async_trait::async_trait;
use hirex_core::{Entity, Error, Repository, Result, Worker};
use sqlx::PgPool;

use super::update_by_id;
use crate::errors::from_sqlx;

/// Row shape of the `workers` table
#[derive(sqlx::FromRow)]
struct WorkerRow {
    id: String,
    full_name: Option<String>,
    pseudonym: Option<String>,
    description: Option<String>,
    position: Option<String>,
}

impl From<WorkerRow> for Worker {
    fn from(row: WorkerRow) -> Self {
        Self {
            id: row.id,
            full_name: row.full_name,
            pseudonym: row.pseudonym,
            description: row.description,
            position: row.position,
        }
    }
}

/// Worker repository over the `workers` table
pub struct WorkerRepository {
    pool: PgPool,
}

impl WorkerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Worker> for WorkerRepository {
    /// Ascending by id
    async fn list(&self) -> Result<Vec<Worker>> {
        let rows: Vec<WorkerRow> = sqlx::query_as(
            "SELECT id, full_name, pseudonym, description, position FROM workers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| from_sqlx("worker.list", e))?;

        Ok(rows.into_iter().map(Worker::from).collect())
    }

    async fn add(&self, entity: Worker) -> Result<String> {
        sqlx::query_scalar::<_, String>(
            "INSERT INTO workers (full_name, pseudonym, description, position) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(entity.full_name)
        .bind(entity.pseudonym)
        .bind(entity.description)
        .bind(entity.position)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| from_sqlx("worker.add", e))
    }

    async fn get(&self, id: &str) -> Result<Worker> {
        let row: Option<WorkerRow> = sqlx::query_as(
            "SELECT id, full_name, pseudonym, description, position FROM workers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| from_sqlx("worker.get", e))?;

        row.map(Worker::from).ok_or(Error::NotFound)
    }

    async fn update(&self, id: &str, patch: Worker) -> Result<()> {
        let fields = patch.sparse_fields();
        if fields.is_empty() {
            return Ok(());
        }

        update_by_id(&self.pool, "workers", &fields, id, "worker.update").await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let deleted: Option<String> =
            sqlx::query_scalar("DELETE FROM workers WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| from_sqlx("worker.delete", e))?;

        deleted.map(|_| ()).ok_or(Error::NotFound)
    }
}
