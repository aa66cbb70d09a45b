use async_trait::async_trait;
use futures::TryStreamExt;
use hirex_core::{Entity, Error, Repository, Result, Worker};
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use super::set_document;
use crate::errors::{from_mongo, unexpected};

/// Wire shape of a worker document
#[derive(Debug, Serialize, Deserialize)]
struct WorkerDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    full_name: Option<String>,
    pseudonym: Option<String>,
    description: Option<String>,
    position: Option<String>,
}

impl From<Worker> for WorkerDocument {
    fn from(entity: Worker) -> Self {
        Self {
            id: None,
            full_name: entity.full_name,
            pseudonym: entity.pseudonym,
            description: entity.description,
            position: entity.position,
        }
    }
}

impl From<WorkerDocument> for Worker {
    fn from(document: WorkerDocument) -> Self {
        Self {
            id: document.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            full_name: document.full_name,
            pseudonym: document.pseudonym,
            description: document.description,
            position: document.position,
        }
    }
}

/// Worker repository over the `workers` collection
pub struct WorkerRepository {
    collection: Collection<WorkerDocument>,
}

impl WorkerRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection("workers"),
        }
    }
}

#[async_trait]
impl Repository<Worker> for WorkerRepository {
    async fn list(&self) -> Result<Vec<Worker>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| from_mongo("worker.list", e))?;

        let documents: Vec<WorkerDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| from_mongo("worker.list", e))?;

        Ok(documents.into_iter().map(Worker::from).collect())
    }

    async fn add(&self, entity: Worker) -> Result<String> {
        let result = self
            .collection
            .insert_one(WorkerDocument::from(entity))
            .await
            .map_err(|e| from_mongo("worker.add", e))?;

        result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .ok_or_else(|| unexpected("worker.add", "inserted id is not an ObjectId"))
    }

    async fn get(&self, id: &str) -> Result<Worker> {
        let oid = ObjectId::parse_str(id).map_err(|_| Error::NotFound)?;

        self.collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(|e| from_mongo("worker.get", e))?
            .map(Worker::from)
            .ok_or(Error::NotFound)
    }

    async fn update(&self, id: &str, patch: Worker) -> Result<()> {
        let fields = patch.sparse_fields();
        if fields.is_empty() {
            return Ok(());
        }

        let oid = ObjectId::parse_str(id).map_err(|_| Error::NotFound)?;

        let result = self
            .collection
            .update_one(doc! { "_id": oid }, doc! { "$set": set_document(&fields) })
            .await
            .map_err(|e| from_mongo("worker.update", e))?;

        if result.matched_count == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let oid = ObjectId::parse_str(id).map_err(|_| Error::NotFound)?;

        let result = self
            .collection
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(|e| from_mongo("worker.delete", e))?;

        if result.deleted_count == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }
}
