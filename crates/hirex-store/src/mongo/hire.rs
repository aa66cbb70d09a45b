use async_trait::async_trait;
use futures::TryStreamExt;
use hirex_core::{Entity, Error, Hire, Repository, Result};
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use super::set_document;
use crate::errors::{from_mongo, unexpected};

/// Wire shape of a hire document
///
/// `customer_id` stays a plain string; the reference is advisory and never
/// resolved against the customers collection.
#[derive(Debug, Serialize, Deserialize)]
struct HireDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    job_name: Option<String>,
    amount: Option<i64>,
    description: Option<String>,
    position: Option<String>,
    customer_id: Option<String>,
}

impl From<Hire> for HireDocument {
    fn from(entity: Hire) -> Self {
        Self {
            id: None,
            job_name: entity.job_name,
            amount: entity.amount,
            description: entity.description,
            position: entity.position,
            customer_id: entity.customer_id,
        }
    }
}

impl From<HireDocument> for Hire {
    fn from(document: HireDocument) -> Self {
        Self {
            id: document.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            job_name: document.job_name,
            amount: document.amount,
            description: document.description,
            position: document.position,
            customer_id: document.customer_id,
        }
    }
}

/// Hire repository over the `hires` collection
pub struct HireRepository {
    collection: Collection<HireDocument>,
}

impl HireRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection("hires"),
        }
    }
}

#[async_trait]
impl Repository<Hire> for HireRepository {
    async fn list(&self) -> Result<Vec<Hire>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| from_mongo("hire.list", e))?;

        let documents: Vec<HireDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| from_mongo("hire.list", e))?;

        Ok(documents.into_iter().map(Hire::from).collect())
    }

    async fn add(&self, entity: Hire) -> Result<String> {
        let result = self
            .collection
            .insert_one(HireDocument::from(entity))
            .await
            .map_err(|e| from_mongo("hire.add", e))?;

        result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .ok_or_else(|| unexpected("hire.add", "inserted id is not an ObjectId"))
    }

    async fn get(&self, id: &str) -> Result<Hire> {
        let oid = ObjectId::parse_str(id).map_err(|_| Error::NotFound)?;

        self.collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(|e| from_mongo("hire.get", e))?
            .map(Hire::from)
            .ok_or(Error::NotFound)
    }

    async fn update(&self, id: &str, patch: Hire) -> Result<()> {
        let fields = patch.sparse_fields();
        if fields.is_empty() {
            return Ok(());
        }

        let oid = ObjectId::parse_str(id).map_err(|_| Error::NotFound)?;

        let result = self
            .collection
            .update_one(doc! { "_id": oid }, doc! { "$set": set_document(&fields) })
            .await
            .map_err(|e| from_mongo("hire.update", e))?;

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
            .map_err(|e| from_mongo("hire.delete", e))?;

        if result.deleted_count == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }
}
