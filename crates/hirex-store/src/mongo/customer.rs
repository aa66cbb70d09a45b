use async_trait::async_trait;
use futures::TryStreamExt;
use hirex_core::{Customer, Entity, Error, Repository, Result};
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use super::set_document;
use crate::errors::{from_mongo, unexpected};

/// Wire shape of a customer document
///
/// `_id` is omitted on insert so the server assigns the ObjectId.
#[derive(Debug, Serialize, Deserialize)]
struct CustomerDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    full_name: Option<String>,
    pseudonym: Option<String>,
}

impl From<Customer> for CustomerDocument {
    fn from(entity: Customer) -> Self {
        Self {
            id: None,
            full_name: entity.full_name,
            pseudonym: entity.pseudonym,
        }
    }
}

impl From<CustomerDocument> for Customer {
    fn from(document: CustomerDocument) -> Self {
        Self {
            id: document.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            full_name: document.full_name,
            pseudonym: document.pseudonym,
        }
    }
}

/// Customer repository over the `customers` collection
pub struct CustomerRepository {
    collection: Collection<CustomerDocument>,
}

impl CustomerRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection("customers"),
        }
    }
}

#[async_trait]
impl Repository<Customer> for CustomerRepository {
    /// Unordered; the unfiltered query is materialized in full
    async fn list(&self) -> Result<Vec<Customer>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| from_mongo("customer.list", e))?;

        let documents: Vec<CustomerDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| from_mongo("customer.list", e))?;

        Ok(documents.into_iter().map(Customer::from).collect())
    }

    async fn add(&self, entity: Customer) -> Result<String> {
        let result = self
            .collection
            .insert_one(CustomerDocument::from(entity))
            .await
            .map_err(|e| from_mongo("customer.add", e))?;

        result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .ok_or_else(|| unexpected("customer.add", "inserted id is not an ObjectId"))
    }

    async fn get(&self, id: &str) -> Result<Customer> {
        // An id that does not parse as an ObjectId cannot name a document
        let oid = ObjectId::parse_str(id).map_err(|_| Error::NotFound)?;

        self.collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(|e| from_mongo("customer.get", e))?
            .map(Customer::from)
            .ok_or(Error::NotFound)
    }

    async fn update(&self, id: &str, patch: Customer) -> Result<()> {
        let fields = patch.sparse_fields();
        if fields.is_empty() {
            return Ok(());
        }

        let oid = ObjectId::parse_str(id).map_err(|_| Error::NotFound)?;

        let result = self
            .collection
            .update_one(doc! { "_id": oid }, doc! { "$set": set_document(&fields) })
            .await
            .map_err(|e| from_mongo("customer.update", e))?;

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
            .map_err(|e| from_mongo("customer.delete", e))?;

        if result.deleted_count == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }
}
