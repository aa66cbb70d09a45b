//! MongoDB document backend
//!
//! One collection per record kind, keyed by the server-generated ObjectId
//! and rendered to callers as a hex string. Each repository maps the core
//! entity to a private document struct; sparse updates are `$set`
//! documents carrying only the fields present on the input.

mod customer;
mod hire;
mod worker;

pub use customer::CustomerRepository;
pub use hire::HireRepository;
pub use worker::WorkerRepository;

use std::time::Duration;

use hirex_core::{FieldValue, Result, SparseFields};
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::ClientOptions;
use mongodb::Client;

use crate::errors::from_mongo;

const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Establish and health-check a client connection
///
/// # Errors
/// Any parse, connection, or ping failure; fatal to startup.
pub async fn connect(uri: &str) -> Result<Client> {
    let mut options = ClientOptions::parse(uri)
        .await
        .map_err(|e| from_mongo("connect", e))?;
    options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);

    let client = Client::with_options(options).map_err(|e| from_mongo("connect", e))?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| from_mongo("ping", e))?;

    Ok(client)
}

/// Render a sparse field set as a `$set` document
///
/// Absent fields are skipped entirely, never written as nulls.
fn set_document(fields: &SparseFields) -> Document {
    let mut set = Document::new();
    for (column, value) in fields.iter() {
        let bson = match value {
            FieldValue::Text(text) => Bson::String(text.clone()),
            FieldValue::Integer(number) => Bson::Int64(*number),
        };
        set.insert(*column, bson);
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_document_skips_absent_fields() {
        let mut fields = SparseFields::new();
        fields.set("full_name", Some("Alice".to_string()));
        fields.set("pseudonym", None::<String>);
        fields.set("amount", Some(250_i64));

        let set = set_document(&fields);

        assert_eq!(set.len(), 2);
        assert_eq!(set.get_str("full_name").unwrap(), "Alice");
        assert_eq!(set.get_i64("amount").unwrap(), 250);
        assert!(!set.contains_key("pseudonym"));
    }

    #[test]
    fn test_set_document_keeps_present_empty_string() {
        let mut fields = SparseFields::new();
        fields.set("pseudonym", Some(String::new()));

        let set = set_document(&fields);
        assert_eq!(set.get_str("pseudonym").unwrap(), "");
    }
}
