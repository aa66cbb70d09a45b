//! Live-store contract tests for the document backend
//!
//! These need a reachable MongoDB; they are ignored by default. Run with:
//!
//! ```text
//! MONGO_URI=mongodb://localhost:27017 MONGO_DATABASE=hirex_test \
//!     cargo test -p hirex-store -- --ignored
//! ```

use hirex_core::{Customer, Repository, Worker};
use hirex_store::mongo;

async fn database() -> mongodb::Database {
    let uri = std::env::var("MONGO_URI").expect("MONGO_URI must be set for live tests");
    let database =
        std::env::var("MONGO_DATABASE").unwrap_or_else(|_| "hirex_test".to_string());

    let client = mongo::connect(&uri).await.expect("connect + ping");
    client.database(&database)
}

#[tokio::test]
#[ignore = "requires a running mongod; set MONGO_URI"]
async fn test_customer_crud_scenario() {
    let repo = mongo::CustomerRepository::new(&database().await);

    let id = repo
        .add(Customer::new(
            Some("Alice".to_string()),
            Some("A1".to_string()),
        ))
        .await
        .unwrap();

    let stored = repo.get(&id).await.unwrap();
    assert_eq!(stored.id, id);
    assert_eq!(stored.full_name.as_deref(), Some("Alice"));

    repo.update(&id, Customer::new(None, Some("A2".to_string())))
        .await
        .unwrap();

    let stored = repo.get(&id).await.unwrap();
    assert_eq!(stored.full_name.as_deref(), Some("Alice"));
    assert_eq!(stored.pseudonym.as_deref(), Some("A2"));

    repo.delete(&id).await.unwrap();
    assert!(repo.get(&id).await.unwrap_err().is_not_found());
}

#[tokio::test]
#[ignore = "requires a running mongod; set MONGO_URI"]
async fn test_workers_live_in_their_own_collection() {
    let database = database().await;
    let workers = mongo::WorkerRepository::new(&database);
    let customers = mongo::CustomerRepository::new(&database);

    let customers_before = customers.list().await.unwrap().len();

    let id = workers
        .add(Worker::new(Some("Bob".to_string()), None, None, None))
        .await
        .unwrap();

    // Adding a worker must not grow the customers collection
    assert_eq!(customers.list().await.unwrap().len(), customers_before);

    workers.delete(&id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running mongod; set MONGO_URI"]
async fn test_not_found_normalization() {
    let repo = mongo::CustomerRepository::new(&database().await);

    // A valid-but-unassigned ObjectId and a malformed id both read as absent
    for missing in ["ffffffffffffffffffffffff", "not-an-object-id"] {
        assert!(repo.get(missing).await.unwrap_err().is_not_found());
        assert!(repo
            .update(missing, Customer::new(Some("x".to_string()), None))
            .await
            .unwrap_err()
            .is_not_found());
        assert!(repo.delete(missing).await.unwrap_err().is_not_found());
    }

    // Empty patch: no-op success, no store call
    repo.update("ffffffffffffffffffffffff", Customer::new(None, None))
        .await
        .unwrap();
}
