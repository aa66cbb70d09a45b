//! Contract tests for the volatile backend
//!
//! Exercises the full repository contract: round-trip, sparse updates,
//! not-found symmetry, delete finality, the count invariant, and
//! concurrency safety.

use std::collections::HashSet;
use std::sync::Arc;

use hirex_core::{Customer, Hire, Repository, Worker};
use hirex_store::memory::MemoryRepository;

#[tokio::test]
async fn test_round_trip_with_partial_fields() {
    let repo = MemoryRepository::new();

    let id = repo
        .add(Customer::new(Some("Alice".to_string()), None))
        .await
        .unwrap();

    let stored = repo.get(&id).await.unwrap();
    assert_eq!(stored.id, id);
    assert_eq!(stored.full_name.as_deref(), Some("Alice"));
    // Unpopulated fields stay absent as stored
    assert_eq!(stored.pseudonym, None);
}

#[tokio::test]
async fn test_partial_update_changes_exactly_one_field() {
    let repo = MemoryRepository::new();

    let id = repo
        .add(Customer::new(
            Some("Alice".to_string()),
            Some("A1".to_string()),
        ))
        .await
        .unwrap();

    // FullName absent: must stay untouched
    repo.update(&id, Customer::new(None, Some("A2".to_string())))
        .await
        .unwrap();

    let stored = repo.get(&id).await.unwrap();
    assert_eq!(stored.full_name.as_deref(), Some("Alice"));
    assert_eq!(stored.pseudonym.as_deref(), Some("A2"));
}

#[tokio::test]
async fn test_not_found_symmetry() {
    let repo: MemoryRepository<Customer> = MemoryRepository::new();
    let id = repo
        .add(Customer::new(Some("Alice".to_string()), None))
        .await
        .unwrap();
    repo.delete(&id).await.unwrap();

    // Never-assigned and previously-deleted ids behave identically
    for missing in ["never-assigned", id.as_str()] {
        assert!(repo.get(missing).await.unwrap_err().is_not_found());
        assert!(repo
            .update(missing, Customer::new(Some("x".to_string()), None))
            .await
            .unwrap_err()
            .is_not_found());
        assert!(repo.delete(missing).await.unwrap_err().is_not_found());
    }

    // List never fails with NotFound
    assert!(repo.list().await.is_ok());
}

#[tokio::test]
async fn test_delete_finality() {
    let repo = MemoryRepository::new();

    let id = repo
        .add(Customer::new(
            Some("Alice".to_string()),
            Some("A1".to_string()),
        ))
        .await
        .unwrap();

    repo.delete(&id).await.unwrap();

    assert!(repo.get(&id).await.unwrap_err().is_not_found());
    assert!(repo.list().await.unwrap().iter().all(|c| c.id != id));
}

#[tokio::test]
async fn test_count_invariant() {
    let repo = MemoryRepository::new();

    let mut ids = Vec::new();
    for n in 0..8 {
        let id = repo
            .add(Customer::new(Some(format!("customer {n}")), None))
            .await
            .unwrap();
        ids.push(id);
    }
    for id in &ids[..3] {
        repo.delete(id).await.unwrap();
    }

    assert_eq!(repo.list().await.unwrap().len(), 8 - 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_yield_distinct_ids() {
    let repo = Arc::new(MemoryRepository::new());
    const N: usize = 32;

    let mut handles = Vec::new();
    for n in 0..N {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.add(Customer::new(Some(format!("customer {n}")), None))
                .await
                .unwrap()
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }

    assert_eq!(ids.len(), N);
    assert_eq!(repo.list().await.unwrap().len(), N);
}

#[tokio::test]
async fn test_contract_behind_trait_object() {
    let repo: Arc<dyn Repository<Worker>> = Arc::new(MemoryRepository::new());

    let id = repo
        .add(Worker::new(
            Some("Bob".to_string()),
            None,
            Some("pipes".to_string()),
            None,
        ))
        .await
        .unwrap();

    repo.update(&id, Worker::new(None, None, None, Some("remote".to_string())))
        .await
        .unwrap();

    let stored = repo.get(&id).await.unwrap();
    assert_eq!(stored.full_name.as_deref(), Some("Bob"));
    assert_eq!(stored.description.as_deref(), Some("pipes"));
    assert_eq!(stored.position.as_deref(), Some("remote"));
}

#[tokio::test]
async fn test_hire_soft_reference_is_not_validated() {
    let repo = MemoryRepository::new();

    // The referenced customer does not exist anywhere; Add must succeed
    let id = repo
        .add(Hire::new(
            Some("fence repair".to_string()),
            Some(250),
            None,
            None,
            Some("no-such-customer".to_string()),
        ))
        .await
        .unwrap();

    let stored = repo.get(&id).await.unwrap();
    assert_eq!(stored.customer_id.as_deref(), Some("no-such-customer"));
}

#[tokio::test]
async fn test_present_empty_value_overwrites() {
    let repo = MemoryRepository::new();

    let id = repo
        .add(Customer::new(
            Some("Alice".to_string()),
            Some("A1".to_string()),
        ))
        .await
        .unwrap();

    repo.update(&id, Customer::new(None, Some(String::new())))
        .await
        .unwrap();

    let stored = repo.get(&id).await.unwrap();
    assert_eq!(stored.pseudonym.as_deref(), Some(""));
    assert_eq!(stored.full_name.as_deref(), Some("Alice"));
}
