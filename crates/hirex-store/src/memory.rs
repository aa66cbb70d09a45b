//! Volatile in-process backend
//!
//! A keyed store guarded by a single shared/exclusive lock. Fastest of the
//! three families, not durable across restarts; suited for tests and
//! default startup. One generic implementation covers all record kinds.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use hirex_core::{Entity, Error, Repository, Result};
use uuid::Uuid;

/// In-memory repository over a lock-protected map
///
/// Readers proceed concurrently; writers take the lock exclusively, so no
/// read ever observes a partially-applied write. The lock is never held
/// across an await point. The map itself is never exposed - all access goes
/// through the five contract operations.
pub struct MemoryRepository<E> {
    records: RwLock<HashMap<String, E>>,
}

impl<E> MemoryRepository<E> {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl<E> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for MemoryRepository<E> {
    /// Unordered; values are copied out under the read lock so internal
    /// state is never exposed while held
    async fn list(&self) -> Result<Vec<E>> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        Ok(records.values().cloned().collect())
    }

    async fn add(&self, mut entity: E) -> Result<String> {
        // Random keys, globally unique, never reused
        let id = Uuid::new_v4().to_string();
        entity.set_id(id.clone());

        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        records.insert(id.clone(), entity);

        Ok(id)
    }

    async fn get(&self, id: &str) -> Result<E> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        records.get(id).cloned().ok_or(Error::NotFound)
    }

    async fn update(&self, id: &str, patch: E) -> Result<()> {
        if patch.sparse_fields().is_empty() {
            return Ok(());
        }

        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        match records.get_mut(id) {
            Some(stored) => {
                stored.merge(patch);
                Ok(())
            }
            None => Err(Error::NotFound),
        }
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        records.remove(id).map(|_| ()).ok_or(Error::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hirex_core::Customer;

    #[tokio::test]
    async fn test_add_assigns_fresh_id() {
        let repo = MemoryRepository::new();

        let mut input = Customer::new(Some("Alice".to_string()), None);
        input.set_id("caller-chosen".to_string());

        let id = repo.add(input).await.unwrap();
        assert_ne!(id, "caller-chosen");

        let stored = repo.get(&id).await.unwrap();
        assert_eq!(stored.id, id);
    }

    #[tokio::test]
    async fn test_update_missing_id_does_not_insert() {
        let repo: MemoryRepository<Customer> = MemoryRepository::new();

        let err = repo
            .update("absent", Customer::new(Some("Alice".to_string()), None))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_patch_is_a_noop_even_for_missing_id() {
        let repo: MemoryRepository<Customer> = MemoryRepository::new();
        repo.update("absent", Customer::new(None, None)).await.unwrap();
    }
}
