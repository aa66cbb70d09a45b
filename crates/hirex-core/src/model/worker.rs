use serde::{Deserialize, Serialize};

use super::{Entity, SparseFields};

/// Worker - a party that takes on hires
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Backend-assigned identifier, immutable after creation
    #[serde(default)]
    pub id: String,

    pub full_name: Option<String>,

    pub pseudonym: Option<String>,

    pub description: Option<String>,

    pub position: Option<String>,
}

impl Worker {
    /// Create a worker with no id; the backend assigns one on Add
    pub fn new(
        full_name: Option<String>,
        pseudonym: Option<String>,
        description: Option<String>,
        position: Option<String>,
    ) -> Self {
        Self {
            id: String::new(),
            full_name,
            pseudonym,
            description,
            position,
        }
    }
}

impl Entity for Worker {
    const KIND: &'static str = "worker";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn sparse_fields(&self) -> SparseFields {
        let mut fields = SparseFields::new();
        fields.set("full_name", self.full_name.clone());
        fields.set("pseudonym", self.pseudonym.clone());
        fields.set("description", self.description.clone());
        fields.set("position", self.position.clone());
        fields
    }

    fn merge(&mut self, patch: Self) {
        if patch.full_name.is_some() {
            self.full_name = patch.full_name;
        }
        if patch.pseudonym.is_some() {
            self.pseudonym = patch.pseudonym;
        }
        if patch.description.is_some() {
            self.description = patch.description;
        }
        if patch.position.is_some() {
            self.position = patch.position;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_fields_order() {
        let worker = Worker::new(
            Some("Bob".to_string()),
            None,
            Some("pipes".to_string()),
            Some("on-site".to_string()),
        );

        let columns: Vec<_> = worker
            .sparse_fields()
            .iter()
            .map(|(column, _)| *column)
            .collect();
        assert_eq!(columns, vec!["full_name", "description", "position"]);
    }

    #[test]
    fn test_merge_keeps_absent_fields() {
        let mut stored = Worker::new(
            Some("Bob".to_string()),
            Some("B1".to_string()),
            Some("pipes".to_string()),
            Some("on-site".to_string()),
        );

        stored.merge(Worker::new(None, None, Some("drains".to_string()), None));

        assert_eq!(stored.full_name.as_deref(), Some("Bob"));
        assert_eq!(stored.pseudonym.as_deref(), Some("B1"));
        assert_eq!(stored.description.as_deref(), Some("drains"));
        assert_eq!(stored.position.as_deref(), Some("on-site"));
    }
}
