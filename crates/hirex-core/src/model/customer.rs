use serde::{Deserialize, Serialize};

use super::{Entity, SparseFields};

/// Customer - a party that posts hires
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Backend-assigned identifier, immutable after creation
    #[serde(default)]
    pub id: String,

    pub full_name: Option<String>,

    pub pseudonym: Option<String>,
}

impl Customer {
    /// Create a customer with no id; the backend assigns one on Add
    pub fn new(full_name: Option<String>, pseudonym: Option<String>) -> Self {
        Self {
            id: String::new(),
            full_name,
            pseudonym,
        }
    }
}

impl Entity for Customer {
    const KIND: &'static str = "customer";

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
        fields
    }

    fn merge(&mut self, patch: Self) {
        if patch.full_name.is_some() {
            self.full_name = patch.full_name;
        }
        if patch.pseudonym.is_some() {
            self.pseudonym = patch.pseudonym;
        }
    }
}
