use serde::{Deserialize, Serialize};

use super::{Entity, SparseFields};

/// Hire - a job posted by a customer
///
/// `customer_id` is a soft reference: no backend validates that the
/// referenced customer exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hire {
    /// Backend-assigned identifier, immutable after creation
    #[serde(default)]
    pub id: String,

    pub job_name: Option<String>,

    pub amount: Option<i64>,

    pub description: Option<String>,

    pub position: Option<String>,

    pub customer_id: Option<String>,
}

impl Hire {
    /// Create a hire with no id; the backend assigns one on Add
    pub fn new(
        job_name: Option<String>,
        amount: Option<i64>,
        description: Option<String>,
        position: Option<String>,
        customer_id: Option<String>,
    ) -> Self {
        Self {
            id: String::new(),
            job_name,
            amount,
            description,
            position,
            customer_id,
        }
    }
}

impl Entity for Hire {
    const KIND: &'static str = "hire";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn sparse_fields(&self) -> SparseFields {
        let mut fields = SparseFields::new();
        fields.set("job_name", self.job_name.clone());
        fields.set("amount", self.amount);
        fields.set("description", self.description.clone());
        fields.set("position", self.position.clone());
        fields.set("customer_id", self.customer_id.clone());
        fields
    }

    fn merge(&mut self, patch: Self) {
        if patch.job_name.is_some() {
            self.job_name = patch.job_name;
        }
        if patch.amount.is_some() {
            self.amount = patch.amount;
        }
        if patch.description.is_some() {
            self.description = patch.description;
        }
        if patch.position.is_some() {
            self.position = patch.position;
        }
        if patch.customer_id.is_some() {
            self.customer_id = patch.customer_id;
        }
    }
}
