use serde::{Deserialize, Serialize};

use crate::domain::Timestamp;

/// A delivery driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub created_date: Timestamp,
    pub updated_at: Option<Timestamp>,
}

impl Driver {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        contact: impl Into<String>,
        created_date: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contact: contact.into(),
            created_date,
            updated_at: None,
        }
    }
}
