use serde::{Deserialize, Serialize};

use crate::domain::Timestamp;

/// A registered client of the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub address: String,
    pub created_date: Timestamp,
    pub updated_at: Option<Timestamp>,
}

impl Client {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        created_date: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            created_date,
            updated_at: None,
        }
    }
}
