use serde::{Deserialize, Serialize};

use crate::domain::Timestamp;

/// A delivery address belonging to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    pub id: String,
    pub client_id: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub created_date: Timestamp,
    pub updated_at: Option<Timestamp>,
}

impl DeliveryAddress {
    pub fn new(
        id: impl Into<String>,
        client_id: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        created_date: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            client_id: client_id.into(),
            street: street.into(),
            city: city.into(),
            postal_code: postal_code.into(),
            created_date,
            updated_at: None,
        }
    }
}
