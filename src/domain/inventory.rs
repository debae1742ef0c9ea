use serde::{Deserialize, Serialize};

use crate::domain::Timestamp;

/// Stock record for one food item, keyed by the owning item's id (1:1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub food_item_id: String,
    pub quantity: u32,
    pub created_date: Timestamp,
    pub updated_at: Option<Timestamp>,
}

impl Inventory {
    pub fn new(food_item_id: impl Into<String>, quantity: u32, created_date: Timestamp) -> Self {
        Self {
            food_item_id: food_item_id.into(),
            quantity,
            created_date,
            updated_at: None,
        }
    }
}
