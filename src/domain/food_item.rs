use serde::{Deserialize, Serialize};

use crate::domain::Timestamp;

/// A purchasable item on the menu.
///
/// `price` is decimal text (e.g. `"10.50"`); arithmetic on it happens with
/// [`rust_decimal::Decimal`] at pricing time. `inventory` is a redundant
/// cache of the initial stock count; the authoritative quantity lives in the
/// paired [`Inventory`](crate::domain::Inventory) record under the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub inventory: u32,
    pub created_date: Timestamp,
    pub updated_at: Option<Timestamp>,
}

impl FoodItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
        inventory: u32,
        created_date: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price: price.into(),
            inventory,
            created_date,
            updated_at: None,
        }
    }
}

/// Payload for creating or overwriting a food item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItemCreate {
    pub name: String,
    pub description: String,
    pub price: String,
}
