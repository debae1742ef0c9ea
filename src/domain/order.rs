use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::Timestamp;

/// A placed order.
///
/// `total_price` is a snapshot: the decimal-text sum of the referenced item
/// prices at placement (or last item update), never recomputed when a food
/// item's price changes later. `items` may contain duplicates and may point
/// at food items that have since been deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub client_id: String,
    pub driver_id: Option<String>,
    pub items: Vec<String>,
    pub total_price: String,
    pub is_delivered: bool,
    pub created_date: Timestamp,
    pub updated_at: Option<Timestamp>,
}

impl Order {
    /// Creates a freshly placed order: no driver yet, not delivered.
    pub fn new(
        id: impl Into<String>,
        client_id: impl Into<String>,
        items: Vec<String>,
        total_price: impl Into<String>,
        created_date: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            client_id: client_id.into(),
            driver_id: None,
            items,
            total_price: total_price.into(),
            is_delivered: false,
            created_date,
            updated_at: None,
        }
    }
}

/// Payload for placing a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub client_id: String,
    pub items: Vec<String>,
}

/// Always-success response envelope for order placement.
///
/// Domain failures (an unknown client id) are reported inside this envelope
/// with a zero total rather than through the error channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderReceipt {
    pub msg: String,
    pub total_price: Decimal,
}
