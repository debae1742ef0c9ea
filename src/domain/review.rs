use serde::{Deserialize, Serialize};

use crate::domain::Timestamp;

/// A rating left against an order. The order reference is not validated and
/// may dangle after the order is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub order_id: String,
    pub rating: u8,
    pub comment: String,
    pub created_date: Timestamp,
    pub updated_at: Option<Timestamp>,
}

impl Review {
    pub fn new(id: impl Into<String>, params: ReviewCreate, created_date: Timestamp) -> Self {
        Self {
            id: id.into(),
            order_id: params.order_id,
            rating: params.rating,
            comment: params.comment,
            created_date,
            updated_at: None,
        }
    }
}

/// Payload for adding a review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewCreate {
    pub order_id: String,
    pub rating: u8,
    pub comment: String,
}
