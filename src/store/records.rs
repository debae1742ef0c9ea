//! [`StoreRecord`] implementations for every persisted entity.
//!
//! The labels feed the shared message templates in
//! [`Collection`](crate::store::Collection): `"No {plural} found"`,
//! `"{label} not found"`, and `"{label} with ID: {id} removed successfully"`.

use crate::domain::{
    Client, DeliveryAddress, Driver, FoodItem, Inventory, Order, Review, Timestamp,
};
use crate::store::collection::StoreRecord;

impl StoreRecord for Client {
    const LABEL: &'static str = "Client";
    const LABEL_PLURAL: &'static str = "clients";

    fn touch(&mut self, now: Timestamp) {
        self.updated_at = Some(now);
    }
}

impl StoreRecord for FoodItem {
    const LABEL: &'static str = "Food item";
    const LABEL_PLURAL: &'static str = "food items";

    fn touch(&mut self, now: Timestamp) {
        self.updated_at = Some(now);
    }
}

impl StoreRecord for Order {
    const LABEL: &'static str = "Order";
    const LABEL_PLURAL: &'static str = "orders";

    fn touch(&mut self, now: Timestamp) {
        self.updated_at = Some(now);
    }
}

impl StoreRecord for Review {
    const LABEL: &'static str = "Review";
    const LABEL_PLURAL: &'static str = "reviews";

    fn touch(&mut self, now: Timestamp) {
        self.updated_at = Some(now);
    }
}

impl StoreRecord for Driver {
    const LABEL: &'static str = "Driver";
    const LABEL_PLURAL: &'static str = "drivers";

    fn touch(&mut self, now: Timestamp) {
        self.updated_at = Some(now);
    }
}

// "Inventory" is its own plural: the empty-collection message reads
// "No inventory found".
impl StoreRecord for Inventory {
    const LABEL: &'static str = "Inventory";
    const LABEL_PLURAL: &'static str = "inventory";

    fn touch(&mut self, now: Timestamp) {
        self.updated_at = Some(now);
    }
}

impl StoreRecord for DeliveryAddress {
    const LABEL: &'static str = "Delivery address";
    const LABEL_PLURAL: &'static str = "delivery addresses";

    fn touch(&mut self, now: Timestamp) {
        self.updated_at = Some(now);
    }
}
