//! Cross-collection workflows: order placement and pricing, driver
//! assignment, food-item-with-inventory creation, inventory updates, and the
//! one-shot initialization guard.
//!
//! Every method here reads from one collection and writes into one or more
//! others. The operations are plain synchronous methods, so within the
//! single-writer actor turn the multi-collection effects commit as one unit:
//! no observer can see a food item without its inventory row, or a partially
//! priced order.

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::domain::{FoodItem, FoodItemCreate, Inventory, Order, OrderCreate, OrderReceipt};
use crate::store::delivery::{DeliveryStore, InitOutcome};
use crate::store::error::StoreError;

impl DeliveryStore {
    /// Seeds one default client, but only while every core collection is
    /// still empty. Idempotent: once any data exists, repeated calls return
    /// [`InitOutcome::AlreadyInitialized`] without side effects.
    pub fn init_system(&mut self) -> InitOutcome {
        if !self.clients.is_empty()
            || !self.food_items.is_empty()
            || !self.orders.is_empty()
            || !self.reviews.is_empty()
            || !self.drivers.is_empty()
        {
            info!("Init skipped, store already holds data");
            return InitOutcome::AlreadyInitialized;
        }

        let id = self.add_client("Default Client", "Default Address");
        info!(client_id = %id, "Seeded default client");
        InitOutcome::Seeded(id)
    }

    /// Places an order priced from the current food-item prices.
    ///
    /// This is the one operation with a value-level failure mode: an unknown
    /// client yields `{ msg: "Invalid client ID", total_price: 0 }` inside
    /// the always-success envelope, and nothing is inserted. Item ids that do
    /// not resolve contribute zero to the total rather than failing the
    /// order.
    pub fn place_order(&mut self, params: OrderCreate) -> OrderReceipt {
        if self.clients.get(&params.client_id).is_none() {
            warn!(client_id = %params.client_id, "Order rejected, unknown client");
            return OrderReceipt {
                msg: "Invalid client ID".to_string(),
                total_price: Decimal::ZERO,
            };
        }

        let total = self.sum_item_prices(&params.items);
        let id = self.fresh_id();
        let order = Order::new(
            id.clone(),
            params.client_id,
            params.items,
            total.to_string(),
            self.now(),
        );
        self.orders.insert(id, order);

        OrderReceipt {
            msg: format!("Order placed successfully. Total Price: ${total}"),
            total_price: total,
        }
    }

    /// Replaces an order's item list and reprices it with the same summing
    /// logic as placement. The stored total stays a snapshot either way.
    pub fn update_order_items(
        &mut self,
        id: &str,
        items: Vec<String>,
    ) -> Result<String, StoreError> {
        let total = self.sum_item_prices(&items);
        let now = self.now();
        self.orders.update_with(id, now, |order| {
            order.items = items;
            order.total_price = total.to_string();
        })
    }

    /// Sets the order's driver. The driver id is not checked against the
    /// Driver collection, and no defined operation ever clears it again.
    pub fn assign_driver(&mut self, order_id: &str, driver_id: String) -> Result<String, StoreError> {
        let now = self.now();
        self.orders
            .update_with(order_id, now, |order| order.driver_id = Some(driver_id))
    }

    /// Creates a food item together with its 1:1 inventory record under the
    /// same id, both stamped from a single clock reading.
    pub fn add_food_item_with_inventory(
        &mut self,
        params: FoodItemCreate,
        initial_inventory: u32,
    ) -> Result<String, StoreError> {
        if params.name.is_empty() || params.description.is_empty() || params.price.is_empty() {
            warn!("Food item rejected, missing required fields");
            return Err(StoreError::Validation(
                "Please provide valid values for name, description, and price".to_string(),
            ));
        }

        let id = self.fresh_id();
        let now = self.now();
        let item = FoodItem::new(
            id.clone(),
            params.name,
            params.description,
            params.price,
            initial_inventory,
            now,
        );
        self.food_items.insert(id.clone(), item);
        self.inventory
            .insert(id.clone(), Inventory::new(id.clone(), initial_inventory, now));

        Ok(id)
    }

    /// Overwrites the stock quantity for a food item's inventory record.
    pub fn update_inventory(&mut self, food_item_id: &str, quantity: u32) -> Result<String, StoreError> {
        let now = self.now();
        self.inventory
            .update_with(food_item_id, now, |inventory| inventory.quantity = quantity)
    }

    /// Sums the current prices of the ids in `items`, in order, duplicates
    /// included. Ids that resolve to nothing and price text that does not
    /// parse both contribute zero; the tolerant policy is deliberate, so both
    /// cases only log.
    fn sum_item_prices(&self, items: &[String]) -> Decimal {
        let mut total = Decimal::ZERO;
        for item_id in items {
            match self.food_items.get(item_id) {
                Some(item) => match item.price.parse::<Decimal>() {
                    Ok(price) => total += price,
                    Err(_) => {
                        warn!(%item_id, price = %item.price, "Unparseable price, contributing zero");
                    }
                },
                None => warn!(%item_id, "Unknown food item in order, contributing zero"),
            }
        }
        total
    }
}
