//! The single-writer execution boundary around the store.
//!
//! # Key Types
//!
//! - [`DeliveryRequest`]: one variant per exposed operation, each carrying a
//!   oneshot response channel.
//! - [`DeliveryActor`]: owns the [`DeliveryStore`] and drains the request
//!   channel in one Tokio task.
//! - [`DeliveryClient`]: the typed async handle used by callers.
//!
//! # Concurrency Model
//! The actor processes one request *to completion* before taking the next,
//! and no request handler ever awaits. That single property delivers the
//! whole atomicity contract: mutating operations serialize with each other
//! and with reads, and multi-collection writes (food item + inventory, order
//! pricing) are indivisible to every observer. No locks, no transactions.
//!
//! Read-only requests are tagged below only as documentation; they flow
//! through the same serialized loop because correctness is the store's job
//! and throughput is not a concern at this layer.

pub mod client;
pub mod error;

pub use client::DeliveryClient;
pub use error::ServiceError;

use chrono::Utc;
use tokio::sync::{mpsc, oneshot};
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    Client, DeliveryAddress, Driver, FoodItem, FoodItemCreate, Inventory, Order, OrderCreate,
    OrderReceipt, Review, ReviewCreate,
};
use crate::store::{DeliveryStore, InitOutcome, StoreError};

/// Response channel for one request.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// One variant per entry point. "read" variants never mutate the store.
pub enum DeliveryRequest {
    // --- writes ---
    Init {
        respond_to: Response<InitOutcome>,
    },
    AddClient {
        name: String,
        address: String,
        respond_to: Response<String>,
    },
    AddFoodItem {
        params: FoodItemCreate,
        initial_inventory: u32,
        respond_to: Response<String>,
    },
    AddDriver {
        name: String,
        contact: String,
        respond_to: Response<String>,
    },
    AddDeliveryAddress {
        client_id: String,
        street: String,
        city: String,
        postal_code: String,
        respond_to: Response<String>,
    },
    PlaceOrder {
        params: OrderCreate,
        respond_to: Response<OrderReceipt>,
    },
    AssignDriver {
        order_id: String,
        driver_id: String,
        respond_to: Response<String>,
    },
    AddReview {
        params: ReviewCreate,
        respond_to: Response<String>,
    },
    UpdateClient {
        id: String,
        name: String,
        address: String,
        respond_to: Response<String>,
    },
    UpdateFoodItem {
        id: String,
        params: FoodItemCreate,
        respond_to: Response<String>,
    },
    UpdateDriver {
        id: String,
        name: String,
        contact: String,
        respond_to: Response<String>,
    },
    UpdateOrderItems {
        id: String,
        items: Vec<String>,
        respond_to: Response<String>,
    },
    UpdateReview {
        id: String,
        rating: u8,
        comment: String,
        respond_to: Response<String>,
    },
    UpdateDeliveryAddress {
        id: String,
        street: String,
        city: String,
        postal_code: String,
        respond_to: Response<String>,
    },
    UpdateInventory {
        food_item_id: String,
        quantity: u32,
        respond_to: Response<String>,
    },
    DeleteClient {
        id: String,
        respond_to: Response<String>,
    },
    DeleteFoodItem {
        id: String,
        respond_to: Response<String>,
    },
    DeleteOrder {
        id: String,
        respond_to: Response<String>,
    },
    DeleteReview {
        id: String,
        respond_to: Response<String>,
    },
    DeleteDriver {
        id: String,
        respond_to: Response<String>,
    },
    // --- reads ---
    GetClients {
        respond_to: Response<Vec<Client>>,
    },
    GetFoodItems {
        respond_to: Response<Vec<FoodItem>>,
    },
    GetOrders {
        respond_to: Response<Vec<Order>>,
    },
    GetReviews {
        respond_to: Response<Vec<Review>>,
    },
    GetDrivers {
        respond_to: Response<Vec<Driver>>,
    },
    GetInventory {
        respond_to: Response<Vec<Inventory>>,
    },
    GetDeliveryAddresses {
        client_id: String,
        respond_to: Response<Vec<DeliveryAddress>>,
    },
}

/// The actor owning the store. Create with [`new`] or [`with_store`] and
/// spawn [`DeliveryActor::run`] on a task.
pub struct DeliveryActor {
    receiver: mpsc::Receiver<DeliveryRequest>,
    store: DeliveryStore,
}

/// Creates the actor and its client with production services: UUID v4 ids
/// and a nanosecond wall clock.
pub fn new() -> (DeliveryActor, DeliveryClient) {
    let next_id = || Uuid::new_v4().to_string();
    let clock = || Utc::now().timestamp_nanos_opt().map_or(0, |nanos| nanos as u64);
    with_store(DeliveryStore::new(next_id, clock))
}

/// Creates the actor and its client around an existing store. Tests use this
/// with deterministic id and clock services.
pub fn with_store(store: DeliveryStore) -> (DeliveryActor, DeliveryClient) {
    let (sender, receiver) = mpsc::channel(32);
    (DeliveryActor { receiver, store }, DeliveryClient::new(sender))
}

impl DeliveryActor {
    /// Runs the event loop until every client is dropped.
    pub async fn run(mut self) {
        info!("Delivery actor started");
        while let Some(request) = self.receiver.recv().await {
            self.handle(request);
        }
        info!("Delivery actor shut down");
    }

    // Send failures mean the caller gave up on the oneshot; the operation
    // has already been applied, so they are ignored like any other actor
    // whose client hung up.
    fn handle(&mut self, request: DeliveryRequest) {
        use DeliveryRequest::*;

        match request {
            Init { respond_to } => {
                let _ = respond_to.send(Ok(self.store.init_system()));
            }
            AddClient {
                name,
                address,
                respond_to,
            } => {
                let _ = respond_to.send(Ok(self.store.add_client(name, address)));
            }
            AddFoodItem {
                params,
                initial_inventory,
                respond_to,
            } => {
                let _ =
                    respond_to.send(self.store.add_food_item_with_inventory(params, initial_inventory));
            }
            AddDriver {
                name,
                contact,
                respond_to,
            } => {
                let _ = respond_to.send(Ok(self.store.add_driver(name, contact)));
            }
            AddDeliveryAddress {
                client_id,
                street,
                city,
                postal_code,
                respond_to,
            } => {
                let _ = respond_to
                    .send(self.store.add_delivery_address(client_id, street, city, postal_code));
            }
            PlaceOrder { params, respond_to } => {
                let _ = respond_to.send(Ok(self.store.place_order(params)));
            }
            AssignDriver {
                order_id,
                driver_id,
                respond_to,
            } => {
                let _ = respond_to.send(self.store.assign_driver(&order_id, driver_id));
            }
            AddReview { params, respond_to } => {
                let _ = respond_to.send(Ok(self.store.add_review(params)));
            }
            UpdateClient {
                id,
                name,
                address,
                respond_to,
            } => {
                let _ = respond_to.send(self.store.update_client(&id, name, address));
            }
            UpdateFoodItem {
                id,
                params,
                respond_to,
            } => {
                let _ = respond_to.send(self.store.update_food_item(&id, params));
            }
            UpdateDriver {
                id,
                name,
                contact,
                respond_to,
            } => {
                let _ = respond_to.send(self.store.update_driver(&id, name, contact));
            }
            UpdateOrderItems {
                id,
                items,
                respond_to,
            } => {
                let _ = respond_to.send(self.store.update_order_items(&id, items));
            }
            UpdateReview {
                id,
                rating,
                comment,
                respond_to,
            } => {
                let _ = respond_to.send(self.store.update_review(&id, rating, comment));
            }
            UpdateDeliveryAddress {
                id,
                street,
                city,
                postal_code,
                respond_to,
            } => {
                let _ = respond_to
                    .send(self.store.update_delivery_address(&id, street, city, postal_code));
            }
            UpdateInventory {
                food_item_id,
                quantity,
                respond_to,
            } => {
                let _ = respond_to.send(self.store.update_inventory(&food_item_id, quantity));
            }
            DeleteClient { id, respond_to } => {
                let _ = respond_to.send(self.store.delete_client(&id));
            }
            DeleteFoodItem { id, respond_to } => {
                let _ = respond_to.send(self.store.delete_food_item(&id));
            }
            DeleteOrder { id, respond_to } => {
                let _ = respond_to.send(self.store.delete_order(&id));
            }
            DeleteReview { id, respond_to } => {
                let _ = respond_to.send(self.store.delete_review(&id));
            }
            DeleteDriver { id, respond_to } => {
                let _ = respond_to.send(self.store.delete_driver(&id));
            }
            GetClients { respond_to } => {
                let _ = respond_to.send(self.store.get_clients());
            }
            GetFoodItems { respond_to } => {
                let _ = respond_to.send(self.store.get_food_items());
            }
            GetOrders { respond_to } => {
                let _ = respond_to.send(self.store.get_orders());
            }
            GetReviews { respond_to } => {
                let _ = respond_to.send(self.store.get_reviews());
            }
            GetDrivers { respond_to } => {
                let _ = respond_to.send(self.store.get_drivers());
            }
            GetInventory { respond_to } => {
                let _ = respond_to.send(self.store.get_inventory());
            }
            GetDeliveryAddresses {
                client_id,
                respond_to,
            } => {
                let _ = respond_to.send(self.store.get_delivery_addresses(&client_id));
            }
        }
    }
}
