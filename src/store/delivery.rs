//! The store object owning every collection, plus the per-entity lifecycle
//! operations.
//!
//! # Architecture Note
//! There is exactly one `DeliveryStore` per process and it is *not* global
//! state: it is constructed once with its injected services and handed to the
//! actor in [`crate::service`], which serializes all access to it. Identifier
//! generation and wall-clock reads are injected as closures (the same "pass
//! `next_id_fn` at construction" idiom used for deterministic tests), so unit
//! tests can pin both.

use tracing::warn;

use crate::domain::{
    Client, DeliveryAddress, Driver, FoodItem, FoodItemCreate, Inventory, Order, Review,
    ReviewCreate, Timestamp,
};
use crate::store::collection::{Collection, StoreRecord};
use crate::store::error::StoreError;

/// Identifier service: returns a globally unique string per call.
pub type IdGen = Box<dyn Fn() -> String + Send + Sync>;

/// Clock service: returns a monotonically non-decreasing nanosecond stamp.
pub type Clock = Box<dyn Fn() -> Timestamp + Send + Sync>;

/// Outcome of [`DeliveryStore::init_system`].
#[derive(Debug, Clone, PartialEq)]
pub enum InitOutcome {
    /// The store was empty; one default client was seeded with this id.
    Seeded(String),
    /// Some collection already held data; nothing was written.
    AlreadyInitialized,
}

impl std::fmt::Display for InitOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Seeded(id) => f.write_str(id),
            Self::AlreadyInitialized => {
                f.write_str("Food delivery system has already been initialized")
            }
        }
    }
}

/// Owns the seven entity collections and the injected services.
pub struct DeliveryStore {
    pub(crate) clients: Collection<Client>,
    pub(crate) food_items: Collection<FoodItem>,
    pub(crate) orders: Collection<Order>,
    pub(crate) reviews: Collection<Review>,
    pub(crate) drivers: Collection<Driver>,
    pub(crate) inventory: Collection<Inventory>,
    pub(crate) delivery_addresses: Collection<DeliveryAddress>,
    next_id: IdGen,
    clock: Clock,
}

impl DeliveryStore {
    pub fn new(
        next_id: impl Fn() -> String + Send + Sync + 'static,
        clock: impl Fn() -> Timestamp + Send + Sync + 'static,
    ) -> Self {
        Self {
            clients: Collection::new(),
            food_items: Collection::new(),
            orders: Collection::new(),
            reviews: Collection::new(),
            drivers: Collection::new(),
            inventory: Collection::new(),
            delivery_addresses: Collection::new(),
            next_id: Box::new(next_id),
            clock: Box::new(clock),
        }
    }

    pub(crate) fn fresh_id(&self) -> String {
        (self.next_id)()
    }

    pub(crate) fn now(&self) -> Timestamp {
        (self.clock)()
    }

    // -------------------------------------------------------------------
    // Clients
    // -------------------------------------------------------------------

    /// Accepts any values, empty strings included; only food items and
    /// delivery addresses validate their fields.
    pub fn add_client(&mut self, name: impl Into<String>, address: impl Into<String>) -> String {
        let id = self.fresh_id();
        let client = Client::new(id.clone(), name, address, self.now());
        self.clients.insert(id.clone(), client);
        id
    }

    pub fn get_clients(&self) -> Result<Vec<Client>, StoreError> {
        self.clients.values_or_not_found()
    }

    pub fn update_client(
        &mut self,
        id: &str,
        name: String,
        address: String,
    ) -> Result<String, StoreError> {
        let now = self.now();
        self.clients.update_with(id, now, |client| {
            client.name = name;
            client.address = address;
        })
    }

    pub fn delete_client(&mut self, id: &str) -> Result<String, StoreError> {
        self.clients.remove_or_not_found(id)
    }

    // -------------------------------------------------------------------
    // Food items
    // -------------------------------------------------------------------

    pub fn get_food_items(&self) -> Result<Vec<FoodItem>, StoreError> {
        self.food_items.values_or_not_found()
    }

    /// Full overwrite of the mutable fields; the inventory cache and the
    /// paired Inventory record are untouched.
    pub fn update_food_item(
        &mut self,
        id: &str,
        params: FoodItemCreate,
    ) -> Result<String, StoreError> {
        let now = self.now();
        self.food_items.update_with(id, now, |item| {
            item.name = params.name;
            item.description = params.description;
            item.price = params.price;
        })
    }

    /// Deleting a food item leaves its Inventory record and any order
    /// references in place; pricing tolerates the dangling ids.
    pub fn delete_food_item(&mut self, id: &str) -> Result<String, StoreError> {
        self.food_items.remove_or_not_found(id)
    }

    // -------------------------------------------------------------------
    // Drivers
    // -------------------------------------------------------------------

    pub fn add_driver(&mut self, name: impl Into<String>, contact: impl Into<String>) -> String {
        let id = self.fresh_id();
        let driver = Driver::new(id.clone(), name, contact, self.now());
        self.drivers.insert(id.clone(), driver);
        id
    }

    pub fn get_drivers(&self) -> Result<Vec<Driver>, StoreError> {
        self.drivers.values_or_not_found()
    }

    pub fn update_driver(
        &mut self,
        id: &str,
        name: String,
        contact: String,
    ) -> Result<String, StoreError> {
        let now = self.now();
        self.drivers.update_with(id, now, |driver| {
            driver.name = name;
            driver.contact = contact;
        })
    }

    pub fn delete_driver(&mut self, id: &str) -> Result<String, StoreError> {
        self.drivers.remove_or_not_found(id)
    }

    // -------------------------------------------------------------------
    // Orders (placement and pricing live in `workflows`)
    // -------------------------------------------------------------------

    pub fn get_orders(&self) -> Result<Vec<Order>, StoreError> {
        self.orders.values_or_not_found()
    }

    pub fn delete_order(&mut self, id: &str) -> Result<String, StoreError> {
        self.orders.remove_or_not_found(id)
    }

    // -------------------------------------------------------------------
    // Reviews
    // -------------------------------------------------------------------

    /// The order reference is not validated; a review may point at an order
    /// that never existed or was deleted.
    pub fn add_review(&mut self, params: ReviewCreate) -> String {
        let id = self.fresh_id();
        let review = Review::new(id.clone(), params, self.now());
        self.reviews.insert(id.clone(), review);
        id
    }

    pub fn get_reviews(&self) -> Result<Vec<Review>, StoreError> {
        self.reviews.values_or_not_found()
    }

    pub fn update_review(
        &mut self,
        id: &str,
        rating: u8,
        comment: String,
    ) -> Result<String, StoreError> {
        let now = self.now();
        self.reviews.update_with(id, now, |review| {
            review.rating = rating;
            review.comment = comment;
        })
    }

    pub fn delete_review(&mut self, id: &str) -> Result<String, StoreError> {
        self.reviews.remove_or_not_found(id)
    }

    // -------------------------------------------------------------------
    // Inventory (creation happens with its food item in `workflows`)
    // -------------------------------------------------------------------

    pub fn get_inventory(&self) -> Result<Vec<Inventory>, StoreError> {
        self.inventory.values_or_not_found()
    }

    // -------------------------------------------------------------------
    // Delivery addresses
    // -------------------------------------------------------------------

    /// The client reference is not validated, matching the tolerant policy
    /// used everywhere else for cross-collection references.
    pub fn add_delivery_address(
        &mut self,
        client_id: String,
        street: String,
        city: String,
        postal_code: String,
    ) -> Result<String, StoreError> {
        if street.is_empty() || city.is_empty() || postal_code.is_empty() {
            warn!(%client_id, "Delivery address rejected, missing required fields");
            return Err(StoreError::Validation(
                "Please provide valid values for street, city, and postal code".to_string(),
            ));
        }

        let id = self.fresh_id();
        let address =
            DeliveryAddress::new(id.clone(), client_id, street, city, postal_code, self.now());
        self.delivery_addresses.insert(id.clone(), address);
        Ok(id)
    }

    /// Addresses for one client, or a not-found failure when the client has
    /// none (or does not exist; the two are indistinguishable here).
    pub fn get_delivery_addresses(
        &self,
        client_id: &str,
    ) -> Result<Vec<DeliveryAddress>, StoreError> {
        let addresses: Vec<DeliveryAddress> = self
            .delivery_addresses
            .values()
            .filter(|address| address.client_id == client_id)
            .cloned()
            .collect();
        if addresses.is_empty() {
            warn!(%client_id, "No delivery addresses for client");
            return Err(StoreError::NotFound(
                "No delivery addresses found for the client".to_string(),
            ));
        }
        Ok(addresses)
    }

    /// Existence is checked before field validation, so an unknown id wins
    /// over empty fields.
    pub fn update_delivery_address(
        &mut self,
        id: &str,
        street: String,
        city: String,
        postal_code: String,
    ) -> Result<String, StoreError> {
        if self.delivery_addresses.get(id).is_none() {
            warn!(%id, "Delivery address not found");
            return Err(StoreError::not_found(DeliveryAddress::LABEL));
        }
        if street.is_empty() || city.is_empty() || postal_code.is_empty() {
            return Err(StoreError::Validation(
                "Please provide valid values for street, city, and postal code".to_string(),
            ));
        }

        let now = self.now();
        self.delivery_addresses.update_with(id, now, |address| {
            address.street = street;
            address.city = city;
            address.postal_code = postal_code;
        })
    }
}
