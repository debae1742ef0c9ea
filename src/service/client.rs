//! Typed async handle for the delivery actor.
//!
//! One method per exposed operation; every method builds a request with a
//! fresh oneshot channel, sends it, and awaits the reply. Channel failures
//! map to [`ServiceError::ActorClosed`] / [`ServiceError::ActorDropped`];
//! store failures pass through with their messages intact.

use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use crate::domain::{
    Client, DeliveryAddress, Driver, FoodItem, FoodItemCreate, Inventory, Order, OrderCreate,
    OrderReceipt, Review, ReviewCreate,
};
use crate::service::error::ServiceError;
use crate::service::{DeliveryRequest, Response};
use crate::store::InitOutcome;

/// Cloneable client; all clones talk to the same actor.
#[derive(Clone)]
pub struct DeliveryClient {
    sender: mpsc::Sender<DeliveryRequest>,
}

impl DeliveryClient {
    pub fn new(sender: mpsc::Sender<DeliveryRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(Response<T>) -> DeliveryRequest,
    ) -> Result<T, ServiceError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| ServiceError::ActorClosed)?;
        response
            .await
            .map_err(|_| ServiceError::ActorDropped)?
            .map_err(ServiceError::from)
    }

    /// Seeds the default client if and only if the store is empty.
    pub async fn init_system(&self) -> Result<InitOutcome, ServiceError> {
        debug!("Sending init_system");
        self.request(|respond_to| DeliveryRequest::Init { respond_to })
            .await
    }

    pub async fn add_client(
        &self,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<String, ServiceError> {
        let (name, address) = (name.into(), address.into());
        debug!(%name, "Sending add_client");
        self.request(|respond_to| DeliveryRequest::AddClient {
            name,
            address,
            respond_to,
        })
        .await
    }

    pub async fn add_food_item_with_inventory(
        &self,
        params: FoodItemCreate,
        initial_inventory: u32,
    ) -> Result<String, ServiceError> {
        debug!(name = %params.name, initial_inventory, "Sending add_food_item_with_inventory");
        self.request(|respond_to| DeliveryRequest::AddFoodItem {
            params,
            initial_inventory,
            respond_to,
        })
        .await
    }

    pub async fn add_driver(
        &self,
        name: impl Into<String>,
        contact: impl Into<String>,
    ) -> Result<String, ServiceError> {
        let (name, contact) = (name.into(), contact.into());
        debug!(%name, "Sending add_driver");
        self.request(|respond_to| DeliveryRequest::AddDriver {
            name,
            contact,
            respond_to,
        })
        .await
    }

    pub async fn add_delivery_address(
        &self,
        client_id: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Result<String, ServiceError> {
        let client_id = client_id.into();
        debug!(%client_id, "Sending add_delivery_address");
        self.request(|respond_to| DeliveryRequest::AddDeliveryAddress {
            client_id,
            street: street.into(),
            city: city.into(),
            postal_code: postal_code.into(),
            respond_to,
        })
        .await
    }

    /// Always resolves to a receipt; an unknown client is reported inside it.
    pub async fn place_order(&self, params: OrderCreate) -> Result<OrderReceipt, ServiceError> {
        debug!(client_id = %params.client_id, items = params.items.len(), "Sending place_order");
        self.request(|respond_to| DeliveryRequest::PlaceOrder { params, respond_to })
            .await
    }

    pub async fn assign_driver(
        &self,
        order_id: impl Into<String>,
        driver_id: impl Into<String>,
    ) -> Result<String, ServiceError> {
        let (order_id, driver_id) = (order_id.into(), driver_id.into());
        debug!(%order_id, %driver_id, "Sending assign_driver");
        self.request(|respond_to| DeliveryRequest::AssignDriver {
            order_id,
            driver_id,
            respond_to,
        })
        .await
    }

    pub async fn add_review(&self, params: ReviewCreate) -> Result<String, ServiceError> {
        debug!(order_id = %params.order_id, rating = params.rating, "Sending add_review");
        self.request(|respond_to| DeliveryRequest::AddReview { params, respond_to })
            .await
    }

    pub async fn update_client(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<String, ServiceError> {
        self.request(|respond_to| DeliveryRequest::UpdateClient {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            respond_to,
        })
        .await
    }

    pub async fn update_food_item(
        &self,
        id: impl Into<String>,
        params: FoodItemCreate,
    ) -> Result<String, ServiceError> {
        self.request(|respond_to| DeliveryRequest::UpdateFoodItem {
            id: id.into(),
            params,
            respond_to,
        })
        .await
    }

    pub async fn update_driver(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
        contact: impl Into<String>,
    ) -> Result<String, ServiceError> {
        self.request(|respond_to| DeliveryRequest::UpdateDriver {
            id: id.into(),
            name: name.into(),
            contact: contact.into(),
            respond_to,
        })
        .await
    }

    pub async fn update_order_items(
        &self,
        id: impl Into<String>,
        items: Vec<String>,
    ) -> Result<String, ServiceError> {
        self.request(|respond_to| DeliveryRequest::UpdateOrderItems {
            id: id.into(),
            items,
            respond_to,
        })
        .await
    }

    pub async fn update_review(
        &self,
        id: impl Into<String>,
        rating: u8,
        comment: impl Into<String>,
    ) -> Result<String, ServiceError> {
        self.request(|respond_to| DeliveryRequest::UpdateReview {
            id: id.into(),
            rating,
            comment: comment.into(),
            respond_to,
        })
        .await
    }

    pub async fn update_delivery_address(
        &self,
        id: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Result<String, ServiceError> {
        self.request(|respond_to| DeliveryRequest::UpdateDeliveryAddress {
            id: id.into(),
            street: street.into(),
            city: city.into(),
            postal_code: postal_code.into(),
            respond_to,
        })
        .await
    }

    pub async fn update_inventory(
        &self,
        food_item_id: impl Into<String>,
        quantity: u32,
    ) -> Result<String, ServiceError> {
        self.request(|respond_to| DeliveryRequest::UpdateInventory {
            food_item_id: food_item_id.into(),
            quantity,
            respond_to,
        })
        .await
    }

    pub async fn delete_client(&self, id: impl Into<String>) -> Result<String, ServiceError> {
        self.request(|respond_to| DeliveryRequest::DeleteClient {
            id: id.into(),
            respond_to,
        })
        .await
    }

    pub async fn delete_food_item(&self, id: impl Into<String>) -> Result<String, ServiceError> {
        self.request(|respond_to| DeliveryRequest::DeleteFoodItem {
            id: id.into(),
            respond_to,
        })
        .await
    }

    pub async fn delete_order(&self, id: impl Into<String>) -> Result<String, ServiceError> {
        self.request(|respond_to| DeliveryRequest::DeleteOrder {
            id: id.into(),
            respond_to,
        })
        .await
    }

    pub async fn delete_review(&self, id: impl Into<String>) -> Result<String, ServiceError> {
        self.request(|respond_to| DeliveryRequest::DeleteReview {
            id: id.into(),
            respond_to,
        })
        .await
    }

    pub async fn delete_driver(&self, id: impl Into<String>) -> Result<String, ServiceError> {
        self.request(|respond_to| DeliveryRequest::DeleteDriver {
            id: id.into(),
            respond_to,
        })
        .await
    }

    pub async fn get_clients(&self) -> Result<Vec<Client>, ServiceError> {
        self.request(|respond_to| DeliveryRequest::GetClients { respond_to })
            .await
    }

    pub async fn get_food_items(&self) -> Result<Vec<FoodItem>, ServiceError> {
        self.request(|respond_to| DeliveryRequest::GetFoodItems { respond_to })
            .await
    }

    pub async fn get_orders(&self) -> Result<Vec<Order>, ServiceError> {
        self.request(|respond_to| DeliveryRequest::GetOrders { respond_to })
            .await
    }

    pub async fn get_reviews(&self) -> Result<Vec<Review>, ServiceError> {
        self.request(|respond_to| DeliveryRequest::GetReviews { respond_to })
            .await
    }

    pub async fn get_drivers(&self) -> Result<Vec<Driver>, ServiceError> {
        self.request(|respond_to| DeliveryRequest::GetDrivers { respond_to })
            .await
    }

    pub async fn get_inventory(&self) -> Result<Vec<Inventory>, ServiceError> {
        self.request(|respond_to| DeliveryRequest::GetInventory { respond_to })
            .await
    }

    pub async fn get_delivery_addresses(
        &self,
        client_id: impl Into<String>,
    ) -> Result<Vec<DeliveryAddress>, ServiceError> {
        self.request(|respond_to| DeliveryRequest::GetDeliveryAddresses {
            client_id: client_id.into(),
            respond_to,
        })
        .await
    }
}
