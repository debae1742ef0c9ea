use delivery_backend::domain::{FoodItemCreate, OrderCreate, ReviewCreate};
use delivery_backend::lifecycle::DeliverySystem;
use delivery_backend::service::{self, ServiceError};
use delivery_backend::store::{DeliveryStore, InitOutcome, StoreError};

fn food(name: &str, price: &str) -> FoodItemCreate {
    FoodItemCreate {
        name: name.to_string(),
        description: format!("{name} description"),
        price: price.to_string(),
    }
}

/// Full end-to-end flow through the real actor: init, seed, price an order,
/// assign a driver, review, delete, shut down.
#[tokio::test]
async fn test_full_delivery_flow() {
    let system = DeliverySystem::new();
    let client = system.client.clone();

    // First init seeds the default client; second is a no-op.
    let outcome = client.init_system().await.expect("init failed");
    let seeded_id = match outcome {
        InitOutcome::Seeded(id) => id,
        other => panic!("expected seed, got {other:?}"),
    };
    assert_eq!(
        client.init_system().await.unwrap(),
        InitOutcome::AlreadyInitialized
    );

    let clients = client.get_clients().await.unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].id, seeded_id);
    assert_eq!(clients[0].name, "Default Client");
    assert_eq!(clients[0].updated_at, None);

    // Menu with paired inventory.
    let soup = client
        .add_food_item_with_inventory(food("Tomato Soup", "10.00"), 25)
        .await
        .unwrap();
    let salad = client
        .add_food_item_with_inventory(food("Green Salad", "5.50"), 40)
        .await
        .unwrap();

    let inventory = client.get_inventory().await.unwrap();
    assert_eq!(inventory.len(), 2);
    assert!(inventory.iter().any(|i| i.food_item_id == soup && i.quantity == 25));

    // Priced order against the seeded client.
    let receipt = client
        .place_order(OrderCreate {
            client_id: seeded_id.clone(),
            items: vec![soup.clone(), salad.clone()],
        })
        .await
        .unwrap();
    assert_eq!(receipt.msg, "Order placed successfully. Total Price: $15.50");
    assert_eq!(receipt.total_price, "15.50".parse().unwrap());

    let order = client.get_orders().await.unwrap().remove(0);
    assert_eq!(order.client_id, seeded_id);
    assert_eq!(order.total_price, "15.50");
    assert_eq!(order.driver_id, None);
    assert!(!order.is_delivered);

    // Driver assignment sets the id and stamps the order.
    let driver = client.add_driver("Dave", "555-0100").await.unwrap();
    let returned = client.assign_driver(order.id.clone(), driver.clone()).await.unwrap();
    assert_eq!(returned, order.id);
    let order = client.get_orders().await.unwrap().remove(0);
    assert_eq!(order.driver_id, Some(driver));
    assert!(order.updated_at.is_some());

    // Review the order, then delete the review.
    let review = client
        .add_review(ReviewCreate {
            order_id: order.id.clone(),
            rating: 5,
            comment: "Fast and still warm".to_string(),
        })
        .await
        .unwrap();
    let msg = client.delete_review(review.clone()).await.unwrap();
    assert_eq!(msg, format!("Review with ID: {review} removed successfully"));
    assert_eq!(
        client.get_reviews().await.unwrap_err(),
        ServiceError::Store(StoreError::NotFound("No reviews found".to_string()))
    );

    system.shutdown().await.expect("shutdown failed");
}

/// Domain failures cross the boundary with their exact messages.
#[tokio::test]
async fn test_failure_paths_through_the_boundary() {
    let system = DeliverySystem::new();
    let client = system.client.clone();

    // Invalid client id: value-level failure inside the receipt, no order.
    let receipt = client
        .place_order(OrderCreate {
            client_id: "ghost".to_string(),
            items: vec![],
        })
        .await
        .unwrap();
    assert_eq!(receipt.msg, "Invalid client ID");
    assert!(receipt.total_price.is_zero());
    assert_eq!(
        client.get_orders().await.unwrap_err(),
        ServiceError::Store(StoreError::NotFound("No orders found".to_string()))
    );

    // Validation failure leaves both collections untouched.
    let err = client
        .add_food_item_with_inventory(food("", "1.00"), 1)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ServiceError::Store(StoreError::Validation(
            "Please provide valid values for name, description, and price".to_string()
        ))
    );
    assert!(client.get_food_items().await.is_err());
    assert!(client.get_inventory().await.is_err());

    // Not-found failures for updates and deletes.
    assert_eq!(
        client.update_client("ghost", "X", "Y").await.unwrap_err(),
        ServiceError::Store(StoreError::NotFound("Client not found".to_string()))
    );
    assert_eq!(
        client.update_inventory("ghost", 3).await.unwrap_err(),
        ServiceError::Store(StoreError::NotFound("Inventory not found".to_string()))
    );
    assert_eq!(
        client.delete_order("ghost").await.unwrap_err(),
        ServiceError::Store(StoreError::NotFound("Order not found".to_string()))
    );

    system.shutdown().await.unwrap();
}

/// Concurrent clients all hit the one serialized writer: every order lands,
/// none is partially applied.
#[tokio::test]
async fn test_concurrent_orders_serialize() {
    let system = DeliverySystem::new();
    let client = system.client.clone();

    let client_id = client.add_client("Alice", "1 Main St").await.unwrap();
    let soup = client
        .add_food_item_with_inventory(food("Tomato Soup", "10.00"), 100)
        .await
        .unwrap();

    let mut handles = vec![];
    for _ in 0..16 {
        let c = client.clone();
        let cid = client_id.clone();
        let item = soup.clone();
        handles.push(tokio::spawn(async move {
            c.place_order(OrderCreate {
                client_id: cid,
                items: vec![item.clone(), item],
            })
            .await
        }));
    }

    for handle in handles {
        let receipt = handle.await.unwrap().unwrap();
        assert_eq!(receipt.total_price, "20.00".parse().unwrap());
    }

    let orders = client.get_orders().await.unwrap();
    assert_eq!(orders.len(), 16);
    assert!(orders.iter().all(|o| o.total_price == "20.00"));

    system.shutdown().await.unwrap();
}

/// Sends after the actor is gone report `ActorClosed`.
#[tokio::test]
async fn test_requests_after_actor_gone_report_closed() {
    let (actor, client) = service::with_store(DeliveryStore::new(
        || "only_id".to_string(),
        || 7,
    ));
    drop(actor);

    assert_eq!(
        client.add_client("Alice", "1 Main St").await.unwrap_err(),
        ServiceError::ActorClosed
    );
}

/// Deterministic services injected through the public constructor.
#[tokio::test]
async fn test_injected_services_are_used() {
    let (actor, client) = service::with_store(DeliveryStore::new(
        || "fixed_id".to_string(),
        || 1234,
    ));
    let handle = tokio::spawn(actor.run());

    let id = client.add_client("Alice", "1 Main St").await.unwrap();
    assert_eq!(id, "fixed_id");
    let record = client.get_clients().await.unwrap().remove(0);
    assert_eq!(record.created_date, 1234);
    assert_eq!(record.updated_at, None);

    drop(client);
    handle.await.unwrap();
}
