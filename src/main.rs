//! Demo binary: boots the system, seeds data, and walks the composite
//! workflows end to end.

use delivery_backend::domain::{FoodItemCreate, OrderCreate, ReviewCreate};
use delivery_backend::lifecycle::{setup_tracing, DeliverySystem};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting delivery backend demo");
    let system = DeliverySystem::new();
    let client = system.client.clone();

    let outcome = client.init_system().await.map_err(|e| e.to_string())?;
    info!(%outcome, "System initialized");

    let span = tracing::info_span!("seed_data");
    let (client_id, soup_id, salad_id, driver_id) = async {
        let client_id = client
            .add_client("Alice", "1 Main St")
            .await
            .map_err(|e| e.to_string())?;

        let soup_id = client
            .add_food_item_with_inventory(
                FoodItemCreate {
                    name: "Tomato Soup".to_string(),
                    description: "A bowl of tomato soup".to_string(),
                    price: "10.00".to_string(),
                },
                25,
            )
            .await
            .map_err(|e| e.to_string())?;

        let salad_id = client
            .add_food_item_with_inventory(
                FoodItemCreate {
                    name: "Green Salad".to_string(),
                    description: "A fresh green salad".to_string(),
                    price: "5.50".to_string(),
                },
                40,
            )
            .await
            .map_err(|e| e.to_string())?;

        let driver_id = client
            .add_driver("Dave", "555-0100")
            .await
            .map_err(|e| e.to_string())?;

        client
            .add_delivery_address(client_id.clone(), "1 Main St", "Springfield", "49007")
            .await
            .map_err(|e| e.to_string())?;

        Ok::<_, String>((client_id, soup_id, salad_id, driver_id))
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("order_flow");
    async {
        let receipt = client
            .place_order(OrderCreate {
                client_id: client_id.clone(),
                items: vec![soup_id.clone(), salad_id.clone()],
            })
            .await
            .map_err(|e| e.to_string())?;
        info!(msg = %receipt.msg, total = %receipt.total_price, "Order placed");

        let order = client
            .get_orders()
            .await
            .map_err(|e| e.to_string())?
            .remove(0);

        client
            .assign_driver(order.id.clone(), driver_id.clone())
            .await
            .map_err(|e| e.to_string())?;
        info!(order_id = %order.id, driver_id = %driver_id, "Driver assigned");

        client
            .update_inventory(soup_id.clone(), 24)
            .await
            .map_err(|e| e.to_string())?;

        client
            .add_review(ReviewCreate {
                order_id: order.id,
                rating: 5,
                comment: "Fast and still warm".to_string(),
            })
            .await
            .map_err(|e| e.to_string())?;

        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let reviews = client.get_reviews().await.map_err(|e| e.to_string())?;
    info!(reviews = reviews.len(), "Demo complete");

    drop(client);
    system.shutdown().await
}
