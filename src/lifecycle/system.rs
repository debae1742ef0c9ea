//! System lifecycle: startup and graceful shutdown.

use tracing::info;

use crate::service::{self, DeliveryClient};

/// The runtime owner of the delivery backend.
///
/// Spawns the single store actor on a Tokio task and exposes its client.
/// Dropping (or shutting down) the system closes the request channel, which
/// ends the actor's event loop.
///
/// # Example
///
/// ```ignore
/// let system = DeliverySystem::new();
/// let client_id = system.client.add_client("Alice", "1 Main St").await?;
/// system.shutdown().await?;
/// ```
pub struct DeliverySystem {
    /// Client for all store operations; clone freely.
    pub client: DeliveryClient,

    handle: tokio::task::JoinHandle<()>,
}

impl DeliverySystem {
    /// Starts the actor with production services (UUID ids, wall clock).
    pub fn new() -> Self {
        let (actor, client) = service::new();
        let handle = tokio::spawn(actor.run());
        Self { client, handle }
    }

    /// Closes the request channel and waits for the actor to drain and exit.
    ///
    /// Requests already queued are still processed before the task ends.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down delivery system");
        drop(self.client);
        self.handle
            .await
            .map_err(|e| format!("Delivery actor task failed: {e}"))
    }
}

impl Default for DeliverySystem {
    fn default() -> Self {
        Self::new()
    }
}
