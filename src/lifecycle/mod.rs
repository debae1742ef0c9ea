//! Runtime orchestration and observability setup.
//!
//! # Main Components
//!
//! - [`DeliverySystem`] - Spawns the store actor and owns its task handle.
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure.

pub mod system;
pub mod tracing;

pub use system::*;
pub use tracing::*;
