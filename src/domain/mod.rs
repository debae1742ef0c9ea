//! Pure data structures for every persisted entity and its request payloads.
//!
//! Each entity carries a `created_date` stamped once at creation and an
//! `updated_at` that stays absent until the first mutation. Timestamps are
//! nanoseconds from the injected clock service; identifiers are opaque
//! strings from the injected id service.

pub mod client;
pub mod delivery_address;
pub mod driver;
pub mod food_item;
pub mod inventory;
pub mod order;
pub mod review;

pub use client::*;
pub use delivery_address::*;
pub use driver::*;
pub use food_item::*;
pub use inventory::*;
pub use order::*;
pub use review::*;

/// Nanosecond timestamp from the clock service.
pub type Timestamp = u64;
