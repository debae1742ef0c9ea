//! The entity store: one ordered collection per entity type, owned by a
//! single [`DeliveryStore`] object.
//!
//! # Main Components
//!
//! - [`Collection`] - Ordered string-keyed map with the shared lookup/message
//!   helpers.
//! - [`StoreRecord`] - Trait supplying per-entity label metadata and the
//!   `updated_at` stamp.
//! - [`DeliveryStore`] - Owns all seven collections plus the injected id and
//!   clock services; every operation is a method on it.
//! - [`StoreError`] - Value-level failures (`NotFound`, `Validation`).
//!
//! Mutating operations never run concurrently: the store lives behind the
//! single-threaded actor in [`crate::service`], so multi-collection writes
//! (food item + inventory, order pricing) are atomic to every observer.

pub mod collection;
pub mod delivery;
pub mod error;
pub mod records;
pub mod workflows;

pub use collection::{Collection, StoreRecord};
pub use delivery::{DeliveryStore, InitOutcome};
pub use error::StoreError;

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    use super::DeliveryStore;

    /// A store with deterministic services: ids `"id_1"`, `"id_2"`, ... and a
    /// clock that starts at 100 and steps by one per reading.
    pub fn deterministic_store() -> DeliveryStore {
        let id_counter = Arc::new(AtomicU64::new(1));
        let next_id = move || {
            let n = id_counter.fetch_add(1, Ordering::SeqCst);
            format!("id_{n}")
        };
        let tick = Arc::new(AtomicU64::new(100));
        let clock = move || tick.fetch_add(1, Ordering::SeqCst);
        DeliveryStore::new(next_id, clock)
    }
}
