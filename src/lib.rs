//! # Delivery Backend
//!
//! > **The persistence core of a food-delivery marketplace, built as a
//! > single-writer actor.**
//!
//! Seven entity types — clients, food items, orders, reviews, drivers,
//! inventory records, and delivery addresses — each live in their own
//! ordered collection, with per-type CRUD plus the composite workflows that
//! cross collections: placing an order priced from current food-item prices,
//! creating a food item together with its inventory record, and assigning a
//! driver to an order.
//!
//! ## Architecture
//!
//! The codebase is organized into four layers:
//!
//! ### 1. The Data ([`domain`])
//! Plain entity structs and request payloads. No behavior beyond
//! constructors; every record carries `created_date` and an optional
//! `updated_at`.
//!
//! ### 2. The Store ([`store`])
//! [`DeliveryStore`](store::DeliveryStore) owns all seven
//! [`Collection`](store::Collection)s plus the injected id and clock
//! services, and every operation is a synchronous method on it. The generic
//! collection supplies the shared "No X found" / "X not found" / removal
//! message plumbing once, for all entity types.
//!
//! ### 3. The Boundary ([`service`])
//! One [`DeliveryActor`](service::DeliveryActor) owns the store and
//! processes [`DeliveryRequest`](service::DeliveryRequest)s sequentially in
//! its own Tokio task. Because a request runs to completion before the next
//! begins, multi-collection writes are atomic to every observer — the reason
//! this layer exists. [`DeliveryClient`](service::DeliveryClient) is the
//! typed async handle.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`DeliverySystem`](lifecycle::DeliverySystem) spawns the actor and
//! handles graceful shutdown; [`setup_tracing`](lifecycle::setup_tracing)
//! installs the log subscriber.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the demo flow with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod domain;
pub mod lifecycle;
pub mod service;
pub mod store;
