//! Observability setup.
//!
//! Structured logging with the `tracing` crate. The store logs every
//! creation, update, and deletion with the entity label, id, and collection
//! size; not-found and validation outcomes log at `warn`, and the client
//! logs request submission at `debug`.
//!
//! ```bash
//! # Compact operation log
//! RUST_LOG=info cargo run
//!
//! # Include request submission and payload fields
//! RUST_LOG=debug cargo run
//! ```

/// Initializes the global subscriber: compact format, `RUST_LOG` filter,
/// module paths hidden (the `entity` field identifies the collection).
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
