//! Error type seen by callers of [`DeliveryClient`](crate::service::DeliveryClient).

use thiserror::Error;

use crate::store::StoreError;

/// Errors surfaced by the service boundary.
///
/// Store failures pass through transparently with their messages intact;
/// the channel variants only occur when the actor task is gone.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The actor's request channel is closed (system shut down).
    #[error("Actor closed")]
    ActorClosed,

    /// The actor dropped the response channel without answering.
    #[error("Actor dropped response channel")]
    ActorDropped,
}
