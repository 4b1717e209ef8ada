//! Route-subsystem error type.

use thiserror::Error;

use roam_core::CoreError;

/// Errors produced by `roam-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("embedded map view requires an API key")]
    MissingEmbedKey,
}

pub type RouteResult<T> = Result<T, RouteError>;
