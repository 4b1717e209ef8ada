use roam_core::CoreError;
use roam_route::RouteError;
use thiserror::Error;

use crate::{LocationError, Phase};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("location unavailable: {0}")]
    Location(#[from] LocationError),

    #[error("invalid phone number {0:?}")]
    InvalidPhone(String),

    #[error("verification code must be 6 digits")]
    InvalidCode,

    #[error("cannot {action} while in phase {phase}")]
    WrongPhase {
        action: &'static str,
        phase:  Phase,
    },

    #[error("a location is required before generating a route")]
    LocationRequired,

    #[error("phone verification is required before generating a route")]
    NotVerified,

    #[error("no route has been generated yet")]
    NoRoute,
}

pub type AppResult<T> = Result<T, AppError>;
