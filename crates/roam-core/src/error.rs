//! Core error type.
//!
//! Downstream crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, so validation failures surface unchanged.

use thiserror::Error;

/// The top-level error type for `roam-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid coordinate ({lat}, {lng}): latitude must be in [-90, 90] and longitude in [-180, 180]")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("invalid radius {0} km: must be finite and non-negative")]
    InvalidRadius(f64),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `roam-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
