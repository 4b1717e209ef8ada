//! The geolocation seam.
//!
//! Where the origin comes from (a browser API, a GPS daemon, a command-line
//! flag) is outside the session's concern.  It only needs a resolved
//! coordinate or one of the failures below.

use roam_core::{Coordinate, LocateOptions};
use thiserror::Error;

/// Why a position could not be obtained.  The messages are shown to users.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Your browser doesn't support geolocation services.")]
    Unsupported,

    #[error("Location access was denied. Please enable location permissions and try again.")]
    PermissionDenied,

    #[error("Location information is unavailable.")]
    PositionUnavailable,

    #[error("Location request timed out.")]
    Timeout,
}

impl LocationError {
    /// Notice title: a missing capability is reported apart from a failed
    /// request.
    pub fn title(&self) -> &'static str {
        match self {
            LocationError::Unsupported => "Geolocation Not Supported",
            _ => "Location Error",
        }
    }
}

/// Source of the user's current position.
///
/// `locate` may block for up to `options.timeout_ms`; implementations that
/// cannot honour the timeout should return [`LocationError::Timeout`] once
/// it has passed rather than blocking indefinitely.
pub trait GeolocationProvider {
    fn locate(&mut self, options: &LocateOptions) -> Result<Coordinate, LocationError>;
}

/// Always resolves to the same coordinate.
#[derive(Copy, Clone, Debug)]
pub struct FixedLocation(pub Coordinate);

impl GeolocationProvider for FixedLocation {
    fn locate(&mut self, _options: &LocateOptions) -> Result<Coordinate, LocationError> {
        Ok(self.0)
    }
}

/// Always fails with the given error.
#[derive(Copy, Clone, Debug)]
pub struct FailingLocation(pub LocationError);

impl GeolocationProvider for FailingLocation {
    fn locate(&mut self, _options: &LocateOptions) -> Result<Coordinate, LocationError> {
        Err(self.0)
    }
}
