//! Geographic coordinate type and spherical helpers.
//!
//! `Coordinate` uses `f64` latitude/longitude in decimal degrees.  Unlike a
//! simulation grid, route endpoints are shown to the user and pasted into
//! map links, so the full double precision is kept end to end.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

/// Mean Earth radius in kilometres, shared by the sampler and the
/// great-circle helpers.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A latitude/longitude pair in decimal degrees.
///
/// Construction through [`Coordinate::new`] is unchecked: projected
/// destinations near the antimeridian may carry a longitude outside
/// ±180°, and that value is kept as computed.  Use [`Coordinate::try_new`]
/// or [`Coordinate::validate`] at input boundaries.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Build a coordinate, rejecting non-finite or out-of-range components.
    pub fn try_new(lat: f64, lng: f64) -> CoreResult<Self> {
        Self::new(lat, lng).validate()
    }

    /// Return `self` if both components are finite and in range.
    pub fn validate(self) -> CoreResult<Self> {
        let lat_ok = self.lat.is_finite() && (-90.0..=90.0).contains(&self.lat);
        let lng_ok = self.lng.is_finite() && (-180.0..=180.0).contains(&self.lng);
        if lat_ok && lng_ok {
            Ok(self)
        } else {
            Err(CoreError::InvalidCoordinate { lat: self.lat, lng: self.lng })
        }
    }

    /// Haversine great-circle distance in kilometres.
    pub fn great_circle_km(self, other: Coordinate) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);

        // Clamp guards against `a` drifting a hair above 1.0 for antipodes.
        let c = 2.0 * a.sqrt().min(1.0).asin();
        EARTH_RADIUS_KM * c
    }

    /// Component-wise mean of the two points.  Not a geodesic midpoint;
    /// only used to centre an embedded map view.
    #[inline]
    pub fn midpoint(self, other: Coordinate) -> Coordinate {
        Coordinate::new((self.lat + other.lat) / 2.0, (self.lng + other.lng) / 2.0)
    }

    /// `lat,lng` with the shortest decimal form that round-trips, as map
    /// providers expect inside URL path segments.
    pub fn to_link_segment(self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// Parses `"lat,lng"` (whitespace around either part is ignored) and
/// validates the result.
impl FromStr for Coordinate {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| CoreError::Parse(format!("expected `lat,lng`, got {s:?}")))?;

        let parse = |part: &str, what: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| CoreError::Parse(format!("bad {what} {part:?}: {e}")))
        };

        Coordinate::try_new(parse(lat, "latitude")?, parse(lng, "longitude")?)
    }
}
