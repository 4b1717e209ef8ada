//! Route summaries: the display-ready record for one generated route.

use roam_core::Coordinate;

/// Kilometres per degree, applied to both latitude and longitude.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Assumed travel time per kilometre (≈ 24 km/h).
pub const MINUTES_PER_KM: f64 = 2.5;

/// One generated route.  Built once per request and replaced wholesale by
/// the next one; never mutated.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSummary {
    pub origin:            Coordinate,
    pub destination:       Coordinate,
    /// Flat-plane estimate, see [`summarize`].
    pub distance_km:       f64,
    pub duration_minutes:  u32,
    pub destination_label: String,
}

impl RouteSummary {
    /// `"12.3 km"`.
    pub fn distance_text(&self) -> String {
        format!("{:.1} km", self.distance_km)
    }

    /// `"31 minutes"`.
    pub fn duration_text(&self) -> String {
        format!("{} minutes", self.duration_minutes)
    }

    /// True separation of the endpoints on the sphere.  Differs from
    /// `distance_km`, which is the flat-plane estimate shown to users.
    pub fn great_circle_km(&self) -> f64 {
        self.origin.great_circle_km(self.destination)
    }
}

/// Derive distance and duration for a route between two points.
///
/// ```text
/// distance_km      = sqrt(Δlat² + Δlng²) × 111
/// duration_minutes = round(distance_km × 2.5)
/// ```
///
/// The distance treats degrees as a Cartesian grid, independent of
/// latitude.  It is not the great-circle distance the sampler works with and
/// overstates east-west separation away from the equator.  Trips shorter
/// than 0.2 km round to zero minutes.
pub fn summarize(origin: Coordinate, destination: Coordinate, label: impl Into<String>) -> RouteSummary {
    let d_lat = destination.lat - origin.lat;
    let d_lng = destination.lng - origin.lng;
    let distance_km = (d_lat * d_lat + d_lng * d_lng).sqrt() * KM_PER_DEGREE;
    let duration_minutes = (distance_km * MINUTES_PER_KM).round() as u32;

    RouteSummary {
        origin,
        destination,
        distance_km,
        duration_minutes,
        destination_label: label.into(),
    }
}
