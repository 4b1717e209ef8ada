//! Destination sampling trait and the default polar sampler.
//!
//! # Pluggability
//!
//! The application samples through the [`DestinationSampler`] trait, so a
//! different distribution (area-uniform, road-snapped, ...) can be dropped in
//! without touching session logic.  The default [`PolarSampler`] reproduces
//! the original behaviour exactly.
//!
//! # Units
//!
//! Distances are kilometres, bearings radians clockwise from north, and
//! coordinates decimal degrees.

use std::f64::consts::TAU;

use roam_core::{Coordinate, EARTH_RADIUS_KM, SessionRng};

// ── Closed-form projection ────────────────────────────────────────────────────

/// The point `distance_km` away from `origin` along the great circle that
/// leaves it at `bearing_rad`.
///
/// Total over finite inputs.  The longitude is returned as computed and is
/// not wrapped into ±180°; near the antimeridian it may exceed that range.
/// Rounding can push the sine of the new latitude just past ±1 when the
/// path ends on a pole, so it is clamped before `asin`.
pub fn destination_point(origin: Coordinate, distance_km: f64, bearing_rad: f64) -> Coordinate {
    let angular = distance_km / EARTH_RADIUS_KM;
    let lat1 = origin.lat.to_radians();
    let lng1 = origin.lng.to_radians();

    let sin_lat2 = lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing_rad.cos();
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();
    let lng2 = lng1
        + f64::atan2(
            bearing_rad.sin() * angular.sin() * lat1.cos(),
            angular.cos() - lat1.sin() * lat2.sin(),
        );

    Coordinate::new(lat2.to_degrees(), lng2.to_degrees())
}

// ── DestinationSampler trait ──────────────────────────────────────────────────

/// Pluggable destination generator.
///
/// # Contract
///
/// For a valid `origin` and `max_distance_km >= 0`, the returned point lies
/// within `max_distance_km` great-circle distance of `origin`.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`; all per-call randomness comes from
/// the caller's `rng`, so one sampler can serve many threads.
pub trait DestinationSampler: Send + Sync {
    fn sample(&self, origin: Coordinate, max_distance_km: f64, rng: &mut SessionRng) -> Coordinate;
}

// ── PolarSampler ──────────────────────────────────────────────────────────────

/// Draws distance and bearing independently and uniformly:
///
/// | Draw     | Distribution            |
/// |----------|-------------------------|
/// | distance | `U[0, max_distance_km)` |
/// | bearing  | `U[0, 2π)`              |
///
/// This is uniform in polar coordinates, not over area, so destinations
/// cluster towards the origin.  The distribution is kept as is.
///
/// A radius of zero always returns the origin.
#[derive(Copy, Clone, Debug, Default)]
pub struct PolarSampler;

impl DestinationSampler for PolarSampler {
    fn sample(&self, origin: Coordinate, max_distance_km: f64, rng: &mut SessionRng) -> Coordinate {
        let distance_km = rng.unit() * max_distance_km;
        let bearing_rad = rng.unit() * TAU;
        destination_point(origin, distance_km, bearing_rad)
    }
}
