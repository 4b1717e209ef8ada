//! The validated route-generation pipeline.

use roam_core::{Coordinate, CoreError, LabelStyle, SessionRng};

use crate::{DestinationSampler, RouteResult, RouteSummary, destination_label, summarize};

/// Sample a destination around `origin`, label it, and summarize the route.
///
/// Unlike the pure building blocks, this rejects inputs that would otherwise
/// turn into NaN output:
///
/// - `origin` must be a valid coordinate ([`CoreError::InvalidCoordinate`]);
/// - `max_distance_km` must be finite and `>= 0` ([`CoreError::InvalidRadius`]).
pub fn plan_route<S: DestinationSampler + ?Sized>(
    sampler:         &S,
    origin:          Coordinate,
    max_distance_km: f64,
    label:           LabelStyle,
    rng:             &mut SessionRng,
) -> RouteResult<RouteSummary> {
    let origin = origin.validate()?;
    if !max_distance_km.is_finite() || max_distance_km < 0.0 {
        return Err(CoreError::InvalidRadius(max_distance_km).into());
    }

    let destination = sampler.sample(origin, max_distance_km, rng);
    let label = destination_label(label, destination, rng);
    Ok(summarize(origin, destination, label))
}
