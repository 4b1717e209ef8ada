//! `roam-route` — the algorithmic core: where to go and how far it is.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`sampler`] | `destination_point`, `DestinationSampler` trait, `PolarSampler` |
//! | [`summary`] | `RouteSummary`, `summarize`                                  |
//! | [`label`]   | `destination_label` — display names for destinations        |
//! | [`plan`]    | `plan_route` — validated sample → label → summarize          |
//! | [`link`]    | `MapLink` — directions and embed URLs                         |
//! | [`error`]   | `RouteError`, `RouteResult<T>`                               |
//!
//! # Two distances
//!
//! The sampler places the destination by great-circle distance, but
//! [`summarize`] reports a flat-plane estimate (degrees × 111 km).  The two
//! figures disagree, increasingly so away from the equator.  Both formulas
//! are kept exactly as they are; callers that need the true separation
//! should use [`roam_core::Coordinate::great_circle_km`].
//!
//! Everything in this crate is pure: no I/O, no logging, no shared state.
//! The only source of randomness is the `SessionRng` passed in by the caller.

pub mod error;
pub mod label;
pub mod link;
pub mod plan;
pub mod sampler;
pub mod summary;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use label::destination_label;
pub use link::MapLink;
pub use plan::plan_route;
pub use sampler::{DestinationSampler, PolarSampler, destination_point};
pub use summary::{KM_PER_DEGREE, MINUTES_PER_KM, RouteSummary, summarize};
