//! `roam-core` — foundational types for the `roam` route explorer.
//!
//! This crate is a dependency of every other `roam-*` crate.  It has no
//! `roam-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`geo`]    | `Coordinate`, validation, great-circle distance          |
//! | [`rng`]    | `SessionRng` — the per-session random source             |
//! | [`config`] | `ExplorerConfig`, `LocateOptions`, `ThemeKind`, `LabelStyle` |
//! | [`error`]  | `CoreError`, `CoreResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load `ExplorerConfig` from JSON.               |

pub mod config;
pub mod error;
pub mod geo;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ExplorerConfig, LabelStyle, LocateOptions, ThemeKind};
pub use error::{CoreError, CoreResult};
pub use geo::{Coordinate, EARTH_RADIUS_KM};
pub use rng::SessionRng;
