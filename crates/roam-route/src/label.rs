//! Display names for generated destinations.

use roam_core::{Coordinate, LabelStyle, SessionRng};

/// Name a destination according to `style`.
///
/// `Coordinates` is deterministic; `Codename` draws one `u32` from `rng`.
pub fn destination_label(style: LabelStyle, destination: Coordinate, rng: &mut SessionRng) -> String {
    match style {
        LabelStyle::Coordinates => format!(
            "Random Destination ({:.4}, {:.4})",
            destination.lat, destination.lng
        ),
        LabelStyle::Codename => format!("Target {:08X}", rng.random::<u32>()),
    }
}
