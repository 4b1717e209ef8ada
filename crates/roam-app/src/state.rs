//! The session's state container.

use std::fmt;

use roam_core::Coordinate;
use roam_route::RouteSummary;

use crate::PhoneNumber;

/// Where the user is in the permission → verification → route flow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// No position yet; the user must grant location access.
    #[default]
    LocationRequired,
    /// Position known; waiting for a phone number.
    PhoneEntry,
    /// A code was "sent" to `phone`; waiting for it to be entered.
    CodeSent { phone: PhoneNumber },
    /// Verified; routes can be generated repeatedly.
    Ready,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::LocationRequired => "location-required",
            Phase::PhoneEntry       => "phone-entry",
            Phase::CodeSent { .. }  => "code-sent",
            Phase::Ready            => "ready",
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self, Phase::Ready)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a view needs to render the current screen.
///
/// Owned by a [`Session`][crate::Session] and only changed through its
/// operations.  `route` is replaced as a whole on every generation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExplorerState {
    pub phase:            Phase,
    pub location:         Option<Coordinate>,
    pub verified_phone:   Option<PhoneNumber>,
    pub route:            Option<RouteSummary>,
    /// Routes generated since the session started or was last reset.
    pub routes_generated: u32,
}
