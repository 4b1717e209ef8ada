//! Session observer trait for user notices and state-change hooks.

use roam_route::RouteSummary;

use crate::Phase;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A short user-facing message, e.g. shown as a toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title:       String,
    pub description: String,
    pub severity:    Severity,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), severity: Severity::Info }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), severity: Severity::Error }
    }
}

/// Callbacks invoked by [`Session`][crate::Session] as it moves through its
/// phases.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — toast printer
///
/// ```rust,ignore
/// struct Toasts;
///
/// impl SessionObserver for Toasts {
///     fn on_notice(&mut self, notice: &Notice) {
///         println!("[{}] {}", notice.title, notice.description);
///     }
/// }
/// ```
pub trait SessionObserver {
    /// Called for every message the user should see.
    fn on_notice(&mut self, _notice: &Notice) {}

    /// Called after the phase changed from `from` to `to`.
    fn on_phase_change(&mut self, _from: &Phase, _to: &Phase) {}

    /// Called with each newly generated route, before it replaces the
    /// previous one.
    fn on_route(&mut self, _route: &RouteSummary) {}
}

/// A [`SessionObserver`] that does nothing.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}

/// Forwards notices to `tracing`: info notices at `INFO`, errors at `WARN`.
pub struct TracingObserver;

impl SessionObserver for TracingObserver {
    fn on_notice(&mut self, notice: &Notice) {
        match notice.severity {
            Severity::Info => tracing::info!(title = %notice.title, "{}", notice.description),
            Severity::Error => tracing::warn!(title = %notice.title, "{}", notice.description),
        }
    }

    fn on_route(&mut self, route: &RouteSummary) {
        tracing::debug!(
            destination = %route.destination,
            great_circle_km = route.great_circle_km(),
            flat_km = route.distance_km,
            "route generated"
        );
    }
}

/// Keeps everything it observes; handy in tests and for replaying notices
/// into a UI after a batch of operations.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub notices: Vec<Notice>,
    pub phases:  Vec<(Phase, Phase)>,
    pub routes:  Vec<RouteSummary>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Titles of all recorded notices, oldest first.
    pub fn titles(&self) -> Vec<&str> {
        self.notices.iter().map(|n| n.title.as_str()).collect()
    }
}

impl SessionObserver for RecordingObserver {
    fn on_notice(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }

    fn on_phase_change(&mut self, from: &Phase, to: &Phase) {
        self.phases.push((from.clone(), to.clone()));
    }

    fn on_route(&mut self, route: &RouteSummary) {
        self.routes.push(route.clone());
    }
}
