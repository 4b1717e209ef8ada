//! The explorer session: one user's run through the flow.

use roam_core::{Coordinate, ExplorerConfig, SessionRng};
use roam_route::{DestinationSampler, MapLink, PolarSampler, RouteSummary, plan_route};

use crate::{
    AppError, AppResult, ExplorerState, GeolocationProvider, NoopObserver, Notice, Phase,
    PhoneNumber, SessionObserver, parse_code,
};

/// Owns the state container plus everything needed to advance it.
///
/// `S` is the destination sampler ([`PolarSampler`] by default) and `O` the
/// observer that receives notices ([`NoopObserver`] by default).
///
/// # Example
///
/// ```rust,ignore
/// let mut session = Session::new(ExplorerConfig::default(), PolarSampler, TracingObserver)?;
/// session.request_location(&mut FixedLocation(Coordinate::new(37.7749, -122.4194)))?;
/// session.request_code("+1 555 0100")?;
/// session.verify_code("123456")?;
/// let route = session.generate_route()?;
/// println!("{} ({})", route.destination_label, route.distance_text());
/// ```
pub struct Session<S: DestinationSampler = PolarSampler, O: SessionObserver = NoopObserver> {
    config:   ExplorerConfig,
    state:    ExplorerState,
    rng:      SessionRng,
    sampler:  S,
    observer: O,
    link:     MapLink,
}

impl Session {
    /// A session with the default sampler and no observer.
    pub fn with_defaults(config: ExplorerConfig) -> AppResult<Self> {
        Session::new(config, PolarSampler, NoopObserver)
    }
}

impl<S: DestinationSampler, O: SessionObserver> Session<S, O> {
    /// Validate `config` and start a fresh session.
    ///
    /// The RNG is seeded from `config.seed` when set, otherwise from OS
    /// entropy.
    pub fn new(config: ExplorerConfig, sampler: S, observer: O) -> AppResult<Self> {
        config.validate()?;
        let rng = SessionRng::from_seed_opt(config.seed);
        let link = MapLink::from_config(&config);
        tracing::debug!(theme = %config.theme, max_km = config.max_distance_km, "session created");
        Ok(Self {
            config,
            state: ExplorerState::default(),
            rng,
            sampler,
            observer,
            link,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn state(&self) -> &ExplorerState {
        &self.state
    }

    pub fn phase(&self) -> &Phase {
        &self.state.phase
    }

    pub fn route(&self) -> Option<&RouteSummary> {
        self.state.route.as_ref()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Derive an independent RNG stream, e.g. for a renderer.
    pub fn child_rng(&mut self, offset: u64) -> SessionRng {
        self.rng.child(offset)
    }

    // ── Operations ────────────────────────────────────────────────────────

    /// Ask `provider` for the current position and move on to verification.
    ///
    /// Provider failures and out-of-range fixes are reported as notices and
    /// returned; the session stays in `LocationRequired` so the request can
    /// be retried.
    pub fn request_location<P>(&mut self, provider: &mut P) -> AppResult<Coordinate>
    where
        P: GeolocationProvider + ?Sized,
    {
        self.expect_phase("request a location", |p| matches!(p, Phase::LocationRequired))?;

        let located = provider
            .locate(&self.config.locate)
            .map_err(AppError::from)
            .and_then(|c| c.validate().map_err(AppError::from));

        let location = match located {
            Ok(c) => c,
            Err(err) => {
                tracing::warn!(error = %err, "geolocation failed");
                let (title, description) = match &err {
                    AppError::Location(e) => (e.title(), e.to_string()),
                    _ => ("Location Error", "Failed to get your location.".to_string()),
                };
                self.notify(Notice::error(title, description));
                return Err(err);
            }
        };

        tracing::info!(%location, "location received");
        self.state.location = Some(location);
        self.notify(Notice::info("Location Detected!", "Ready to verify your phone number."));
        self.set_phase(Phase::PhoneEntry);
        Ok(location)
    }

    /// Accept a phone number and pretend to send it a code.
    pub fn request_code(&mut self, phone: &str) -> AppResult<PhoneNumber> {
        self.expect_phase("request a code", |p| matches!(p, Phase::PhoneEntry))?;

        let phone = match PhoneNumber::parse(phone) {
            Ok(p) => p,
            Err(err) => {
                tracing::warn!(input = phone, "rejected phone number");
                self.notify(Notice::error("Invalid Phone Number", "Please enter a valid phone number."));
                return Err(err);
            }
        };

        self.notify(Notice::info("Verification Code Sent", format!("Code sent to {phone}")));
        self.set_phase(Phase::CodeSent { phone: phone.clone() });
        Ok(phone)
    }

    /// Go back and enter a different phone number.
    pub fn change_phone(&mut self) -> AppResult<()> {
        self.expect_phase("change the phone number", |p| matches!(p, Phase::CodeSent { .. }))?;
        self.set_phase(Phase::PhoneEntry);
        Ok(())
    }

    /// Check the entered code.  Any six digits pass.
    pub fn verify_code(&mut self, code: &str) -> AppResult<()> {
        let Phase::CodeSent { phone } = &self.state.phase else {
            return Err(self.wrong_phase("verify a code"));
        };
        let phone = phone.clone();

        if parse_code(code).is_none() {
            tracing::warn!("rejected verification code");
            self.notify(Notice::error("Invalid Code", "Please enter the 6-digit verification code."));
            return Err(AppError::InvalidCode);
        }

        tracing::info!(%phone, "phone verified");
        self.state.verified_phone = Some(phone);
        self.notify(Notice::info("Phone Verified Successfully!", "You can now generate routes."));
        self.set_phase(Phase::Ready);
        Ok(())
    }

    /// Sample a new destination around the current location and replace the
    /// current route with it.
    pub fn generate_route(&mut self) -> AppResult<&RouteSummary> {
        let Some(origin) = self.state.location else {
            self.notify(Notice::error(
                "Location Required",
                "Please allow location access to generate a route.",
            ));
            return Err(AppError::LocationRequired);
        };
        if !self.state.phase.is_ready() {
            return Err(AppError::NotVerified);
        }

        let planned = plan_route(
            &self.sampler,
            origin,
            self.config.max_distance_km,
            self.config.label,
            &mut self.rng,
        );
        let route = match planned {
            Ok(r) => r,
            Err(err) => {
                tracing::warn!(error = %err, "route generation failed");
                self.notify(Notice::error("Error", "Failed to generate route. Please try again."));
                return Err(err.into());
            }
        };

        tracing::info!(
            destination = %route.destination,
            distance = %route.distance_text(),
            duration = %route.duration_text(),
            "new route"
        );
        self.observer.on_route(&route);
        self.notify(Notice::info("New Route Generated!", "Your adventure route is ready to explore."));
        self.state.routes_generated += 1;
        let route: &RouteSummary = self.state.route.insert(route);
        Ok(route)
    }

    /// Directions link for the current route, if any.
    pub fn directions_url(&self) -> Option<String> {
        self.state.route.as_ref().map(|r| self.link.directions_url(r))
    }

    /// Embeddable map view of the current route.
    pub fn embed_url(&self) -> AppResult<String> {
        let route = self.state.route.as_ref().ok_or(AppError::NoRoute)?;
        Ok(self.link.embed_url(route)?)
    }

    /// Discard all progress and start over, keeping config, RNG and observer.
    pub fn reset(&mut self) {
        tracing::debug!("session reset");
        let from = std::mem::take(&mut self.state).phase;
        if from != self.state.phase {
            self.observer.on_phase_change(&from, &self.state.phase);
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn notify(&mut self, notice: Notice) {
        self.observer.on_notice(&notice);
    }

    fn set_phase(&mut self, to: Phase) {
        let from = std::mem::replace(&mut self.state.phase, to);
        tracing::info!(from = %from, to = %self.state.phase, "phase change");
        self.observer.on_phase_change(&from, &self.state.phase);
    }

    fn wrong_phase(&self, action: &'static str) -> AppError {
        AppError::WrongPhase { action, phase: self.state.phase.clone() }
    }

    fn expect_phase(&self, action: &'static str, ok: impl Fn(&Phase) -> bool) -> AppResult<()> {
        if ok(&self.state.phase) {
            Ok(())
        } else {
            Err(self.wrong_phase(action))
        }
    }
}
