//! explorer — terminal front end for the roam route explorer.
//!
//! Walks one session through the whole flow: location → phone
//! verification → one or more random routes, each printed with the selected
//! theme and a directions link.  Nothing is sent anywhere; the location
//! comes from `--origin` and verification accepts any six-digit code.
//!
//! ```text
//! explorer --origin 37.7749,-122.4194 --routes 3 --theme matrix --seed 7
//! explorer --origin=-33.8688,151.2093 --json
//! explorer --deny permission-denied
//! ```

mod console;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roam_app::{FailingLocation, FixedLocation, GeolocationProvider, LocationError, Session};
use roam_core::{Coordinate, ExplorerConfig, LabelStyle, ThemeKind};
use roam_route::PolarSampler;

use console::ConsoleObserver;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Used when no `--origin` is given.
const DEFAULT_ORIGIN: Coordinate = Coordinate { lat: 37.7749, lng: -122.4194 };

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ThemeArg {
    Explorer,
    Matrix,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum LabelArg {
    Coords,
    Codename,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum DenyArg {
    Unsupported,
    PermissionDenied,
    PositionUnavailable,
    Timeout,
}

impl From<DenyArg> for LocationError {
    fn from(arg: DenyArg) -> Self {
        match arg {
            DenyArg::Unsupported         => LocationError::Unsupported,
            DenyArg::PermissionDenied    => LocationError::PermissionDenied,
            DenyArg::PositionUnavailable => LocationError::PositionUnavailable,
            DenyArg::Timeout             => LocationError::Timeout,
        }
    }
}

/// Generate random nearby routes from a starting point.
#[derive(Parser, Debug)]
#[command(name = "explorer", version)]
struct Args {
    /// Starting point as `lat,lng` (use `--origin=-33.8,151.2` for negative latitudes).
    #[arg(long)]
    origin: Option<Coordinate>,

    /// Simulate a failed location request instead of using `--origin`.
    #[arg(long, value_enum, conflicts_with = "origin")]
    deny: Option<DenyArg>,

    /// Phone number for the verification step.
    #[arg(long, default_value = "+15550100")]
    phone: String,

    /// Verification code; any six digits pass.
    #[arg(long, default_value = "000000")]
    code: String,

    /// How many routes to generate.
    #[arg(short = 'n', long, default_value_t = 1)]
    routes: u32,

    /// JSON config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    seed: Option<u64>,

    /// Maximum great-circle distance to a destination, in km.
    #[arg(long)]
    max_km: Option<f64>,

    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    #[arg(long, value_enum)]
    label: Option<LabelArg>,

    /// Print routes as JSON lines on stdout instead of themed panels.
    #[arg(long)]
    json: bool,
}

impl Args {
    fn resolve_config(&self) -> Result<ExplorerConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ExplorerConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(max_km) = self.max_km {
            config.max_distance_km = max_km;
        }
        if let Some(theme) = self.theme {
            config.theme = match theme {
                ThemeArg::Explorer => ThemeKind::Explorer,
                ThemeArg::Matrix   => ThemeKind::Matrix,
            };
        }
        if let Some(label) = self.label {
            config.label = match label {
                LabelArg::Coords   => LabelStyle::Coordinates,
                LabelArg::Codename => LabelStyle::Codename,
            };
        }
        Ok(config)
    }

    fn provider(&self) -> Box<dyn GeolocationProvider> {
        match (self.deny, self.origin) {
            (Some(reason), _) => Box::new(FailingLocation(reason.into())),
            (None, Some(origin)) => Box::new(FixedLocation(origin)),
            (None, None) => {
                tracing::info!(origin = %DEFAULT_ORIGIN, "no --origin given, using default");
                Box::new(FixedLocation(DEFAULT_ORIGIN))
            }
        }
    }
}

fn load_config(path: &Path) -> Result<ExplorerConfig> {
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "explorer=info,roam_app=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = args.resolve_config()?;

    let observer = ConsoleObserver::new(config.theme, !args.json);
    let mut session = Session::new(config, PolarSampler, observer)?;

    // Decorations draw from their own stream so routes stay reproducible
    // regardless of theme.
    let mut decor_rng = session.child_rng(1);
    session.observer().print(|r| r.banner(&mut decor_rng));

    // 1. Location.
    session.observer().print(|r| r.phase(session.state()));
    let mut provider = args.provider();
    session.request_location(provider.as_mut())?;

    // 2. Verification.
    session.observer().print(|r| r.phase(session.state()));
    session.request_code(&args.phone)?;
    session.observer().print(|r| r.phase(session.state()));
    session.verify_code(&args.code)?;
    session.observer().print(|r| r.phase(session.state()));

    // 3. Routes.
    for _ in 0..args.routes {
        let route = session.generate_route()?.clone();
        let url = session.directions_url().unwrap_or_default();

        if args.json {
            let line = serde_json::json!({ "route": route, "directions_url": url });
            println!("{line}");
        } else {
            session.observer().print(|r| r.route(&route, &url));
        }
    }

    tracing::info!(routes = session.state().routes_generated, "done");
    Ok(())
}
