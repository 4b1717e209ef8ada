//! Rendering strategies.
//!
//! A theme turns session state into text.  It never touches the session, so
//! switching themes cannot change behaviour.  Two skins ship:
//!
//! | Theme            | Look                                               |
//! |------------------|----------------------------------------------------|
//! | [`ExplorerTheme`]| Friendly cards, headings in `== .. ==`              |
//! | [`MatrixTheme`]  | Terminal "intrusion" skin with a glyph rain banner |

use std::fmt::Write as _;

use roam_core::{SessionRng, ThemeKind};
use roam_route::RouteSummary;

use crate::{ExplorerState, Notice, Phase, Severity};

/// Pluggable presentation.
pub trait Renderer {
    fn kind(&self) -> ThemeKind;

    /// Page header.  `rng` is only used by themes with random decoration.
    fn banner(&self, rng: &mut SessionRng) -> String;

    /// The panel for the current phase.
    fn phase(&self, state: &ExplorerState) -> String;

    /// The route details panel, with the provider link.
    fn route(&self, route: &RouteSummary, directions_url: &str) -> String;

    fn notice(&self, notice: &Notice) -> String;
}

/// The renderer configured by `kind`.
pub fn renderer_for(kind: ThemeKind) -> Box<dyn Renderer> {
    match kind {
        ThemeKind::Explorer => Box::new(ExplorerTheme),
        ThemeKind::Matrix   => Box::new(MatrixTheme::default()),
    }
}

// ── ExplorerTheme ─────────────────────────────────────────────────────────────

pub struct ExplorerTheme;

impl Renderer for ExplorerTheme {
    fn kind(&self) -> ThemeKind {
        ThemeKind::Explorer
    }

    fn banner(&self, _rng: &mut SessionRng) -> String {
        "== Global Route Explorer ==\n\
         Discover new paths around you! Generate a random route and set off.\n"
            .to_string()
    }

    fn phase(&self, state: &ExplorerState) -> String {
        match &state.phase {
            Phase::LocationRequired => "== Enable Location Access ==\n\
                 We need your current location to generate exploration routes nearby.\n\
                 Your location is only used to generate routes and is not stored or shared.\n"
                .to_string(),
            Phase::PhoneEntry => "== Phone Verification Required ==\n\
                 Please verify your phone number to access route generation.\n"
                .to_string(),
            Phase::CodeSent { phone } => format!(
                "== Phone Verification Required ==\n\
                 Enter the 6-digit verification code sent to {phone}.\n"
            ),
            Phase::Ready => match state.location {
                Some(loc) => format!(
                    "== Location Confirmed ==\nCurrent Location: {:.4}, {:.4}\n",
                    loc.lat, loc.lng
                ),
                None => "== Location Confirmed ==\n".to_string(),
            },
        }
    }

    fn route(&self, route: &RouteSummary, directions_url: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "== Route Details ==");
        let _ = writeln!(out, "From: Your Current Location");
        let _ = writeln!(out, "      {}", route.origin);
        let _ = writeln!(out, "To:   {}", route.destination_label);
        let _ = writeln!(out, "      {}", route.destination);
        let _ = writeln!(out, "Total Distance:       {}", route.distance_text());
        let _ = writeln!(out, "Estimated Drive Time: {}", route.duration_text());
        let _ = writeln!(out, "Open in maps: {directions_url}");
        out
    }

    fn notice(&self, notice: &Notice) -> String {
        match notice.severity {
            Severity::Info  => format!("* {}: {}", notice.title, notice.description),
            Severity::Error => format!("! {}: {}", notice.title, notice.description),
        }
    }
}

// ── MatrixTheme ───────────────────────────────────────────────────────────────

/// Glyphs the rain is drawn from.
const RAIN_GLYPHS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz\
                           !@#$%^&*(){}[]|\\:;\"'<>?,./+=_-~`\
                           ハッキングアクセス許可暗号化プロトコル起動システム侵入中データ";

pub struct MatrixTheme {
    /// Number of rain columns in the banner.
    pub columns: usize,
}

impl Default for MatrixTheme {
    fn default() -> Self {
        Self { columns: 25 }
    }
}

/// `columns` random glyph columns of 10 to 29 glyphs each, laid out as rows
/// of text (short columns leave blanks at the bottom).
pub fn matrix_rain(columns: usize, rng: &mut SessionRng) -> String {
    let glyphs: Vec<char> = RAIN_GLYPHS.chars().collect();
    let cols: Vec<Vec<char>> = (0..columns)
        .map(|_| {
            let len = rng.gen_range(10..30);
            (0..len).map(|_| rng.choose(&glyphs).copied().unwrap_or('0')).collect()
        })
        .collect();

    let height = cols.iter().map(Vec::len).max().unwrap_or(0);
    let mut out = String::new();
    for row in 0..height {
        let line: String = cols
            .iter()
            .map(|c| c.get(row).copied().unwrap_or(' '))
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

impl Renderer for MatrixTheme {
    fn kind(&self) -> ThemeKind {
        ThemeKind::Matrix
    }

    fn banner(&self, rng: &mut SessionRng) -> String {
        let mut out = matrix_rain(self.columns, rng);
        out.push_str(">> GLOBAL ROUTE EXPLORER :: SYSTEM ONLINE\n");
        out
    }

    fn phase(&self, state: &ExplorerState) -> String {
        match &state.phase {
            Phase::LocationRequired => ">> AWAITING GPS LOCK. GRANT LOCATION ACCESS.\n".to_string(),
            Phase::PhoneEntry => ">> IDENTITY CHECK. TRANSMIT PHONE NUMBER.\n".to_string(),
            Phase::CodeSent { phone } => {
                format!(">> CHALLENGE SENT TO {phone}. ENTER 6-DIGIT ACCESS CODE.\n")
            }
            Phase::Ready => match state.location {
                Some(loc) => format!(">> ACCESS GRANTED. POSITION {:.4}, {:.4}\n", loc.lat, loc.lng),
                None => ">> ACCESS GRANTED.\n".to_string(),
            },
        }
    }

    fn route(&self, route: &RouteSummary, directions_url: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "[TARGET ACQUIRED] {}", route.destination_label);
        let _ = writeln!(out, "  ORIGIN   {}", route.origin);
        let _ = writeln!(out, "  TARGET   {}", route.destination);
        let _ = writeln!(out, "  RANGE    {}", route.distance_text());
        let _ = writeln!(out, "  ETA      {}", route.duration_text());
        let _ = writeln!(out, "  UPLINK   {directions_url}");
        out
    }

    fn notice(&self, notice: &Notice) -> String {
        let tag = match notice.severity {
            Severity::Info  => "OK",
            Severity::Error => "ERR",
        };
        format!(
            "[{tag}] {} :: {}",
            notice.title.to_uppercase(),
            notice.description
        )
    }
}
