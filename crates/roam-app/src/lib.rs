//! `roam-app` — everything around the route core that a front end needs.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`state`]    | `Phase`, `ExplorerState` — the single state container          |
//! | [`location`] | `GeolocationProvider` trait, `LocationError`, stock providers  |
//! | [`verify`]   | `PhoneNumber`, phone and code checks for the simulated gate    |
//! | [`observer`] | `SessionObserver` trait, `Notice`, stock observers             |
//! | [`session`]  | `Session` — owns state, RNG, sampler and observer              |
//! | [`theme`]    | `Renderer` trait, `ExplorerTheme`, `MatrixTheme`               |
//! | [`error`]    | `AppError`, `AppResult<T>`                                     |
//!
//! # Flow
//!
//! ```text
//! LocationRequired ──request_location──▶ PhoneEntry ──request_code──▶ CodeSent
//!                                            ▲                           │
//!                                            └──────change_phone─────────┤
//!                                                                        │ verify_code
//!                                                      Ready ◀───────────┘
//!                                                        │ generate_route (repeatable)
//! ```
//!
//! The session is created when a view mounts and dropped when it unmounts;
//! there is no global state.  Presentation is a separate strategy object, so
//! every theme drives the same session logic.

pub mod error;
pub mod location;
pub mod observer;
pub mod session;
pub mod state;
pub mod theme;
pub mod verify;


pub use error::{AppError, AppResult};
pub use location::{FailingLocation, FixedLocation, GeolocationProvider, LocationError};
pub use observer::{NoopObserver, Notice, RecordingObserver, SessionObserver, Severity, TracingObserver};
pub use session::Session;
pub use state::{ExplorerState, Phase};
pub use theme::{ExplorerTheme, MatrixTheme, Renderer, matrix_rain, renderer_for};
pub use verify::{PhoneNumber, parse_code};
