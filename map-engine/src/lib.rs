//! Core of the interactive country map: code resolution, the per-country
//! status table, style computation, hover/selection state, the small-island
//! marker overlay and viewport fitting. Rendering-free so everything here is
//! unit-testable; the `graphical-interface` crate does the drawing.

pub mod aliases;
pub mod camera;
pub mod errors;
pub mod interaction;
pub mod islands;
pub mod resolver;
pub mod status;
pub mod style;
pub mod types;

pub use camera::CameraFlight;
pub use errors::EngineError;
pub use interaction::{InteractionState, SelectionChange};
pub use status::{RefreshToken, StatusRecord, StatusRefresher, StatusSource, StatusTable};
pub use style::{Palette, Rgb, StylePaint, StylePolicy};
pub use types::{BoundaryFeature, CountryCode, CountryStatus, MapBounds, SmallIsland};
