//! Viewport fitting for the selected country.

use crate::resolver;
use crate::types::{BoundaryFeature, CountryCode, MapBounds};

/// Fraction of the bounding box added on each side before fitting.
pub const FIT_PADDING: f64 = 0.15;
/// Zoom ceiling so a tiny country does not fill the whole screen.
pub const MAX_FIT_ZOOM: f64 = 6.0;
pub const MIN_FIT_ZOOM: f64 = 1.0;
/// Length of the viewport animation.
pub const FLIGHT_DURATION_MS: u64 = 600;

/// A viewport move the rendering layer should animate to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFlight {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: f64,
    pub duration_ms: u64,
}

/// Computes the flight that frames the given bounds.
///
/// Zoom follows the usual slippy-map rule of the world spanning 360° of
/// longitude at level zero; latitude uses the same linear estimate, which is
/// close enough for framing a single country.
pub fn fit_bounds(bounds: &MapBounds, padding: f64, max_zoom: f64) -> CameraFlight {
    // Degenerate spans (a point marker's bounds) would otherwise zoom to
    // infinity before clamping.
    let lon_span = (bounds.lon_span() * (1.0 + 2.0 * padding)).max(0.1);
    let lat_span = (bounds.lat_span() * (1.0 + 2.0 * padding)).max(0.1);

    let zoom_for_lon = (360.0 / lon_span).log2();
    let zoom_for_lat = (180.0 / lat_span).log2();
    // A ceiling below the floor would make `clamp` panic.
    let zoom_ceiling = max_zoom.max(MIN_FIT_ZOOM);
    let zoom = zoom_for_lon.min(zoom_for_lat).clamp(MIN_FIT_ZOOM, zoom_ceiling);

    let (center_lat, center_lon) = bounds.center();
    CameraFlight {
        center_lat,
        center_lon,
        zoom,
        duration_ms: FLIGHT_DURATION_MS,
    }
}

/// Flight to the feature matching the selected code.
///
/// The feature is located with the same resolution used for display (code
/// first, display-name matching second). A selection with no matching
/// feature yields `None` and the viewport stays where it is; this is a
/// silent no-op, not an error.
pub fn flight_to_country(
    code: &CountryCode,
    features: &[BoundaryFeature],
) -> Option<CameraFlight> {
    let feature = resolver::find_feature(code, features)?;
    let bounds = feature.bounding_box()?;
    Some(fit_bounds(&bounds, FIT_PADDING, MAX_FIT_ZOOM))
}
