//! Marker overlay for small nations absent from the boundary dataset.

use std::collections::HashSet;

use crate::resolver;
use crate::types::{BoundaryFeature, CountryCode, SmallIsland, SMALL_ISLANDS};

/// Small-island entries whose code resolves from no feature in the dataset.
///
/// These get point markers; the rest already have polygons and need none.
/// If every entry is covered the result is empty and the overlay renders
/// nothing, so a richer future dataset retires the markers by itself.
pub fn missing_islands(features: &[BoundaryFeature]) -> Vec<&'static SmallIsland> {
    let present: HashSet<CountryCode> = features.iter().filter_map(resolver::resolve).collect();
    missing_from_codes(&present)
}

/// Same set difference, starting from already-resolved codes.
pub fn missing_from_codes(present: &HashSet<CountryCode>) -> Vec<&'static SmallIsland> {
    SMALL_ISLANDS
        .iter()
        .filter(|island| !present.contains(&island.country_code()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FeatureProperties, Geometry};

    fn feature_with_code(code: &str) -> BoundaryFeature {
        BoundaryFeature {
            properties: FeatureProperties {
                iso_a3: Some(code.to_string()),
                ..Default::default()
            },
            geometry: Geometry::Polygon {
                coordinates: vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
            },
        }
    }

    #[test]
    fn test_all_islands_missing_from_empty_dataset() {
        assert_eq!(missing_islands(&[]).len(), SMALL_ISLANDS.len());
    }

    #[test]
    fn test_difference_is_exactly_the_unresolved_subset() {
        let features = vec![feature_with_code("MLT"), feature_with_code("SGP")];
        let missing = missing_islands(&features);
        assert_eq!(missing.len(), SMALL_ISLANDS.len() - 2);
        assert!(missing.iter().all(|i| i.code != "MLT" && i.code != "SGP"));
    }

    #[test]
    fn test_empty_difference_renders_nothing() {
        let features: Vec<BoundaryFeature> = SMALL_ISLANDS
            .iter()
            .map(|island| feature_with_code(island.code))
            .collect();
        assert!(missing_islands(&features).is_empty());
    }

    #[test]
    fn test_unrelated_codes_do_not_count() {
        let features = vec![feature_with_code("POL")];
        assert_eq!(missing_islands(&features).len(), SMALL_ISLANDS.len());
    }
}
