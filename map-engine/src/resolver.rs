//! Two-tier country code resolution for boundary features.
//!
//! Providers disagree both on which property carries the ISO code and on how
//! countries are named, so resolution first walks an ordered chain of
//! ISO-code-like properties and only then falls back to name matching.

use crate::aliases;
use crate::types::{BoundaryFeature, CountryCode};

/// Resolves a boundary feature to its canonical country code.
///
/// Tries, in order, the `ISO_A3`, `ADM0_A3`, `SOV_A3`, `ISO3`, `WB_A3` and
/// `GU_A3` properties; the first value that is a valid three-character code
/// (not the `-99` sentinel, no leading `-`) wins and is uppercased. When no
/// property qualifies, the display name is looked up in the alias table.
///
/// # Returns
/// * `Option<CountryCode>` - `None` for a feature that matches neither tier;
///   such features keep the default land style and are excluded from
///   status-driven coloring.
pub fn resolve(feature: &BoundaryFeature) -> Option<CountryCode> {
    for candidate in feature.properties.iso_candidates().into_iter().flatten() {
        if let Some(code) = CountryCode::parse(candidate) {
            return Some(code);
        }
    }
    aliases::code_for_name(feature.properties.display_name())
}

/// Finds the boundary feature for a code, the way the camera needs it:
/// first by re-running property resolution, then by display-name matching
/// (equality or alias containment) for datasets that only carry names.
pub fn find_feature<'a>(
    code: &CountryCode,
    features: &'a [BoundaryFeature],
) -> Option<&'a BoundaryFeature> {
    features
        .iter()
        .find(|feature| resolve(feature).as_ref() == Some(code))
        .or_else(|| {
            features
                .iter()
                .find(|feature| aliases::name_matches(code, feature.properties.display_name()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FeatureProperties, Geometry};

    fn feature_with(properties: FeatureProperties) -> BoundaryFeature {
        BoundaryFeature {
            properties,
            geometry: Geometry::Polygon {
                coordinates: vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
            },
        }
    }

    #[test]
    fn test_each_iso_property_resolves() {
        let fields: [fn(&mut FeatureProperties, String); 6] = [
            |p, v| p.iso_a3 = Some(v),
            |p, v| p.adm0_a3 = Some(v),
            |p, v| p.sov_a3 = Some(v),
            |p, v| p.iso3 = Some(v),
            |p, v| p.wb_a3 = Some(v),
            |p, v| p.gu_a3 = Some(v),
        ];
        for set in fields {
            let mut properties = FeatureProperties::default();
            set(&mut properties, "nor".to_string());
            let code = resolve(&feature_with(properties)).expect("resolvable");
            assert_eq!(code.as_str(), "NOR");
        }
    }

    #[test]
    fn test_property_order_first_match_wins() {
        let properties = FeatureProperties {
            iso_a3: Some("FRA".into()),
            adm0_a3: Some("DEU".into()),
            ..Default::default()
        };
        let code = resolve(&feature_with(properties)).expect("resolvable");
        assert_eq!(code.as_str(), "FRA");
    }

    #[test]
    fn test_sentinel_falls_back_to_name() {
        let properties = FeatureProperties {
            iso_a3: Some("-99".into()),
            admin: Some("France".into()),
            ..Default::default()
        };
        let code = resolve(&feature_with(properties)).expect("resolvable");
        assert_eq!(code.as_str(), "FRA");
    }

    #[test]
    fn test_name_fallback_covers_historic_aliases() {
        for name in ["Czech Republic", "Czechia"] {
            let properties = FeatureProperties {
                admin: Some(name.into()),
                ..Default::default()
            };
            let code = resolve(&feature_with(properties)).expect("resolvable");
            assert_eq!(code.as_str(), "CZE", "for {name}");
        }
    }

    #[test]
    fn test_unresolvable_feature() {
        let properties = FeatureProperties {
            iso_a3: Some("-99".into()),
            admin: Some("Atlantis".into()),
            ..Default::default()
        };
        assert!(resolve(&feature_with(properties)).is_none());
        assert!(resolve(&feature_with(FeatureProperties::default())).is_none());
    }

    #[test]
    fn test_find_feature_by_code_then_by_name() {
        let by_code = feature_with(FeatureProperties {
            iso_a3: Some("POL".into()),
            ..Default::default()
        });
        // Not an exact alias, so only the containment fallback can find it.
        let by_name = feature_with(FeatureProperties {
            admin: Some("Micronesia (Federated States of)".into()),
            ..Default::default()
        });
        let features = vec![by_code, by_name];

        let pol = CountryCode::parse("POL").expect("code");
        assert!(find_feature(&pol, &features).is_some());

        let fsm = CountryCode::parse("FSM").expect("code");
        assert!(find_feature(&fsm, &features).is_some());

        let deu = CountryCode::parse("DEU").expect("code");
        assert!(find_feature(&deu, &features).is_none());
    }
}
