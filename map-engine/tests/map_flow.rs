//! End-to-end flow over a small synthetic dataset: parse, resolve, fetch
//! statuses, paint, interact, overlay islands and fit the camera.

use map_engine::interaction::SelectionChange;
use map_engine::status::{StatusRecord, StatusRefresher};
use map_engine::types::{load_collection, CountryCode, CountryStatus, SMALL_ISLANDS};
use map_engine::{camera, islands, resolver, InteractionState, StylePolicy};

const DATASET: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "properties": { "ISO_A3": "POL", "ADMIN": "Poland" },
            "geometry": { "type": "Polygon", "coordinates": [
                [[14.0, 49.0], [24.0, 49.0], [24.0, 55.0], [14.0, 55.0], [14.0, 49.0]]
            ] }
        },
        {
            "properties": { "ISO_A3": "-99", "ADMIN": "France" },
            "geometry": { "type": "Polygon", "coordinates": [
                [[-5.0, 42.0], [8.0, 42.0], [8.0, 51.0], [-5.0, 51.0], [-5.0, 42.0]]
            ] }
        },
        {
            "properties": { "ADMIN": "Atlantis" },
            "geometry": { "type": "Polygon", "coordinates": [
                [[-40.0, 30.0], [-38.0, 30.0], [-38.0, 32.0], [-40.0, 32.0], [-40.0, 30.0]]
            ] }
        }
    ]
}"#;

fn record(code: &str, status: CountryStatus) -> StatusRecord {
    StatusRecord {
        country_code: code.to_string(),
        country_name: String::new(),
        status,
    }
}

fn code(raw: &str) -> CountryCode {
    CountryCode::parse(raw).expect("valid code")
}

#[test]
fn test_full_map_flow() {
    let features = load_collection(DATASET).expect("valid dataset");
    assert_eq!(features.len(), 3);

    // Resolution: direct code, sentinel falling back to name, unresolved.
    assert_eq!(resolver::resolve(&features[0]), Some(code("POL")));
    assert_eq!(resolver::resolve(&features[1]), Some(code("FRA")));
    assert_eq!(resolver::resolve(&features[2]), None);

    // Status refresh.
    let mut statuses = StatusRefresher::new();
    let token = statuses.begin_refresh().expect("nothing in flight");
    assert!(statuses.apply(
        token,
        &[
            record("POL", CountryStatus::Available),
            record("FRA", CountryStatus::ComingSoon),
        ],
    ));

    // Interaction: hover France, select Poland.
    let policy = StylePolicy::default();
    let mut interaction = InteractionState::new();
    interaction.pointer_enter(code("FRA"));
    assert_eq!(
        interaction.click(code("POL")),
        SelectionChange::Selected(code("POL"))
    );

    let pol_paint = policy.paint(
        statuses.get(&code("POL")),
        interaction.is_hovered(&code("POL")),
        interaction.is_selected(&code("POL")),
    );
    let fra_paint = policy.paint(
        statuses.get(&code("FRA")),
        interaction.is_hovered(&code("FRA")),
        interaction.is_selected(&code("FRA")),
    );
    // Selection dominates Poland's fill; France shows coming-soon hover.
    assert_eq!(pol_paint.fill_color, policy.palette().selected);
    assert_eq!(fra_paint.fill_color, policy.palette().coming_soon_hover);
    assert_eq!(fra_paint.stroke_weight, 1.5);

    // Camera flies to Poland's bounding box.
    let flight = camera::flight_to_country(&code("POL"), &features).expect("feature exists");
    assert_eq!(flight.center_lat, 52.0);
    assert_eq!(flight.center_lon, 19.0);

    // No polygon for the selected pseudo-country: silent no-op.
    assert!(camera::flight_to_country(&code("XKX"), &features).is_none());

    // Islands: nothing in the dataset covers them, so all markers render.
    assert_eq!(islands::missing_islands(&features).len(), SMALL_ISLANDS.len());

    // A failed refresh keeps the current table.
    let token = statuses.begin_refresh().expect("token");
    statuses.fail(token);
    assert_eq!(statuses.get(&code("POL")), CountryStatus::Available);
    assert_eq!(statuses.get(&code("DEU")), CountryStatus::None);

    // Toggling the selected country clears the selection.
    assert_eq!(interaction.click(code("POL")), SelectionChange::Cleared);
    assert!(interaction.selected().is_none());
}
