use map_engine::status::StatusRefresher;
use map_engine::types::{BoundaryFeature, CountryCode, CountryStatus, SmallIsland};
use map_engine::{islands, resolver};

/// Everything the map draws from: the boundary features with their codes
/// resolved once at load, the island markers the dataset lacks polygons
/// for, and the refreshable status table.
pub struct ViewState {
    features: Vec<BoundaryFeature>,
    codes: Vec<Option<CountryCode>>,
    islands: Vec<&'static SmallIsland>,
    pub statuses: StatusRefresher,
}

impl ViewState {
    pub fn new(features: Vec<BoundaryFeature>) -> Self {
        // Resolution is pure in the feature properties, so doing it once at
        // mount is equivalent to re-running it per event.
        let codes = features.iter().map(resolver::resolve).collect();
        let islands = islands::missing_islands(&features);
        Self {
            features,
            codes,
            islands,
            statuses: StatusRefresher::new(),
        }
    }

    pub fn features(&self) -> &[BoundaryFeature] {
        &self.features
    }

    pub fn code_of(&self, index: usize) -> Option<&CountryCode> {
        self.codes.get(index).and_then(|code| code.as_ref())
    }

    pub fn islands(&self) -> &[&'static SmallIsland] {
        &self.islands
    }

    /// Status for a possibly-unresolved feature; unresolved reads as `None`
    /// and keeps the neutral land style.
    pub fn status_of(&self, code: Option<&CountryCode>) -> CountryStatus {
        code.map(|code| self.statuses.get(code)).unwrap_or_default()
    }
}
