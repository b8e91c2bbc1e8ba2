use serde::Deserialize;

use super::MapBounds;
use crate::errors::EngineError;

/// A GeoJSON feature collection of country boundary polygons.
#[derive(Debug, Deserialize)]
pub struct BoundaryCollection {
    pub features: Vec<BoundaryFeature>,
}

/// One polygon or multipolygon from the world boundary dataset, together
/// with its raw properties bag. Loaded once at startup and never mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct BoundaryFeature {
    #[serde(default)]
    pub properties: FeatureProperties,
    pub geometry: Geometry,
}

/// The subset of boundary-dataset properties the engine reads.
///
/// Different dataset providers use different property names for the same
/// thing, so every field is optional and access goes through the ordered
/// fallback chains below.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureProperties {
    #[serde(rename = "ISO_A3")]
    pub iso_a3: Option<String>,
    #[serde(rename = "ADM0_A3")]
    pub adm0_a3: Option<String>,
    #[serde(rename = "SOV_A3")]
    pub sov_a3: Option<String>,
    #[serde(rename = "ISO3")]
    pub iso3: Option<String>,
    #[serde(rename = "WB_A3")]
    pub wb_a3: Option<String>,
    #[serde(rename = "GU_A3")]
    pub gu_a3: Option<String>,
    #[serde(rename = "ADMIN")]
    pub admin: Option<String>,
    #[serde(rename = "NAME")]
    pub name: Option<String>,
    #[serde(rename = "name")]
    pub name_lower: Option<String>,
    #[serde(rename = "SOVEREIGNT")]
    pub sovereignt: Option<String>,
}

impl FeatureProperties {
    /// ISO-code-like property values in resolution order.
    pub fn iso_candidates(&self) -> [Option<&str>; 6] {
        [
            self.iso_a3.as_deref(),
            self.adm0_a3.as_deref(),
            self.sov_a3.as_deref(),
            self.iso3.as_deref(),
            self.wb_a3.as_deref(),
            self.gu_a3.as_deref(),
        ]
    }

    /// Display name from the ordered fallback chain, empty when absent.
    pub fn display_name(&self) -> &str {
        self.admin
            .as_deref()
            .or(self.name.as_deref())
            .or(self.name_lower.as_deref())
            .or(self.sovereignt.as_deref())
            .unwrap_or("")
    }
}

/// Feature geometry. Each polygon is a list of rings; ring 0 is the outer
/// boundary, the rest are holes. Coordinates are `[lon, lat]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon {
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<[f64; 2]>>>,
    },
}

impl Geometry {
    /// All polygons of the geometry, a `Polygon` being a single-element list.
    pub fn polygons(&self) -> Vec<&[Vec<[f64; 2]>]> {
        match self {
            Geometry::Polygon { coordinates } => vec![coordinates.as_slice()],
            Geometry::MultiPolygon { coordinates } => {
                coordinates.iter().map(|p| p.as_slice()).collect()
            }
        }
    }
}

impl BoundaryFeature {
    /// Bounding box over every ring of the geometry.
    ///
    /// # Returns
    /// * `Option<MapBounds>` - `None` for a degenerate geometry with no
    ///   coordinates at all.
    pub fn bounding_box(&self) -> Option<MapBounds> {
        MapBounds::from_points(
            self.geometry
                .polygons()
                .into_iter()
                .flatten()
                .flatten()
                .map(|coord| (coord[0], coord[1])),
        )
    }

    /// Checks whether a geographic point falls inside the feature
    /// (outer rings minus holes).
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        self.geometry
            .polygons()
            .into_iter()
            .any(|rings| point_in_polygon(lon, lat, rings))
    }
}

/// Ray-casting point-in-ring test.
pub fn point_in_ring(lon: f64, lat: f64, ring: &[[f64; 2]]) -> bool {
    let mut inside = false;
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut j = n - 1;
    for i in 0..n {
        let xi = ring[i][0];
        let yi = ring[i][1];
        let xj = ring[j][0];
        let yj = ring[j][1];
        if ((yi > lat) != (yj > lat)) && (lon < (xj - xi) * (lat - yi) / (yj - yi) + xi) {
            inside = !inside;
        }
        j = i;
    }
    inside
}

fn point_in_polygon(lon: f64, lat: f64, rings: &[Vec<[f64; 2]>]) -> bool {
    if rings.is_empty() || !point_in_ring(lon, lat, &rings[0]) {
        return false;
    }
    // Must be outside all holes
    !rings[1..].iter().any(|hole| point_in_ring(lon, lat, hole))
}

/// Parses a GeoJSON boundary dataset.
pub fn load_collection(geojson: &str) -> Result<Vec<BoundaryFeature>, EngineError> {
    let collection: BoundaryCollection = serde_json::from_str(geojson)
        .map_err(|e| EngineError::InvalidDataset(e.to_string()))?;
    Ok(collection.features)
}
