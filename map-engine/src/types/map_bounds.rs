/// Geographical bounds of a feature or map view, as minimum and maximum
/// latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl MapBounds {
    /// Computes the bounds of a set of `(lon, lat)` points.
    ///
    /// # Returns
    /// * `Option<MapBounds>` - `None` when the iterator is empty.
    pub fn from_points(points: impl Iterator<Item = (f64, f64)>) -> Option<Self> {
        let mut bounds: Option<MapBounds> = None;
        for (lon, lat) in points {
            match bounds.as_mut() {
                None => {
                    bounds = Some(MapBounds {
                        min_lat: lat,
                        max_lat: lat,
                        min_lon: lon,
                        max_lon: lon,
                    });
                }
                Some(b) => {
                    if lat < b.min_lat {
                        b.min_lat = lat;
                    }
                    if lat > b.max_lat {
                        b.max_lat = lat;
                    }
                    if lon < b.min_lon {
                        b.min_lon = lon;
                    }
                    if lon > b.max_lon {
                        b.max_lon = lon;
                    }
                }
            }
        }
        bounds
    }

    /// Checks whether a given position is within the bounds.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }

    /// Center point as `(lat, lon)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_and_center() {
        let bounds = MapBounds::from_points(
            [(10.0, 50.0), (14.0, 52.0), (12.0, 54.0)].into_iter(),
        )
        .expect("non-empty");
        assert_eq!(bounds.min_lon, 10.0);
        assert_eq!(bounds.max_lon, 14.0);
        assert_eq!(bounds.min_lat, 50.0);
        assert_eq!(bounds.max_lat, 54.0);
        assert_eq!(bounds.center(), (52.0, 12.0));
    }

    #[test]
    fn test_from_points_empty() {
        assert!(MapBounds::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn test_contains() {
        let bounds = MapBounds {
            min_lat: -10.0,
            max_lat: 10.0,
            min_lon: 0.0,
            max_lon: 20.0,
        };
        assert!(bounds.contains(0.0, 10.0));
        assert!(!bounds.contains(11.0, 10.0));
        assert!(!bounds.contains(0.0, -1.0));
    }
}
