use super::CountryCode;

/// A small nation likely missing from simplified boundary datasets,
/// rendered as a point marker at its approximate center instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmallIsland {
    pub code: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl SmallIsland {
    pub fn country_code(&self) -> CountryCode {
        // Entries are curated three-letter codes, so this cannot fail.
        CountryCode::parse(self.code).unwrap_or_else(|| {
            unreachable!("small island table holds valid codes")
        })
    }
}

/// Fixed marker table. If a future boundary dataset grows real polygons for
/// any of these, the overlay drops that marker automatically.
pub const SMALL_ISLANDS: &[SmallIsland] = &[
    SmallIsland { code: "MLT", lat: 35.9375, lon: 14.3754 },
    SmallIsland { code: "SGP", lat: 1.3521, lon: 103.8198 },
    SmallIsland { code: "BHR", lat: 26.0667, lon: 50.5577 },
    SmallIsland { code: "MDV", lat: 3.2028, lon: 73.2207 },
    SmallIsland { code: "SYC", lat: -4.6796, lon: 55.4920 },
    SmallIsland { code: "MUS", lat: -20.3484, lon: 57.5522 },
    SmallIsland { code: "STP", lat: 0.1864, lon: 6.6131 },
    SmallIsland { code: "CPV", lat: 16.5388, lon: -23.0418 },
    SmallIsland { code: "COM", lat: -11.6455, lon: 43.3333 },
    SmallIsland { code: "BRB", lat: 13.1939, lon: -59.5432 },
    SmallIsland { code: "GRD", lat: 12.1165, lon: -61.6790 },
    SmallIsland { code: "LCA", lat: 13.9094, lon: -60.9789 },
    SmallIsland { code: "VCT", lat: 13.2528, lon: -61.1971 },
    SmallIsland { code: "ATG", lat: 17.0608, lon: -61.7964 },
    SmallIsland { code: "KNA", lat: 17.3578, lon: -62.7830 },
    SmallIsland { code: "DMA", lat: 15.4150, lon: -61.3710 },
    SmallIsland { code: "WSM", lat: -13.7590, lon: -172.1046 },
    SmallIsland { code: "TON", lat: -21.1790, lon: -175.1982 },
    SmallIsland { code: "KIR", lat: 1.8709, lon: -157.3630 },
    SmallIsland { code: "PLW", lat: 7.5150, lon: 134.5825 },
    SmallIsland { code: "MHL", lat: 7.1315, lon: 171.1845 },
    SmallIsland { code: "FSM", lat: 6.9248, lon: 158.1611 },
    SmallIsland { code: "TUV", lat: -7.1095, lon: 177.6493 },
    SmallIsland { code: "NRU", lat: -0.5228, lon: 166.9315 },
    SmallIsland { code: "AND", lat: 42.5063, lon: 1.5218 },
    SmallIsland { code: "MCO", lat: 43.7384, lon: 7.4246 },
    SmallIsland { code: "SMR", lat: 43.9424, lon: 12.4578 },
    SmallIsland { code: "LIE", lat: 47.1660, lon: 9.5554 },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_codes_are_valid_and_unique() {
        let mut seen = HashSet::new();
        for island in SMALL_ISLANDS {
            let code = island.country_code();
            assert_eq!(code.as_str(), island.code);
            assert!(seen.insert(code), "duplicate island {}", island.code);
        }
    }

    #[test]
    fn test_table_coordinates_in_range() {
        for island in SMALL_ISLANDS {
            assert!((-90.0..=90.0).contains(&island.lat), "{}", island.code);
            assert!((-180.0..=180.0).contains(&island.lon), "{}", island.code);
        }
    }
}
