mod code;
pub use code::CountryCode;

mod country_status;
pub use country_status::CountryStatus;

mod feature;
pub use feature::{
    load_collection, point_in_ring, BoundaryCollection, BoundaryFeature, FeatureProperties,
    Geometry,
};

mod map_bounds;
pub use map_bounds::MapBounds;

mod small_island;
pub use small_island::{SmallIsland, SMALL_ISLANDS};
