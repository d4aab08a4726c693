mod directions;
mod endpoints;
mod feed;
mod http;

pub use directions::MapboxDirections;
pub use endpoints::{DIRECTIONS_BASE_URL, MAPBOX_TOKEN, POI_FEED_URL};
pub use feed::HttpPoiFeed;
