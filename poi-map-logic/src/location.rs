use serde::{Deserialize, Serialize};

use crate::prelude::*;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
/// Some location in the world, either from a Geolocation API or a normalized POI
pub struct Location {
    /// Latitude, south is negative
    pub lat: f64,
    /// Longitude, west is negative
    pub lng: f64,
}

impl Location {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both components are finite and inside the valid lat/lng ranges
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// `[lng, lat]` pair, the order map libraries and directions APIs expect
    pub fn lng_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

pub trait LocationService: Send + Sync {
    /// One-shot request for the device's current position. Errors represent
    /// permission denial or the position being unavailable.
    fn current_position(&self) -> impl Future<Output = Result<Location>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ranges() {
        assert!(Location::new(15.1588, -120.62).is_valid());
        assert!(Location::new(-90.0, 180.0).is_valid());
        assert!(!Location::new(90.5, 0.0).is_valid());
        assert!(!Location::new(0.0, -180.1).is_valid());
        assert!(!Location::new(f64::NAN, 0.0).is_valid());
        assert!(!Location::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_lng_lat_order() {
        assert_eq!(Location::new(1.0, 2.0).lng_lat(), [2.0, 1.0]);
    }
}
