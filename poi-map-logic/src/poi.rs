use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    coords::{Axis, RawCoordinate},
    location::Location,
    prelude::*,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A point of interest exactly as the remote feed describes it
pub struct RawPoi {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Latitude", default)]
    pub latitude: RawCoordinate,
    #[serde(rename = "Longitude", default)]
    pub longitude: RawCoordinate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A point of interest with a validated, hemisphere-adjusted location
pub struct Poi {
    pub name: String,
    pub location: Location,
}

impl Poi {
    /// Normalize a raw feed record, returns [None] if either coordinate is unparsable or the
    /// result isn't a valid location.
    pub fn from_raw(raw: RawPoi) -> Option<Self> {
        let lat = raw.latitude.normalize(Axis::Latitude)?;
        let lng = raw.longitude.normalize(Axis::Longitude)?;
        let location = Location::new(lat, lng);
        location.is_valid().then_some(Self {
            name: raw.name,
            location,
        })
    }

    /// Normalize a whole feed, dropping any record that can't be placed on the map
    pub fn normalize_all(raw: impl IntoIterator<Item = RawPoi>) -> Vec<Self> {
        raw.into_iter()
            .filter_map(|raw| {
                let name = raw.name.clone();
                let poi = Self::from_raw(raw);
                if poi.is_none() {
                    debug!("Dropping POI \"{name}\", coordinates are not usable");
                }
                poi
            })
            .collect()
    }
}

pub trait PoiFeed: Send + Sync {
    /// Fetch every point of interest the feed knows about
    fn fetch_pois(&self) -> impl Future<Output = Result<Vec<RawPoi>>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, lat: impl Into<RawCoordinate>, lng: impl Into<RawCoordinate>) -> RawPoi {
        RawPoi {
            name: name.to_string(),
            latitude: lat.into(),
            longitude: lng.into(),
        }
    }

    #[test]
    fn test_feed_json_shape() {
        let json = r#"[
            {"Name": "Mount Pinatubo", "Latitude": "~ 15.1429° N", "Longitude": "120.3496° E"},
            {"Name": "Lima", "Latitude": -12.0464, "Longitude": -77.0428}
        ]"#;
        let parsed: Vec<RawPoi> = serde_json::from_str(json).expect("Failed to parse feed");
        let pois = Poi::normalize_all(parsed);

        assert_eq!(pois.len(), 2);
        assert_eq!(pois[0].name, "Mount Pinatubo");
        assert_eq!(pois[0].location, Location::new(15.1429, 120.3496));
        assert_eq!(pois[1].location, Location::new(-12.0464, -77.0428));
    }

    #[test]
    fn test_badly_typed_record_only_drops_itself() {
        let json = r#"[
            {"Name": "Good", "Latitude": 15.1, "Longitude": 120.6},
            {"Name": "Null lat", "Latitude": null, "Longitude": 120.6},
            {"Name": "Bool lng", "Latitude": 15.1, "Longitude": false},
            {"Name": "No lng", "Latitude": 15.1},
            {"Name": "Also good", "Latitude": "14° N", "Longitude": "121° E"}
        ]"#;
        let parsed: Vec<RawPoi> = serde_json::from_str(json).expect("Failed to parse feed");
        assert_eq!(parsed.len(), 5);

        let pois = Poi::normalize_all(parsed);
        let names = pois.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Good", "Also good"]);
    }

    #[test]
    fn test_southern_western_text() {
        let poi = Poi::from_raw(raw("Somewhere", "15.1588° S", "120.62° W"))
            .expect("Should normalize");
        assert_eq!(poi.location, Location::new(-15.1588, -120.62));
    }

    #[test]
    fn test_unparsable_record_dropped() {
        let pois = Poi::normalize_all([
            raw("Good", 1.0, 2.0),
            raw("Bad Lat", "n/a", 2.0),
            raw("Bad Lng", 1.0, "unknown"),
            raw("Also Good", "3° N", "4° E"),
        ]);
        let names = pois.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Good", "Also Good"]);
    }

    #[test]
    fn test_out_of_range_dropped() {
        assert!(Poi::from_raw(raw("Too North", 91.0, 0.0)).is_none());
        assert!(Poi::from_raw(raw("Too East", "0° N", "181° E")).is_none());
        assert!(Poi::from_raw(raw("NaN", f64::NAN, 0.0)).is_none());
    }

    #[test]
    fn test_empty_feed() {
        assert!(Poi::normalize_all(Vec::new()).is_empty());
    }
}
