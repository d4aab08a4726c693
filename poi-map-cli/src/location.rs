use anyhow::anyhow;
use poi_map_logic::{Location, LocationService, prelude::*};

/// Location given on the command line, there is no device to ask
pub struct FixedLocation(pub Option<Location>);

impl LocationService for FixedLocation {
    async fn current_position(&self) -> Result<Location> {
        self.0
            .ok_or_else(|| anyhow!("Position unavailable, pass --from to set one"))
    }
}

/// Parse `"lat,lng"`
pub fn parse_location(s: &str) -> Result<Location, String> {
    let (lat, lng) = s
        .split_once(',')
        .ok_or_else(|| "Location must be 'lat,lng'".to_string())?;
    let lat = lat
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("Invalid latitude: {e}"))?;
    let lng = lng
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("Invalid longitude: {e}"))?;
    let location = Location::new(lat, lng);
    if location.is_valid() {
        Ok(location)
    } else {
        Err(format!("{lat},{lng} is not a location on Earth"))
    }
}
