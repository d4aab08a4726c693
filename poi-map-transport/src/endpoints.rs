use poi_map_logic::Location;

const fn poi_feed_url() -> &'static str {
    if let Some(url) = option_env!("POI_FEED_URL") {
        url
    } else {
        "http://localhost:3000/pois"
    }
}

const fn directions_base_url() -> &'static str {
    if let Some(url) = option_env!("DIRECTIONS_BASE_URL") {
        url
    } else {
        "https://api.mapbox.com/directions/v5/mapbox"
    }
}

const fn mapbox_token() -> &'static str {
    if let Some(token) = option_env!("MAPBOX_TOKEN") {
        token
    } else {
        ""
    }
}

/// Where the list of points of interest is fetched from
pub const POI_FEED_URL: &str = poi_feed_url();
/// Directions API root, profiles are appended to this
pub const DIRECTIONS_BASE_URL: &str = directions_base_url();
/// Access token sent with every directions request
pub const MAPBOX_TOKEN: &str = mapbox_token();

pub(crate) const DRIVING_PROFILE: &str = "driving";

const DIRECTIONS_QUERY: &str = const_str::concat!("?steps=true", "&geometries=geojson");

/// URL requesting a route for `profile` from `from` to `to`, with steps and GeoJSON geometry
pub(crate) fn directions_url(
    base: &str,
    profile: &str,
    token: &str,
    from: Location,
    to: Location,
) -> String {
    let base = base.trim_end_matches('/');
    format!(
        "{base}/{profile}/{},{};{},{}{DIRECTIONS_QUERY}&access_token={token}",
        from.lng, from.lat, to.lng, to.lat
    )
}

/// Same as the URL but with the token hidden, for logging
pub(crate) fn redact_token(url: &str) -> String {
    match url.find("access_token=") {
        Some(i) => format!("{}access_token=REDACTED", &url[..i]),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions_url() {
        let url = directions_url(
            "https://api.mapbox.com/directions/v5/mapbox/",
            DRIVING_PROFILE,
            "pk.abc",
            Location::new(40.0, -98.5),
            Location::new(-12.0464, -77.0428),
        );
        assert_eq!(
            url,
            "https://api.mapbox.com/directions/v5/mapbox/driving/-98.5,40;-77.0428,-12.0464?steps=true&geometries=geojson&access_token=pk.abc"
        );
    }

    #[test]
    fn test_redact_token() {
        assert_eq!(
            redact_token("http://x/driving/1,2;3,4?steps=true&access_token=secret"),
            "http://x/driving/1,2;3,4?steps=true&access_token=REDACTED"
        );
        assert_eq!(redact_token("http://x/pois"), "http://x/pois");
    }
}
