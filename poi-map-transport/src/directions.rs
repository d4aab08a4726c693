use log::info;
use reqwest::Client;

use poi_map_logic::{DirectionsResponse, DirectionsService, Location, prelude::*};

use crate::{
    endpoints::{DRIVING_PROFILE, directions_url, redact_token},
    http::get_json,
};

/// [DirectionsService] backed by the Mapbox Directions API
pub struct MapboxDirections {
    client: Client,
    base_url: String,
    token: String,
}

impl MapboxDirections {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }
}

impl DirectionsService for MapboxDirections {
    async fn driving_route(&self, from: Location, to: Location) -> Result<DirectionsResponse> {
        let url = directions_url(&self.base_url, DRIVING_PROFILE, &self.token, from, to);
        info!("Requesting directions: {}", redact_token(&url));
        get_json(&self.client, &url)
            .await
            .context("Failed to get directions")
    }
}
