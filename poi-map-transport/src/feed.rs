use log::info;
use reqwest::Client;

use poi_map_logic::{PoiFeed, RawPoi, prelude::*};

use crate::http::get_json;

/// [PoiFeed] reading a JSON array of POIs from a fixed URL
pub struct HttpPoiFeed {
    client: Client,
    url: String,
}

impl HttpPoiFeed {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

impl PoiFeed for HttpPoiFeed {
    async fn fetch_pois(&self) -> Result<Vec<RawPoi>> {
        info!("Fetching points of interest from {}", self.url);
        get_json(&self.client, &self.url)
            .await
            .context("Failed to fetch points of interest")
    }
}
