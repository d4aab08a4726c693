use anyhow::bail;
use reqwest::Client;
use serde::de::DeserializeOwned;

use poi_map_logic::prelude::*;

/// GET `url` and parse the body as JSON, non-2xx statuses are errors
pub(crate) async fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    let resp = client
        .get(url)
        .send()
        .await
        .context("Failed to make request")?;

    let status = resp.status();
    let text = resp.text().await.context("Failed to read response")?;

    if !status.is_success() {
        bail!("Server returned error ({status}): {text}");
    }

    serde_json::from_str(&text).context("Response was not valid JSON")
}
