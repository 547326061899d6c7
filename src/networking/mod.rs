use std::time::Duration;

use log::warn;
use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONNECTION, HeaderMap, HeaderValue, USER_AGENT};

// Pretend to be a user on Firefox fetching images from the webui; the asset
// host filters requests on these.
const FIREFOX_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:134.0) Gecko/20100101 Firefox/134.0";
const IMAGE_ACCEPT: &str =
    "image/avif,image/webp,image/png,image/svg+xml,image/*;q=0.8,*/*;q=0.5";

#[derive(Clone)]
pub struct NetworkClient {
    client: Client,
}

impl NetworkClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .default_headers(browser_headers())
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|err| {
                warn!("network client: falling back to default HTTP client configuration ({err})");
                Client::new()
            });
        Self { client }
    }

    /// Fetch `url` and return the full response body. Non-2xx statuses count
    /// as failures.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| format!("request failed: {e}"))?
            .error_for_status()
            .map_err(|e| format!("status error: {e}"))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| format!("body read failed: {e}"))?;
        Ok(body.to_vec())
    }
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(FIREFOX_USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static(IMAGE_ACCEPT));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert("Priority", HeaderValue::from_static("u=5"));
    // Accept-Encoding: gzip, deflate comes from the reqwest features of the
    // same names, which also decode the response transparently.
    headers
}
