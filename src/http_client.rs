//! HTTP client wrapper used by the profile loader.

use std::time::Duration;

use reqwest::{Client, StatusCode};

/// Default user agent for outbound requests.
pub const USER_AGENT: &str = concat!("linkbio/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper around reqwest with the client options linkbio uses
/// everywhere: custom user agent, request timeout, and compression.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

/// A fully-read HTTP response.
#[derive(Debug)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

impl HttpClient {
    /// Create a new HTTP client.
    pub fn new(timeout: Duration, user_agent: &str) -> Self {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Make a GET request and read the whole body as text.
    pub async fn get(&self, url: &str) -> Result<HttpResponse, reqwest::Error> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}
