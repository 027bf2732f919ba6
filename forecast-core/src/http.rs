use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::FetchError;

/// HTTP handle with a base address, shared by every service that talks to the backend.
///
/// Relative request paths are resolved against `base_url`, so a base of
/// `http://host/app` behaves like `http://host/app/`.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: Url,
    inner: reqwest::Client,
}

impl HttpClient {
    pub fn new(base_url: Url) -> Result<Self, FetchError> {
        Self::build(base_url, reqwest::Client::builder())
    }

    pub fn with_timeout(base_url: Url, timeout: Duration) -> Result<Self, FetchError> {
        Self::build(base_url, reqwest::Client::builder().timeout(timeout))
    }

    fn build(mut base_url: Url, builder: reqwest::ClientBuilder) -> Result<Self, FetchError> {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let inner = builder.build().map_err(FetchError::Client)?;
        Ok(Self { base_url, inner })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET `path` and deserialize the body as JSON.
    ///
    /// Non-success statuses are errors even when the body would parse. The body
    /// must be valid UTF-8; it is never decoded lossily.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|source| FetchError::Url { path: path.to_owned(), source })?;

        debug!(%url, "sending GET");

        let res = self.inner.get(url).send().await.map_err(FetchError::Transport)?;

        let status = res.status();
        let body = res.bytes().await.map_err(FetchError::Transport)?;

        debug!(%status, bytes = body.len(), "received response");

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body);
            return Err(FetchError::Status { status, body: truncate_body(&text) });
        }

        serde_json::from_slice(&body).map_err(FetchError::Decode)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
