use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a forecast fetch. Callers treat every variant as "data unavailable";
/// the variants only carry diagnostics.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid request path '{path}': {source}")]
    Url {
        path: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to send request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse response JSON: {0}")]
    Decode(#[source] serde_json::Error),
}
