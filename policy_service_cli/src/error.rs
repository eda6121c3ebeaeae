use reqwest::StatusCode;

/// Failure while retrieving a policy page over HTTP.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
}

/// Failure while calling the LLM completion endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("model returned HTTP {0}")]
    Status(StatusCode),
    #[error("completion response carried no message content")]
    MalformedResponse,
}

/// Failure while querying the breach-lookup API.
#[derive(Debug, thiserror::Error)]
pub enum BreachError {
    #[error("breach lookup request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("breach lookup returned HTTP {0}")]
    Status(StatusCode),
    #[error("breach lookup response missing `{0}`")]
    MissingField(&'static str),
}
