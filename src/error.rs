use reqwest::{StatusCode, Url};
use std::path::PathBuf;
use thiserror::Error;

/// Failures talking to the product API or the upload endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} cannot be used as a base URL")]
    InvalidBaseUrl(Url),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("could not read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("request timed out")]
    Timeout,

    /// Non-2xx response; `message` is the server-provided detail.
    #[error("Error : {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Transport(err)
        }
    }
}

/// Startup failures; nothing after the window opens is fatal.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to start background runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("ui failed: {0}")]
    Ui(String),
}
