use thiserror::Error;

/// Beatport API error types
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("authorization failed: {0}")]
    Authorization(String),

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("track {0} is not streamable")]
    NotStreamable(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
