use reqwest::StatusCode;
use thiserror::Error;

/// Why a page could not be retrieved.
///
/// Callers that only care about "the fetch failed" can rely on `Display`,
/// which always carries the underlying cause.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("could not connect to {url}: {source}")]
    ConnectionFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{status} for url: {url}")]
    BadStatus { url: String, status: StatusCode },

    #[error("could not read response body from {url}: {source}")]
    DecodeFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl FetchError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::BadStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("URL is required.")]
    MissingUrl,

    #[error("Invalid JSON data")]
    InvalidJson,

    #[error("Failed to fetch the URL: {0}")]
    Fetch(#[from] FetchError),

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl ScrapeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ScrapeError::MissingUrl | ScrapeError::InvalidJson => StatusCode::BAD_REQUEST,
            ScrapeError::Fetch(_) | ScrapeError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
