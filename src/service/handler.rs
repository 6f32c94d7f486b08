use log::{info, warn};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::FetchConfig;
use crate::error::{Result, ScrapeError};
use crate::scrape::{Extraction, Fetcher, Headline, HeadlineExtractor};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrapeRequest {
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Status plus JSON payload, ready for whatever transport sits in front.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    fn ok(headlines: &[Headline]) -> Self {
        match serde_json::to_value(headlines) {
            Ok(body) => Self {
                status: StatusCode::OK,
                body,
            },
            Err(e) => Self::error(&ScrapeError::Unexpected(e.to_string())),
        }
    }

    fn error(err: &ScrapeError) -> Self {
        Self {
            status: err.status_code(),
            body: serde_json::json!({ "error": err.to_string() }),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Fetch-then-extract pipeline behind the `{ "url": ... }` contract.
pub struct HeadlineService {
    fetcher: Fetcher,
    extractor: HeadlineExtractor,
}

impl HeadlineService {
    pub fn new(config: FetchConfig) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(config)?,
            extractor: HeadlineExtractor::new()?,
        })
    }

    pub async fn scrape(&self, url: &str) -> Result<Vec<Headline>> {
        Ok(self.scrape_all(url).await?.headlines)
    }

    /// Same as [`scrape`](Self::scrape), keeping the pre-filter match count.
    pub async fn scrape_all(&self, url: &str) -> Result<Extraction> {
        if url.is_empty() {
            return Err(ScrapeError::MissingUrl);
        }

        info!("Fetching headlines from {}", url);
        let html = self.fetcher.fetch(url).await?;
        let extraction = self.extractor.extract_all(&html, url);
        info!(
            "Extracted {} unique headlines from {} ({} matched)",
            extraction.headlines.len(),
            url,
            extraction.matched
        );

        Ok(extraction)
    }

    /// Run a typed request and render the outcome as a response.
    pub async fn handle(&self, request: ScrapeRequest) -> ApiResponse {
        let url = request.url.unwrap_or_default();
        match self.scrape(&url).await {
            Ok(headlines) => ApiResponse::ok(&headlines),
            Err(e) => {
                warn!("Scrape of {:?} failed: {}", url, e);
                ApiResponse::error(&e)
            }
        }
    }

    /// Entry point for raw request bodies.
    pub async fn handle_json(&self, body: &[u8]) -> ApiResponse {
        match parse_request(body) {
            Ok(request) => self.handle(request).await,
            Err(e) => {
                warn!("Rejected request body: {}", e);
                ApiResponse::error(&e)
            }
        }
    }
}

fn parse_request(body: &[u8]) -> Result<ScrapeRequest> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ScrapeError::InvalidJson)?;

    let object = value.as_object().ok_or_else(|| {
        ScrapeError::Unexpected(format!("expected a JSON object, got {}", value))
    })?;

    let url = match object.get("url") {
        Some(Value::String(url)) => Some(url.clone()),
        Some(other) if !is_blank(other) => Some(other.to_string()),
        _ => None,
    };

    Ok(ScrapeRequest { url })
}

/// Values that count as "no url given": null, false, zero and empty containers.
/// Anything else is handed to the fetcher as its JSON text and fails there.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
