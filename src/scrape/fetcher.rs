use log::{debug, warn};

use crate::config::FetchConfig;
use crate::error::FetchError;

/// Single-shot page retrieval: one GET, no retries.
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }

    /// Fetch `url` and return the body as text. Any non-2xx status is an error.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned {}", url, status);
            return Err(FetchError::BadStatus {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::DecodeFailed {
                    url: url.to_string(),
                    source: e,
                }
            }
        })
    }
}

fn classify(url: &str, source: reqwest::Error) -> FetchError {
    warn!("Request to {} failed: {}", url, source);
    let url = url.to_string();
    if source.is_timeout() {
        FetchError::Timeout { url }
    } else if source.is_connect() {
        FetchError::ConnectionFailed { url, source }
    } else {
        FetchError::Request { url, source }
    }
}
