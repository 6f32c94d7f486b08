//! Best-effort headline extraction from a single web page.
//!
//! [`scrape::Fetcher`] retrieves the page, [`scrape::HeadlineExtractor`]
//! picks out `(title, link)` pairs, and [`service::HeadlineService`] ties the
//! two together behind the `{ "url": ... }` request contract.

pub mod config;
pub mod error;
pub mod scrape;
pub mod service;

pub use config::FetchConfig;
pub use error::{FetchError, ScrapeError};
pub use scrape::{extract_headlines, Extraction, Fetcher, Headline, HeadlineExtractor};
pub use service::{ApiResponse, HeadlineService, ScrapeRequest};
