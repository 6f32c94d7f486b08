mod handler;

pub use handler::{ApiResponse, ErrorBody, HeadlineService, ScrapeRequest};
