mod extractor;
mod fetcher;

pub use extractor::{extract_headlines, Extraction, Headline, HeadlineCandidate, HeadlineExtractor, HEADLINE_SELECTOR};
pub use fetcher::Fetcher;
