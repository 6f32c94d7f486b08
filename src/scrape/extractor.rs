use std::collections::HashSet;

use log::debug;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, ScrapeError};

/// Anchors under any heading level, or under elements classed `title` / `headline`.
///
/// Deliberately generic: it will pick up navigation headings and miss sites
/// that mark headlines up some other way.
pub const HEADLINE_SELECTOR: &str = "h1 a, h2 a, h3 a, h4 a, h5 a, h6 a, .title a, .headline a";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    pub title: String,
    pub link: String,
}

/// Headlines kept from one page, plus how many anchors the selector matched
/// before filtering and dedup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub matched: usize,
    pub headlines: Vec<Headline>,
}

/// A matched anchor before filtering. `href` borrows from the parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineCandidate<'a> {
    pub title: String,
    pub href: Option<&'a str>,
}

pub struct HeadlineExtractor {
    selector: Selector,
}

impl HeadlineExtractor {
    pub fn new() -> Result<Self> {
        let selector = Selector::parse(HEADLINE_SELECTOR).map_err(|e| {
            ScrapeError::Unexpected(format!("invalid headline selector: {:?}", e))
        })?;
        Ok(Self { selector })
    }

    /// Every anchor the heuristic matches, in document order.
    pub fn candidates<'a>(&self, document: &'a Html) -> Vec<HeadlineCandidate<'a>> {
        document
            .select(&self.selector)
            .map(|element| HeadlineCandidate {
                title: element.text().collect::<String>().trim().to_string(),
                href: element.value().attr("href"),
            })
            .collect()
    }

    /// Filter, dedup and resolve the candidates found in `html`.
    ///
    /// Duplicates are detected on the href exactly as written, before it is
    /// joined with `base_url`; two spellings of the same target both survive.
    pub fn extract(&self, html: &str, base_url: &str) -> Vec<Headline> {
        self.extract_all(html, base_url).headlines
    }

    /// Like [`extract`](Self::extract), also reporting the raw match count.
    pub fn extract_all(&self, html: &str, base_url: &str) -> Extraction {
        let document = Html::parse_document(html);
        let base = Url::parse(base_url).ok();
        if base.is_none() {
            debug!("Base URL {:?} does not parse, links stay as written", base_url);
        }

        let candidates = self.candidates(&document);
        let matched = candidates.len();
        let mut seen_links: HashSet<&str> = HashSet::new();
        let mut headlines = Vec::new();

        for candidate in candidates {
            let href = match candidate.href {
                Some(href) if !href.is_empty() => href,
                _ => continue,
            };
            if candidate.title.is_empty() || !seen_links.insert(href) {
                continue;
            }

            headlines.push(Headline {
                title: candidate.title,
                link: resolve(base.as_ref(), href),
            });
        }

        Extraction { matched, headlines }
    }
}

/// One-shot helper for callers that do not keep an extractor around.
pub fn extract_headlines(html: &str, base_url: &str) -> Result<Vec<Headline>> {
    Ok(HeadlineExtractor::new()?.extract(html, base_url))
}

/// Absolute hrefs come back exactly as written; only relative ones are joined.
fn resolve(base: Option<&Url>, href: &str) -> String {
    if Url::parse(href).is_ok() {
        return href.to_string();
    }
    match base.map(|b| b.join(href)) {
        Some(Ok(url)) => url.to_string(),
        Some(Err(e)) => {
            debug!("Could not resolve {:?}: {}", href, e);
            href.to_string()
        }
        None => href.to_string(),
    }
}
