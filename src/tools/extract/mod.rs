pub mod types;
mod utils;

pub use types::*;
use utils::*;

use crate::error::Result;
use crate::selectors::Selectors;
use scraper::Html;
use tracing::debug;

/// Pulls team links and multi-row tables out of a depth chart page.
#[derive(Debug, Clone)]
pub struct Extractor {
    selectors: Selectors,
    keywords: Vec<String>,
}

impl Extractor {
    /// Build an extractor matching link text against `keywords`
    /// (case-insensitive substring match).
    pub fn new<I, S>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            selectors: Selectors::new()?,
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .collect(),
        })
    }

    /// Extract links and tables from a full HTML document.
    pub fn extract(&self, html: &str) -> Extraction {
        let doc = Html::parse_document(html);

        let (links, links_scanned) = scan_links(&doc, &self.selectors, &self.keywords);
        let (tables, tables_found) = scan_tables(&doc, &self.selectors);
        debug!(
            links_scanned,
            links_matched = links.len(),
            tables_found,
            tables_kept = tables.len(),
            "extracted document"
        );

        Extraction {
            links,
            tables,
            links_scanned,
            tables_found,
        }
    }
}

/// Extract with a throwaway extractor.
pub fn extract_depth_charts<S: AsRef<str>>(html: &str, keywords: &[S]) -> Result<Extraction> {
    let extractor = Extractor::new(keywords.iter().map(|k| k.as_ref()))?;
    Ok(extractor.extract(html))
}
