//! Shared Selectors

use crate::error::{DepthChartError, Result};
use scraper::Selector;

/// Anchor elements with hrefs.
pub const LINK: &str = "a[href]";

/// Every table in the document.
pub const TABLE: &str = "table";

/// Rows inside a table (nested tables included).
pub const ROW: &str = "tr";

/// Header and data cells inside a row.
pub const CELL: &str = "td, th";

/// Compile a CSS selector, mapping failure to a parse error.
pub fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| DepthChartError::parse_error(&format!("selector `{}`", css), &format!("{:?}", e)))
}

/// Selectors used by the extractor, compiled once per run.
#[derive(Debug, Clone)]
pub struct Selectors {
    pub link: Selector,
    pub table: Selector,
    pub row: Selector,
    pub cell: Selector,
}

impl Selectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            link: compile(LINK)?,
            table: compile(TABLE)?,
            row: compile(ROW)?,
            cell: compile(CELL)?,
        })
    }
}
