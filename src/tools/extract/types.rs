use serde::Serialize;

/// Anchor whose visible text named one of the configured teams.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TeamLink {
    pub name: String,
    /// Raw `href`, relative or absolute, never resolved.
    pub url: String,
}

/// A table that had more than one row, with its position in the page.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TableRows {
    /// Position among *all* `<table>` elements, kept tables or not.
    pub index: usize,
    pub rows: Vec<Vec<String>>,
}

/// Everything pulled from one document.
///
/// `links` are numbered by match order while `tables` keep their position
/// among all tables; `tables_found` is the count of every table seen.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Extraction {
    pub links: Vec<TeamLink>,
    pub tables: Vec<TableRows>,
    pub links_scanned: usize,
    pub tables_found: usize,
}
