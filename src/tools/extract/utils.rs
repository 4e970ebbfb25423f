use super::types::{TableRows, TeamLink};
use crate::selectors::Selectors;
use scraper::{ElementRef, Html};

/// Text of an element with every fragment trimmed and blanks dropped.
///
/// Fragments are joined without a separator, so `<td>A <b>B</b></td>`
/// reads as `"AB"`.
pub(super) fn stripped_text(el: &ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// True when the lowercased text contains any keyword.
/// Keywords are expected to be lowercase already.
pub(super) fn matches_keyword(text: &str, keywords: &[String]) -> bool {
    let lower = text.to_lowercase();
    keywords.iter().any(|k| lower.contains(k.as_str()))
}

/// Scan every `a[href]`. Returns matches and the number of anchors seen.
pub(super) fn scan_links(
    doc: &Html,
    selectors: &Selectors,
    keywords: &[String],
) -> (Vec<TeamLink>, usize) {
    let mut links = Vec::new();
    let mut scanned = 0;
    for link in doc.select(&selectors.link) {
        scanned += 1;
        let href = link.value().attr("href").unwrap_or_default();
        let text = stripped_text(&link);
        if matches_keyword(&text, keywords) {
            links.push(TeamLink {
                name: text,
                url: href.to_string(),
            });
        }
    }
    (links, scanned)
}

/// Scan every `table`. Returns kept tables and the number of tables seen.
pub(super) fn scan_tables(doc: &Html, selectors: &Selectors) -> (Vec<TableRows>, usize) {
    let mut tables = Vec::new();
    let mut found = 0;
    for (index, table) in doc.select(&selectors.table).enumerate() {
        found += 1;
        let rows: Vec<ElementRef<'_>> = table.select(&selectors.row).collect();
        if rows.len() <= 1 {
            continue;
        }

        let data: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                row.select(&selectors.cell)
                    .map(|cell| stripped_text(&cell))
                    .collect::<Vec<_>>()
            })
            .filter(|cells| !cells.is_empty())
            .collect();

        if !data.is_empty() {
            tables.push(TableRows { index, rows: data });
        }
    }
    (tables, found)
}
