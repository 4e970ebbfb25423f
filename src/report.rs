//! Console summary printed after a successful save.

use crate::types::ScrapeResult;
use std::path::Path;

pub const PREVIEW_ENTRIES: usize = 3;
pub const PREVIEW_CHARS: usize = 100;

pub fn banner() -> Vec<String> {
    let rule = "=".repeat(50);
    vec![rule.clone(), "🏈 NFL DEPTH CHART SCRAPER".to_string(), rule]
}

/// Summary block: status, counts, timestamp, file, then a short preview
/// of the first entries.
pub fn summary_lines(result: &ScrapeResult, path: &Path) -> Vec<String> {
    let meta = &result.metadata;
    let mut lines = vec![
        String::new(),
        "📊 SUMMARY:".to_string(),
        format!("   Status: {}", meta.status.as_str()),
        format!("   Teams found: {}", meta.teams_found.unwrap_or(0)),
        format!("   Tables found: {}", meta.tables_found.unwrap_or(0)),
        format!("   Scraped at: {}", meta.scraped_at),
        format!("   File: {}", path.display()),
    ];

    if !result.teams.is_empty() {
        lines.push(String::new());
        lines.push("🔍 PREVIEW:".to_string());
        for (key, entry) in result.teams.iter().take(PREVIEW_ENTRIES) {
            let rendered = serde_json::to_string(entry).unwrap_or_default();
            lines.push(format!("   {}: {}...", key, truncate_chars(&rendered, PREVIEW_CHARS)));
        }
    }
    lines
}

pub fn done_line(path: &Path) -> String {
    format!("\n🎉 Done! Check {} for your data.", path.display())
}

/// First `max` characters of `s`, never splitting a code point.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
