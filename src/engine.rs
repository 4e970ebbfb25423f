use crate::config::ScraperConfig;
use crate::error::Result;
use crate::tools::extract::{Extraction, Extractor};
use crate::types::*;
use tracing::{error, info};

/// Source of page HTML. The CLI uses the network; tests swap in fixtures.
pub trait Fetcher {
    fn name(&self) -> &'static str;
    fn fetch(&self, url: &str) -> Result<String>;
}

pub struct Engine<'a> {
    pub fetcher: &'a dyn Fetcher,
    pub extractor: Extractor,
    pub config: &'a ScraperConfig,
}

impl<'a> Engine<'a> {
    pub fn new(fetcher: &'a dyn Fetcher, config: &'a ScraperConfig) -> Result<Self> {
        Ok(Self {
            fetcher,
            extractor: Extractor::new(&config.team_keywords)?,
            config,
        })
    }

    /// Fetch, extract and shape. Never fails: any error becomes an
    /// error-shaped result with an empty `teams` map.
    pub fn run(&self) -> ScrapeResult {
        match self.try_run() {
            Ok(result) => result,
            Err(e) => {
                println!("❌ Error: {}", e);
                error!(kind = e.kind(), fetcher = self.fetcher.name(), "scrape failed: {}", e);
                ScrapeResult::failure(&self.config.source_host(), e.to_string())
            }
        }
    }

    pub fn try_run(&self) -> Result<ScrapeResult> {
        println!("📡 Fetching data from {}...", self.config.source_host());
        let html = self.fetcher.fetch(&self.config.url)?;

        println!("🔍 Parsing HTML for team data...");
        let extraction = self.extractor.extract(&html);
        println!(
            "Found {} links and {} tables",
            extraction.links_scanned, extraction.tables_found
        );

        let result = build_result(extraction, &self.config.source);
        info!(
            teams_found = result.metadata.teams_found,
            tables_found = result.metadata.tables_found,
            entries = result.teams.len(),
            "scrape succeeded"
        );
        Ok(result)
    }
}

/// Shape an extraction into the success document.
///
/// Tables keep their page-wide index (`table_<i>`); links are numbered
/// by match order (`team_<i>`).
pub fn build_result(extraction: Extraction, source: &str) -> ScrapeResult {
    let mut result = ScrapeResult::success(source);
    let teams_found = extraction.links.len();

    for table in extraction.tables {
        result
            .teams
            .insert(table_key(table.index), Entry::table(table.rows));
    }
    for (i, link) in extraction.links.into_iter().enumerate() {
        result.teams.insert(team_key(i), Entry::link(link.name, link.url));
    }

    result.metadata.teams_found = Some(teams_found);
    result.metadata.tables_found = Some(extraction.tables_found);
    result
}
