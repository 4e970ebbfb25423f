use crate::config::ScraperConfig;
use crate::engine::{Engine, Fetcher};
use crate::tools::fetch::{FileFetcher, HttpFetcher};
use crate::{report, store};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    name = "depthchart",
    version,
    about = "Scrape the ourlads.com NFL depth chart page into JSON"
)]
pub struct Cli {
    /// Page to scrape
    #[arg(long)]
    pub url: Option<String>,

    /// Output JSON file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Team keyword to match in link text (repeatable; replaces the defaults)
    #[arg(long = "team", value_name = "KEYWORD")]
    pub teams: Vec<String>,

    /// Extract from a saved HTML file instead of fetching
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,

    /// JSON config file; flags override its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the effective config: defaults, then file, then flags.
    pub fn resolve_config(&self) -> anyhow::Result<ScraperConfig> {
        let mut config = match &self.config {
            Some(path) => ScraperConfig::from_file(path)
                .with_context(|| format!("reading config {}", path.display()))?,
            None => ScraperConfig::default(),
        };
        if let Some(url) = &self.url {
            config.url = url.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if !self.teams.is_empty() {
            config = config.with_team_keywords(self.teams.iter().cloned());
        }
        config.validate()?;
        Ok(config)
    }
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    crate::log::init(cli.verbose);
    let config = cli.resolve_config()?;

    let fetcher: Box<dyn Fetcher> = match &cli.html {
        Some(path) => Box::new(FileFetcher::new(path)),
        None => Box::new(HttpFetcher::new(&config.user_agent)?),
    };

    scrape_and_save(fetcher.as_ref(), &config)?;
    Ok(())
}

/// Scrape, save and print the summary. Scrape and save failures are
/// reported in the output document and on the console, not as errors.
pub fn scrape_and_save(fetcher: &dyn Fetcher, config: &ScraperConfig) -> anyhow::Result<bool> {
    for line in report::banner() {
        println!("{}", line);
    }
    println!("🏈 Starting NFL depth chart scraper...");

    let engine = Engine::new(fetcher, config)?;
    let result = engine.run();

    let saved = store::save_json(&result, &config.output);
    if saved {
        for line in report::summary_lines(&result, &config.output) {
            println!("{}", line);
        }
    }
    println!("{}", report::done_line(&config.output));
    Ok(saved)
}
