use crate::{error::*, types::*};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, error};

/// Write the result as 2-space indented UTF-8 JSON, replacing any existing file.
/// Non-ASCII text is written as-is.
pub fn write_json(result: &ScrapeResult, path: &Path) -> Result<()> {
    let file = fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, result)?;
    writer.flush()?;
    debug!(path = %path.display(), entries = result.teams.len(), "wrote json");
    Ok(())
}

/// Like [`write_json`] but reports failure on the console and returns
/// `false` instead of an error.
pub fn save_json(result: &ScrapeResult, path: &Path) -> bool {
    match write_json(result, path) {
        Ok(()) => {
            println!("✅ Data saved to {}", path.display());
            true
        }
        Err(e) => {
            println!("❌ Error saving file: {}", e);
            error!(kind = e.kind(), path = %path.display(), "save failed: {}", e);
            false
        }
    }
}

/// Read back a previously written result.
pub fn load_json(path: &Path) -> Result<ScrapeResult> {
    let file = fs::File::open(path)?;
    let result = serde_json::from_reader(file)?;
    Ok(result)
}
