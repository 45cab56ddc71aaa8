//! JSON report sink.
//!
//! Writes the orchestrator output to disk without alteration: an array of
//! qualifying records, or `null` when nothing qualified.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::types::ArbitrageResult;

/// Serialize the scan result to `path`.
pub fn write_report(path: &Path, results: &Option<Vec<ArbitrageResult>>) -> Result<()> {
    let json = serde_json::to_string_pretty(results)
        .context("Failed to serialize arbitrage report")?;

    fs::write(path, json)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    match results {
        Some(list) => info!(
            "[REPORT] Wrote {} arbitrage records to {}",
            list.len(),
            path.display()
        ),
        None => info!(
            "[REPORT] No arbitrage found, wrote null report to {}",
            path.display()
        ),
    }

    Ok(())
}
