//! Load → normalize → render, shared by every subcommand.

use anyhow::Context;
use roster_core::{export, CanonicalTable, Normalizer, RawTable};
use std::path::Path;

/// How `export` and `extract` print the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns for reading in a terminal.
    #[default]
    Grid,
    Csv,
    /// Array of objects keyed by column name.
    Json,
}

/// The file name used for format detection and titles.
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Decode the file at `path` and run the full normalization pipeline.
pub fn load_roster(path: &Path, normalizer: &Normalizer) -> anyhow::Result<CanonicalTable> {
    let raw = roster_sources::load_path(path)
        .with_context(|| format!("could not load {}", path.display()))?;
    let table = normalizer
        .normalize(&file_label(path), raw)
        .with_context(|| format!("could not normalize {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = table.len(), "roster loaded");
    Ok(table)
}

/// Decode the file at `path` and remove only its index artifacts.
pub fn load_raw(path: &Path, normalizer: &Normalizer) -> anyhow::Result<RawTable> {
    let mut raw = roster_sources::load_path(path)
        .with_context(|| format!("could not load {}", path.display()))?;
    normalizer.strip_index(&mut raw);
    Ok(raw)
}

/// Read a plain-text roster listing and run it through the pipeline.
pub fn extract_roster(path: &Path, normalizer: &Normalizer) -> anyhow::Result<CanonicalTable> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    let raw = roster_sources::text::extract(&text);
    tracing::debug!(path = %path.display(), rows = raw.row_count(), "extracted text roster");
    normalizer
        .normalize_table(raw)
        .with_context(|| format!("could not normalize {}", path.display()))
}

/// Render `table` for stdout.
pub fn render(table: &CanonicalTable, format: OutputFormat, max_width: usize) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Grid => export::render_grid(table.columns.as_slice(), &table.rows, max_width),
        OutputFormat::Csv => export::to_csv(table.columns.as_slice(), &table.rows)?,
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&export::to_json(table))?;
            out.push('\n');
            out
        }
    })
}
