//! Plain-text roster extraction.
//!
//! Handles rosters copied out of documents as text: one person per line,
//! fields separated by tabs, runs of two or more spaces, or `|` (outer pipes
//! of a table-style line are ignored). Header and rule lines (starting with
//! `Name` or `---`) are skipped, as is any line with fewer than nine fields.
//! The first nine fields map to the canonical columns in order, so the
//! result needs no column layout.

use regex::Regex;
use roster_core::{CanonicalField, Cell, RawTable};
use std::sync::OnceLock;

fn separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r"\t+|\s{2,}|\|").expect("separator regex is valid"))
}

/// Extract roster rows from text into a table with canonical column names.
pub fn extract(text: &str) -> RawTable {
    let headers: Vec<String> = CanonicalField::ALL
        .iter()
        .map(|f| f.column_name().to_string())
        .collect();

    let mut skipped = 0usize;
    let rows: Vec<Vec<Cell>> = text
        .lines()
        .map(|line| line.trim().trim_matches('|').trim())
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with("Name") && !line.starts_with("---"))
        .filter_map(|line| {
            let fields: Vec<&str> = separator().split(line).collect();
            if fields.len() < CanonicalField::ALL.len() {
                skipped += 1;
                return None;
            }
            Some(
                fields
                    .into_iter()
                    .take(CanonicalField::ALL.len())
                    .map(|f| Cell::text(f.trim()))
                    .collect(),
            )
        })
        .collect();

    if skipped > 0 {
        tracing::debug!(skipped, "text lines with too few fields ignored");
    }
    RawTable::from_rows(headers, rows)
}
