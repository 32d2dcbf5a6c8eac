//! Column width computation shared by the grid export and the TUI viewer.

use crate::types::Cell;

/// Default cap on a column's display width, in characters.
pub const DEFAULT_MAX_COLUMN_WIDTH: usize = 30;

/// Width of each column: the longest of its header and its cells' display
/// strings, capped at `max_width`, never less than 1.
pub fn column_widths<S: AsRef<str>>(headers: &[S], rows: &[Vec<Cell>], max_width: usize) -> Vec<usize> {
    let cap = max_width.max(1);
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let longest_cell = rows
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| char_len(&cell.to_string()))
                .max()
                .unwrap_or(0);
            char_len(header.as_ref()).max(longest_cell).clamp(1, cap)
        })
        .collect()
}

/// Fit `s` into `width` characters, replacing the tail with `…` when it is
/// too long.
pub fn truncate(s: &str, width: usize) -> String {
    if char_len(s) <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
