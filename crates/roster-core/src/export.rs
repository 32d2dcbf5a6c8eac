//! Export: renders a table as an aligned text grid, CSV, or JSON.
//!
//! All three take headers plus row-major cells so they work for both the
//! canonical table and a raw sheet.

use crate::display::{column_widths, truncate};
use crate::types::{CanonicalTable, Cell};
use serde_json::{Map, Value};

/// Aligned plain-text grid: header line, a rule, then one line per row.
/// Columns are separated by two spaces; trailing padding is trimmed.
pub fn render_grid<S: AsRef<str>>(headers: &[S], rows: &[Vec<Cell>], max_width: usize) -> String {
    let widths = column_widths(headers, rows, max_width);
    let mut out = String::new();

    let header_cells: Vec<String> = headers.iter().map(|h| AsRef::<str>::as_ref(h).to_string()).collect();
    push_line(&mut out, &header_cells, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);

    for row in rows {
        let cells: Vec<String> = (0..widths.len())
            .map(|i| row.get(i).map(Cell::to_string).unwrap_or_default())
            .collect();
        push_line(&mut out, &cells, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let fitted = truncate(cell, *width);
            let pad = width.saturating_sub(fitted.chars().count());
            format!("{fitted}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// CSV with a header row. Missing values are empty fields.
pub fn to_csv<S: AsRef<str>>(headers: &[S], rows: &[Vec<Cell>]) -> Result<String, csv::Error> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
    let header_row: Vec<&str> = headers.iter().map(|h| AsRef::<str>::as_ref(h)).collect();
    writer.write_record(&header_row)?;
    for row in rows {
        writer.write_record(row.iter().map(Cell::to_string))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// JSON array with one object per row, keyed by column name.
pub fn to_json(table: &CanonicalTable) -> Value {
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let object: Map<String, Value> = table
                .columns
                .iter()
                .zip(row)
                .map(|(name, cell)| (name.clone(), cell_to_json(cell)))
                .collect();
            Value::Object(object)
        })
        .collect();
    Value::Array(rows)
}

fn cell_to_json(cell: &Cell) -> Value {
    match cell {
        Cell::Empty => Value::Null,
        Cell::Text(s) => Value::String(s.clone()),
        Cell::Number(n) => serde_json::Number::from_f64(*n).map_or(Value::Null, Value::Number),
        Cell::Bool(b) => Value::Bool(*b),
    }
}
