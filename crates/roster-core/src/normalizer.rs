//! Normalizer: turns a decoded [`RawTable`] into a sorted [`CanonicalTable`].
//!
//! The pipeline runs in a fixed order:
//!
//! 1. drop index artifacts (named index columns, and unnamed columns holding `0..N-1`)
//! 2. drop the ordinal marker column (`No.`)
//! 3. rename placeholders to canonical fields per the [`ColumnLayout`], unless
//!    the field already has its own header
//! 4. drop rows without a Name
//! 5. coerce Years Experience to a number, or missing
//! 6. sort by Years Experience, descending, missing last
//! 7. rotate the last row to the front
//!
//! Only two conditions abort the call: an unrecognised file format and a
//! missing Name column. Everything wrong with an individual row is repaired
//! in place (row dropped, or the field set to [`Cell::Empty`]).

use crate::format::TableFormat;
use crate::layout::{is_placeholder, ColumnLayout};
use crate::types::{CanonicalField, CanonicalTable, Cell, RawTable};
use std::cmp::Ordering;

/// Fatal normalization errors. Both are shown to the user verbatim.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("unsupported file format {extension:?} for {file_name:?}: expected .xlsx, .xls or .csv")]
    UnsupportedFormat { file_name: String, extension: String },
    #[error("required column {0:?} not found after applying the column layout")]
    MissingColumn(String),
}

impl NormalizeError {
    pub fn unsupported(file_name: &str) -> Self {
        NormalizeError::UnsupportedFormat {
            file_name: file_name.to_string(),
            extension: TableFormat::extension_of(file_name).to_string(),
        }
    }
}

/// Stateless normalization pipeline bound to one [`ColumnLayout`].
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    layout: ColumnLayout,
}

impl Normalizer {
    pub fn new(layout: ColumnLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    /// Normalize a table decoded from `file_name`.
    ///
    /// Fails with [`NormalizeError::UnsupportedFormat`] unless the file name
    /// ends in `.xlsx`, `.xls` or `.csv`.
    pub fn normalize(
        &self,
        file_name: &str,
        raw: RawTable,
    ) -> Result<CanonicalTable, NormalizeError> {
        if TableFormat::from_file_name(file_name).is_none() {
            return Err(NormalizeError::unsupported(file_name));
        }
        tracing::debug!(file_name, layout = %self.layout.name, "normalizing");
        self.normalize_table(raw)
    }

    /// Remove only the index artifacts, leaving every other column and row
    /// untouched. Used to show a sheet as it was exported.
    pub fn strip_index(&self, raw: &mut RawTable) {
        drop_index_artifacts(raw, &self.layout);
    }

    /// Run the pipeline on a table that did not come from a file.
    pub fn normalize_table(&self, mut raw: RawTable) -> Result<CanonicalTable, NormalizeError> {
        let raw_rows = raw.row_count();

        drop_index_artifacts(&mut raw, &self.layout);
        if let Some(seq) = &self.layout.sequence_column {
            if raw.drop_column(seq) {
                tracing::debug!(column = %seq, "dropped sequence column");
            }
        }
        apply_renames(&mut raw, &self.layout);

        let name_col = CanonicalField::Name.column_name();
        if !raw.has_column(name_col) {
            return Err(NormalizeError::MissingColumn(name_col.to_string()));
        }

        let (columns, rows) = raw.into_parts();
        let mut table = CanonicalTable { columns, rows };

        let name_idx = table.field_index(CanonicalField::Name).unwrap_or_default();
        table.rows.retain(|row| !row[name_idx].is_blank());
        tracing::debug!(
            kept = table.rows.len(),
            dropped = raw_rows - table.rows.len(),
            "filtered rows without a name"
        );

        match table.field_index(CanonicalField::YearsExperience) {
            Some(idx) => {
                for row in table.rows.iter_mut() {
                    let cell = std::mem::take(&mut row[idx]);
                    row[idx] = coerce_experience(cell);
                }
            }
            None => tracing::warn!(
                "no {} column; rows keep their order apart from the rotation",
                CanonicalField::YearsExperience
            ),
        }

        sort_by_experience(&mut table);
        rotate_last_to_front(&mut table.rows);

        Ok(table)
    }
}

/// Normalize with the built-in layout.
pub fn normalize(file_name: &str, raw: RawTable) -> Result<CanonicalTable, NormalizeError> {
    Normalizer::default().normalize(file_name, raw)
}

// ---------------------------------------------------------------------------
// Pipeline steps
// ---------------------------------------------------------------------------

fn drop_index_artifacts(raw: &mut RawTable, layout: &ColumnLayout) {
    let rows = raw.row_count();
    raw.retain_columns(|column| {
        let named_index = layout.index_columns.iter().any(|c| *c == column.name);
        let serialized_index = rows > 0
            && is_placeholder(&column.name)
            && !layout.renames_column(&column.name)
            && is_row_index(&column.cells);
        if named_index || serialized_index {
            tracing::debug!(column = %column.name, "dropped index column");
            false
        } else {
            true
        }
    });
}

/// True when the cells read exactly `0, 1, 2, …` in order.
fn is_row_index(cells: &[Cell]) -> bool {
    cells
        .iter()
        .enumerate()
        .all(|(i, cell)| cell.as_index() == Some(i as u64))
}

fn apply_renames(raw: &mut RawTable, layout: &ColumnLayout) {
    for rename in &layout.renames {
        let target = rename.field.column_name();
        if rename.placeholder == target || !raw.has_column(&rename.placeholder) {
            continue;
        }
        // A header that already names the field wins over the placeholder
        if raw.has_column(target) {
            tracing::warn!(
                placeholder = %rename.placeholder,
                column = target,
                layout = %layout.name,
                "field already present, placeholder left unrenamed"
            );
            continue;
        }
        if raw.rename_column(&rename.placeholder, target) {
            tracing::debug!(from = %rename.placeholder, to = target, "renamed column");
        }
    }
}

/// Strip everything but ASCII digits and `.`, then parse. Unparseable values
/// become [`Cell::Empty`].
pub fn coerce_experience(cell: Cell) -> Cell {
    match cell {
        Cell::Number(n) if n.is_finite() => Cell::Number(n),
        Cell::Text(s) => {
            let cleaned: String = s.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
            match cleaned.parse::<f64>() {
                Ok(n) => Cell::Number(n),
                Err(_) => {
                    if !s.trim().is_empty() {
                        tracing::debug!(value = %s, "experience value not numeric");
                    }
                    Cell::Empty
                }
            }
        }
        _ => Cell::Empty,
    }
}

/// Descending; missing values sort after every number. Stable.
fn sort_by_experience(table: &mut CanonicalTable) {
    let Some(idx) = table.field_index(CanonicalField::YearsExperience) else {
        return;
    };
    table
        .rows
        .sort_by(|a, b| experience_order(a[idx].as_f64(), b[idx].as_f64()));
}

fn experience_order(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn rotate_last_to_front<T>(rows: &mut [T]) {
    if !rows.is_empty() {
        rows.rotate_right(1);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
