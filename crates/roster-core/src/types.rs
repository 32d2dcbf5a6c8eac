//! Core types for roster-core.
//!
//! This module defines the data structures shared across all crates: the
//! [`Cell`] value, the column-oriented [`RawTable`] produced by the decoders,
//! the row-oriented [`CanonicalTable`] produced by the normalizer, and the
//! [`CanonicalField`] names.

use serde::{Deserialize, Serialize};

/// A single spreadsheet cell value.
///
/// `Empty` is the missing-value marker: blank cells, error cells, and numeric
/// fields that could not be parsed all end up here.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    /// Build a cell from decoded text. Empty strings become [`Cell::Empty`].
    pub fn text(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(s)
        }
    }

    /// True for `Empty` and for text that is blank after trimming.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) | Cell::Bool(_) => false,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The cell as a row index value: a non-negative whole number, either
    /// stored as a number or as plain digit text.
    pub fn as_index(&self) -> Option<u64> {
        match self {
            Cell::Number(n) if n.is_finite() && *n >= 0.0 && n.fract() == 0.0 => Some(*n as u64),
            Cell::Text(s) => {
                let s = s.trim();
                if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
                    s.parse().ok()
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => f.write_str(s),
            // Whole numbers print without a trailing `.0`
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::text(s)
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::text(s)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::Number(n as f64)
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Cell::Bool(b)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Cell::Empty)
    }
}

// ---------------------------------------------------------------------------
// Canonical field names
// ---------------------------------------------------------------------------

/// The nine columns of a normalized roster, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalField {
    #[serde(rename = "Name")]
    Name,
    #[serde(rename = "Gender")]
    Gender,
    #[serde(rename = "Age")]
    Age,
    #[serde(rename = "Designation")]
    Designation,
    #[serde(rename = "Years Experience")]
    YearsExperience,
    #[serde(rename = "Language Ability")]
    LanguageAbility,
    #[serde(rename = "Certification Level")]
    CertificationLevel,
    #[serde(rename = "Skill")]
    Skill,
    #[serde(rename = "Project Join Date")]
    ProjectJoinDate,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 9] = [
        CanonicalField::Name,
        CanonicalField::Gender,
        CanonicalField::Age,
        CanonicalField::Designation,
        CanonicalField::YearsExperience,
        CanonicalField::LanguageAbility,
        CanonicalField::CertificationLevel,
        CanonicalField::Skill,
        CanonicalField::ProjectJoinDate,
    ];

    /// Column header used in canonical tables.
    pub fn column_name(self) -> &'static str {
        match self {
            CanonicalField::Name => "Name",
            CanonicalField::Gender => "Gender",
            CanonicalField::Age => "Age",
            CanonicalField::Designation => "Designation",
            CanonicalField::YearsExperience => "Years Experience",
            CanonicalField::LanguageAbility => "Language Ability",
            CanonicalField::CertificationLevel => "Certification Level",
            CanonicalField::Skill => "Skill",
            CanonicalField::ProjectJoinDate => "Project Join Date",
        }
    }
}

impl std::fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column_name())
    }
}

// ---------------------------------------------------------------------------
// Raw table
// ---------------------------------------------------------------------------

/// A named column of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self { name: name.into(), cells }
    }
}

/// Spreadsheet data as decoded, before column identity is resolved.
///
/// Column-oriented. Every column holds `row_count()` cells; [`RawTable::push_column`]
/// pads or extends the existing columns with [`Cell::Empty`] to keep that true.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTable {
    columns: Vec<Column>,
}

impl RawTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from header names and row-major records. Short records
    /// are padded with `Empty`; extra trailing fields are ignored.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let mut columns: Vec<Column> = headers
            .into_iter()
            .map(|name| Column::new(name, Vec::with_capacity(rows.len())))
            .collect();
        for row in rows {
            let mut row = row.into_iter();
            for column in columns.iter_mut() {
                column.cells.push(row.next().unwrap_or_default());
            }
        }
        Self { columns }
    }

    pub fn push_column(&mut self, column: Column) {
        let rows = self.row_count().max(column.cells.len());
        self.columns.push(column);
        for c in self.columns.iter_mut() {
            c.cells.resize(rows, Cell::Empty);
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }

    /// Remove every column named `name`. Returns true if anything was removed.
    pub fn drop_column(&mut self, name: &str) -> bool {
        let before = self.columns.len();
        self.columns.retain(|c| c.name != name);
        self.columns.len() != before
    }

    /// Keep only the columns for which `keep` returns true.
    pub fn retain_columns(&mut self, keep: impl FnMut(&Column) -> bool) {
        self.columns.retain(keep);
    }

    /// Rename the first column named `from`. Returns true if it was present.
    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        match self.columns.iter_mut().find(|c| c.name == from) {
            Some(column) => {
                column.name = to.to_string();
                true
            }
            None => false,
        }
    }

    /// Row-major copy of the cells.
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        (0..self.row_count())
            .map(|r| self.columns.iter().map(|c| c.cells[r].clone()).collect())
            .collect()
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<Cell>>) {
        let rows = self.rows();
        let headers = self.columns.into_iter().map(|c| c.name).collect();
        (headers, rows)
    }
}

// ---------------------------------------------------------------------------
// Canonical table
// ---------------------------------------------------------------------------

/// Data after renaming, filtering, coercion, sorting and rotation.
///
/// Row-oriented: each row holds one cell per entry in `columns`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CanonicalTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl CanonicalTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn field_index(&self, field: CanonicalField) -> Option<usize> {
        self.column_index(field.column_name())
    }

    /// All values of one canonical field, in row order. `None` if the table
    /// has no such column.
    pub fn field_values(&self, field: CanonicalField) -> Option<Vec<&Cell>> {
        let idx = self.field_index(field)?;
        Some(self.rows.iter().map(|row| &row[idx]).collect())
    }

    /// Years Experience of each row; `None` where missing or where the
    /// column itself is absent.
    pub fn experience(&self) -> Vec<Option<f64>> {
        match self.field_index(CanonicalField::YearsExperience) {
            Some(idx) => self.rows.iter().map(|row| row[idx].as_f64()).collect(),
            None => vec![None; self.rows.len()],
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
