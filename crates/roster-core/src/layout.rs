//! Column layouts: the versioned mapping from placeholder column names to
//! canonical fields.
//!
//! Spreadsheets exported without a proper header row come back from the
//! decoders with positional placeholder names (`Unnamed: 2`, `Unnamed: 3`, …).
//! A [`ColumnLayout`] states which placeholder holds which [`CanonicalField`],
//! which columns are index artifacts, and which column is the ordinal marker.
//!
//! [`ColumnLayout::hr_roster_v1`] is the built-in layout. Others can be
//! supplied through the `[layout]` section of `config.toml`.

use crate::types::CanonicalField;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Errors raised when a layout fails validation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("layout {name:?}: version must be at least 1")]
    InvalidVersion { name: String },
    #[error("layout {name:?}: placeholder {placeholder:?} is mapped more than once")]
    DuplicatePlaceholder { name: String, placeholder: String },
    #[error("layout {name:?}: field {field} is targeted more than once")]
    DuplicateField { name: String, field: CanonicalField },
}

/// One `placeholder → field` entry of a layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rename {
    pub placeholder: String,
    pub field: CanonicalField,
}

impl Rename {
    pub fn new(placeholder: impl Into<String>, field: CanonicalField) -> Self {
        Self { placeholder: placeholder.into(), field }
    }
}

/// Versioned placeholder-to-field mapping.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColumnLayout {
    pub name: String,
    pub version: u32,
    /// Columns always dropped as re-serialized row indices.
    #[serde(default)]
    pub index_columns: Vec<String>,
    /// Ordinal marker column (e.g. `No.`) dropped when present.
    #[serde(default)]
    pub sequence_column: Option<String>,
    /// Renames, applied in declared order.
    pub renames: Vec<Rename>,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::hr_roster_v1()
    }
}

impl ColumnLayout {
    /// The HR roster sheet layout: row index in column A, `No.` in column B,
    /// the nine roster fields in columns C through K.
    pub fn hr_roster_v1() -> Self {
        let renames = CanonicalField::ALL
            .iter()
            .enumerate()
            .map(|(i, field)| Rename::new(placeholder_name(i + 2), *field))
            .collect();
        Self {
            name: "hr-roster".to_string(),
            version: 1,
            index_columns: vec![placeholder_name(0)],
            sequence_column: Some("No.".to_string()),
            renames,
        }
    }

    /// A layout that renames nothing, for tables whose headers are already
    /// canonical.
    pub fn identity() -> Self {
        Self {
            name: "identity".to_string(),
            version: 1,
            index_columns: Vec::new(),
            sequence_column: None,
            renames: Vec::new(),
        }
    }

    /// Check the layout for internal consistency.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.version == 0 {
            return Err(LayoutError::InvalidVersion { name: self.name.clone() });
        }
        let mut placeholders = HashSet::new();
        let mut fields = HashSet::new();
        for rename in &self.renames {
            if !placeholders.insert(rename.placeholder.as_str()) {
                return Err(LayoutError::DuplicatePlaceholder {
                    name: self.name.clone(),
                    placeholder: rename.placeholder.clone(),
                });
            }
            if !fields.insert(rename.field) {
                return Err(LayoutError::DuplicateField {
                    name: self.name.clone(),
                    field: rename.field,
                });
            }
        }
        Ok(())
    }

    /// True if `column` is the source of one of this layout's renames.
    pub fn renames_column(&self, column: &str) -> bool {
        self.renames.iter().any(|r| r.placeholder == column)
    }

    pub fn placeholder_for(&self, field: CanonicalField) -> Option<&str> {
        self.renames
            .iter()
            .find(|r| r.field == field)
            .map(|r| r.placeholder.as_str())
    }
}

// ---------------------------------------------------------------------------
// Placeholder names
// ---------------------------------------------------------------------------

/// Placeholder header for the blank header cell at zero-based `position`.
pub fn placeholder_name(position: usize) -> String {
    format!("Unnamed: {position}")
}

/// True for auto-generated header names: blank, or `Unnamed: N`.
pub fn is_placeholder(name: &str) -> bool {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    let re = PLACEHOLDER
        .get_or_init(|| Regex::new(r"^Unnamed: \d+$").expect("placeholder regex is valid"));
    name.trim().is_empty() || re.is_match(name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
