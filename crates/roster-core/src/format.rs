//! Recognised tabular file formats, detected from the file name.

use std::path::Path;

/// Tabular formats roster can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableFormat {
    Xlsx,
    Xls,
    Csv,
}

impl TableFormat {
    /// Detect the format from the text after the last `.` of the file name,
    /// case-insensitively. A name without a dot has no recognised format.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, ext) = base_name(file_name).rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "xlsx" => Some(TableFormat::Xlsx),
            "xls" => Some(TableFormat::Xls),
            "csv" => Some(TableFormat::Csv),
            _ => None,
        }
    }

    /// Extension as shown in error messages (everything after the last dot,
    /// or the whole name when there is none).
    pub fn extension_of(file_name: &str) -> &str {
        let base = base_name(file_name);
        base.rsplit_once('.').map_or(base, |(_, ext)| ext)
    }
}

fn base_name(file_name: &str) -> &str {
    Path::new(file_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(file_name)
}

impl std::fmt::Display for TableFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableFormat::Xlsx => write!(f, "xlsx"),
            TableFormat::Xls => write!(f, "xls"),
            TableFormat::Csv => write!(f, "csv"),
        }
    }
}
