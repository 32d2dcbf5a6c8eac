//! What the viewer shows: a table, or the error that prevented one.

use roster_core::{CanonicalTable, Cell, RawTable};

/// A rectangular table ready for the grid widget.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    /// Shown in the grid border, usually the file name.
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl TableView {
    pub fn from_canonical(title: impl Into<String>, table: CanonicalTable) -> Self {
        Self {
            title: title.into(),
            headers: table.columns,
            rows: table.rows,
        }
    }

    /// A raw sheet, columns in source order.
    pub fn from_raw(title: impl Into<String>, table: RawTable) -> Self {
        let (headers, rows) = table.into_parts();
        Self {
            title: title.into(),
            headers,
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Startup content for the viewer.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Table(TableView),
    /// Loading or normalizing failed; the message is displayed verbatim.
    Failed { title: String, message: String },
}

impl Content {
    /// Build from a pipeline result, keeping the full error chain.
    pub fn from_result(title: impl Into<String>, result: anyhow::Result<TableView>) -> Self {
        let title = title.into();
        match result {
            Ok(view) => Content::Table(view),
            Err(err) => Content::Failed {
                title,
                message: format!("{err:#}"),
            },
        }
    }
}
