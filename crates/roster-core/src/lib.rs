//! roster-core: table model and normalization pipeline for roster.
//!
//! This crate holds everything that does not touch a file or a terminal:
//! the cell/table types, the versioned column layouts, the normalizer,
//! display-width computation, export formatting, and configuration.
//!
//! # Pipeline
//!
//! ```text
//! bytes ──► roster-sources ──► RawTable ──► Normalizer ──► CanonicalTable ──► viewer / export
//! ```

pub mod config;
pub mod display;
pub mod export;
pub mod format;
pub mod layout;
pub mod normalizer;
pub mod types;

pub use format::TableFormat;
pub use layout::ColumnLayout;
pub use normalizer::{normalize, NormalizeError, Normalizer};
pub use types::{CanonicalField, CanonicalTable, Cell, Column, RawTable};
