//! roster: roster spreadsheet normalizer and terminal table viewer.
//!
//! This crate wires the layers together for the `roster` binary and exposes
//! the glue as [`pipeline`] so integration tests can drive it directly.
//!
//! # Architecture
//!
//! ```text
//! file ──► roster-sources ──► RawTable ──► roster-core Normalizer ──► CanonicalTable
//!                                                                     │
//!                                        roster-tui grid  ◄───────────┤
//!                                        export (grid/csv/json) ◄─────┘
//! ```

pub mod pipeline;

pub use pipeline::{extract_roster, load_raw, load_roster, render, OutputFormat};
