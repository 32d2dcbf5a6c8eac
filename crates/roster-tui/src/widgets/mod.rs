//! Ratatui widgets for the roster viewer.

pub mod command_bar;
pub mod error_pane;
pub mod grid;
pub mod help;
pub mod status_bar;
