//! roster TUI: ratatui grid viewer.
//!
//! The caller loads and normalizes the file, then hands the outcome to
//! [`run`] as a [`Content`]. Failures are displayed, not retried.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod view;
pub mod widgets;

pub use app::App;
pub use view::{Content, TableView};

use roster_core::config::Config;

/// Open the viewer on `content` and block until the user quits.
pub fn run(content: Content, config: &Config) -> anyhow::Result<()> {
    App::new(content, config).run()
}
