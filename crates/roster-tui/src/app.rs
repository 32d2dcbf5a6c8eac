//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.

use crate::{
    commands::Command,
    event::{self, AppEvent},
    theme::Theme,
    view::{Content, TableView},
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        error_pane::ErrorPane,
        grid::{Grid, GridState},
        help::HelpPopup,
        status_bar::StatusBar,
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use roster_core::config::Config;
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// Focus + body types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Grid,
    /// Vim-style `:` command line is active.
    Command,
}

/// The main pane: the grid, or the error that replaced it.
pub enum Body {
    Grid(GridState),
    Failed { title: String, message: String },
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub body: Body,
    pub focus: Focus,
    pub theme: Theme,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub quit: bool,
}

impl AppState {
    pub fn new(content: Content, config: &Config) -> Self {
        let settings = &config.display;
        let theme = Theme::by_name(&settings.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %settings.theme, "unknown theme in config, using default");
            Theme::load_default()
        });

        let body = match content {
            Content::Table(view) => Body::Grid(GridState::new(
                view,
                settings.max_column_width,
                settings.striped_rows,
            )),
            Content::Failed { title, message } => Body::Failed { title, message },
        };

        Self {
            body,
            focus: Focus::Grid,
            theme,
            show_help: false,
            command_bar: CommandBarState::default(),
            quit: false,
        }
    }

    /// The table being shown, if loading succeeded.
    pub fn table(&self) -> Option<&TableView> {
        match &self.body {
            Body::Grid(grid) => Some(&grid.view),
            Body::Failed { .. } => None,
        }
    }

    /// Apply one event. Separate from the terminal loop so it can be driven
    /// directly.
    pub fn handle(&mut self, event: AppEvent) {
        // Help popup intercepts all events; only close keys pass through.
        if self.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Command mode intercepts all events.
        if self.focus == Focus::Command {
            match event {
                AppEvent::Quit => self.quit = true,
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    self.command_bar.clear();
                    self.focus = Focus::Grid;
                }
                AppEvent::Enter => {
                    let input = self.command_bar.input.clone();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            self.command_bar.clear();
                            self.focus = Focus::Grid;
                            self.execute(cmd);
                        }
                        Err(msg) if msg.is_empty() => {
                            self.command_bar.clear();
                            self.focus = Focus::Grid;
                        }
                        Err(msg) => {
                            // Show the error; bar stays open
                            self.command_bar.error = Some(msg);
                        }
                    }
                }
                other => self.command_bar.handle(&other),
            }
            return;
        }

        match event {
            AppEvent::Char('?') => {
                tracing::debug!("help popup opened");
                self.show_help = true;
            }
            AppEvent::Char(':') => {
                tracing::debug!("entering command mode");
                self.command_bar.clear();
                self.focus = Focus::Command;
            }
            AppEvent::Quit => {
                tracing::debug!("quit");
                self.quit = true;
            }
            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}
            other => {
                if let Body::Grid(grid) = &mut self.body {
                    grid.handle(&other);
                }
            }
        }
    }

    /// Execute a parsed [`Command`].
    fn execute(&mut self, cmd: Command) {
        match cmd {
            Command::Quit => self.quit = true,
            Command::Help => self.show_help = !self.show_help,
            Command::Theme(name) => match Theme::by_name(&name) {
                Some(theme) => self.theme = theme,
                None => {
                    self.focus = Focus::Command;
                    self.command_bar.error = Some(format!("unknown theme: {name}"));
                }
            },
            Command::Stripes => {
                if let Body::Grid(grid) = &mut self.body {
                    grid.striped = !grid.striped;
                }
            }
            Command::Top => self.handle(AppEvent::ScrollToTop),
            Command::Bottom => self.handle(AppEvent::ScrollToBottom),
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(content: Content, config: &Config) -> Self {
        App {
            state: AppState::new(content, config),
        }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping while the command bar is open
                        let app_event = if self.state.focus == Focus::Command {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.state.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.state.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: body | 1-line status bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(1)])
        .split(area);

    match &state.body {
        Body::Grid(grid) => {
            frame.render_widget(Grid::new(grid, &state.theme), vert[0]);
            frame.render_widget(StatusBar::new(grid, &state.theme), vert[1]);
        }
        Body::Failed { title, message } => {
            frame.render_widget(ErrorPane::new(title, message, &state.theme), area);
        }
    }

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect {
            y: area.bottom().saturating_sub(1),
            height: 1,
            ..area
        };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
