//! Table grid: the main pane, one screen row per table row.
//!
//! # Navigation
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Move cursor up one row (scrolls view if needed) |
//! | `↓` / `j` | Move cursor down one row |
//! | `PageUp` / `Ctrl+u` | Move up one page |
//! | `PageDown` / `Ctrl+d` | Move down one page |
//! | `g` / `G` | Jump to first / last row |
//! | `←` / `h`, `→` / `l` | Scroll columns left / right |
//!
//! # Scroll semantics
//!
//! `cursor` is an absolute row index and `offset` is the first visible row.
//! The cursor is always kept within the visible window; moving it past an
//! edge scrolls the window. `col_offset` is the first visible column.

use std::cell::Cell as CachedCell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use crate::view::TableView;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    text::Line,
    widgets::{
        Block, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget,
        Table, Widget,
    },
};
use roster_core::display::{column_widths, truncate};

const COLUMN_SPACING: u16 = 2;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

pub struct GridState {
    pub view: TableView,
    widths: Vec<usize>,
    /// Absolute index of the highlighted row.
    pub cursor: usize,
    /// Index of the first visible row.
    pub offset: usize,
    /// Index of the first visible column.
    pub col_offset: usize,
    /// Whether even rows get the stripe style.
    pub striped: bool,
    /// Body rows that fit on screen, cached from the last render so
    /// `handle()` can page and keep the cursor in view.
    last_height: CachedCell<usize>,
}

impl GridState {
    pub fn new(view: TableView, max_column_width: usize, striped: bool) -> Self {
        let widths = column_widths(view.headers.as_slice(), &view.rows, max_column_width);
        Self {
            view,
            widths,
            cursor: 0,
            offset: 0,
            col_offset: 0,
            striped,
            last_height: CachedCell::new(20),
        }
    }

    /// Display width of every column, in header order.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    fn last_row(&self) -> usize {
        self.view.len().saturating_sub(1)
    }

    /// Pull the window so the cursor is visible.
    fn follow_cursor(&mut self) {
        let height = self.height();
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + height {
            self.offset = self.cursor + 1 - height;
        }
    }

    /// Handle a navigation event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        let page = self.height();
        match event {
            AppEvent::Nav(Direction::Up) => self.cursor = self.cursor.saturating_sub(1),
            AppEvent::Nav(Direction::Down) => self.cursor = (self.cursor + 1).min(self.last_row()),
            AppEvent::Nav(Direction::Left) => self.col_offset = self.col_offset.saturating_sub(1),
            AppEvent::Nav(Direction::Right) => {
                if self.col_offset + 1 < self.view.headers.len() {
                    self.col_offset += 1;
                }
            }
            AppEvent::ScrollUp => self.cursor = self.cursor.saturating_sub(page),
            AppEvent::ScrollDown => self.cursor = (self.cursor + page).min(self.last_row()),
            AppEvent::ScrollToTop => self.cursor = 0,
            AppEvent::ScrollToBottom => self.cursor = self.last_row(),
            _ => return,
        }
        self.follow_cursor();
        tracing::debug!(
            cursor = self.cursor,
            offset = self.offset,
            col_offset = self.col_offset,
            "grid: moved"
        );
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct Grid<'a> {
    state: &'a GridState,
    theme: &'a Theme,
}

impl<'a> Grid<'a> {
    pub fn new(state: &'a GridState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn row_style(&self, index: usize) -> Style {
        if index == self.state.cursor {
            self.theme.selected
        } else if self.state.striped && index % 2 == 0 {
            self.theme.stripe
        } else {
            Style::default()
        }
    }
}

impl Widget for Grid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let block = Block::bordered()
            .title(format!(" {} ", state.view.title))
            .border_style(self.theme.border_focused);
        let inner = block.inner(area);
        block.render(area, buf);

        // One row for the header, the rest for the body
        let height = (inner.height as usize).saturating_sub(1);
        // Cache for handle(); draw always runs before handle()
        state.last_height.set(height.max(1));

        let table_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        let first_col = state.col_offset.min(state.view.headers.len());
        let widths = &state.widths[first_col..];

        let header = Row::new(
            state.view.headers[first_col..]
                .iter()
                .zip(widths)
                .map(|(h, w)| truncate(h, *w)),
        )
        .style(self.theme.header);

        let total = state.view.len();
        let start = state.offset.min(total);
        let end = (start + height).min(total);

        let rows: Vec<Row> = state.view.rows[start..end]
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let cells = row
                    .iter()
                    .skip(first_col)
                    .zip(widths)
                    .map(|(cell, w)| truncate(&cell.to_string(), *w));
                Row::new(cells).style(self.row_style(start + i))
            })
            .collect();

        let constraints = widths.iter().map(|w| Constraint::Length(*w as u16));
        Widget::render(
            Table::new(rows, constraints)
                .header(header)
                .column_spacing(COLUMN_SPACING),
            table_area,
            buf,
        );

        if total == 0 {
            let empty_area = Rect {
                y: table_area.y.saturating_add(1),
                height: table_area.height.saturating_sub(1),
                ..table_area
            };
            Paragraph::new(Line::styled("no records", self.theme.empty_cell))
                .render(empty_area, buf);
            return;
        }

        let mut sb_state = ScrollbarState::new(total)
            .position(state.cursor)
            .viewport_content_length(height);
        StatefulWidget::render(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            sb_area,
            buf,
            &mut sb_state,
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
