//! Status line: record count on the left, cursor position and keybinding
//! hints on the right.

use crate::theme::Theme;
use crate::widgets::grid::GridState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBar<'a> {
    grid: &'a GridState,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(grid: &'a GridState, theme: &'a Theme) -> Self {
        Self { grid, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let total = self.grid.view.len();
        let position = if total == 0 { 0 } else { self.grid.cursor + 1 };
        let columns = self.grid.view.headers.len();

        let left = Line::from(vec![
            Span::styled(" Total Records: ", self.theme.status_text),
            Span::styled(total.to_string(), self.theme.status_count),
            Span::styled(
                format!("   row {position}/{total}   col {}/{columns}", self.grid.col_offset + 1),
                self.theme.status_text,
            ),
        ]);
        buf.set_line(area.x, area.y, &left, area.width);

        let hint = " q:quit  ?:help  ::command ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        if hint_x > area.x + left.width() as u16 {
            buf.set_string(hint_x, area.y, hint, Style::default().add_modifier(Modifier::DIM));
        }
    }
}
