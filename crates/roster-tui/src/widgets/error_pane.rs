//! Error pane: replaces the grid when the file could not be loaded or
//! normalized. The message is shown exactly as produced.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

pub struct ErrorPane<'a> {
    title: &'a str,
    message: &'a str,
    theme: &'a Theme,
}

impl<'a> ErrorPane<'a> {
    pub fn new(title: &'a str, message: &'a str, theme: &'a Theme) -> Self {
        Self { title, message, theme }
    }
}

impl Widget for ErrorPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .border_style(self.theme.error);

        let mut lines = vec![
            Line::from(Span::styled("Could not display this file:", self.theme.error)),
            Line::default(),
        ];
        lines.extend(self.message.lines().map(|l| Line::from(l.to_string())));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Press q to quit.",
            Style::default().add_modifier(Modifier::DIM),
        )));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
