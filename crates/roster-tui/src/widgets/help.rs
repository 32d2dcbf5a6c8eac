//! Help popup: centred floating overlay listing all keybindings.
//!
//! Toggle with `?`; close with `?` or `Escape`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("q  /  Ctrl+c", "Quit"),
    ("↑ k  /  ↓ j", "Move one row"),
    ("PageUp  /  Ctrl+u", "Move up one page"),
    ("PageDown / Ctrl+d", "Move down one page"),
    ("g  /  Home", "Jump to first row"),
    ("G  /  End", "Jump to last row"),
    ("← h  /  → l", "Scroll columns"),
    (":", "Command: q, help, theme <name>, stripes, top, bottom"),
    ("?", "Toggle this help popup"),
];

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(80, BINDINGS.len() as u16 + 2, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" roster: keybindings (? to close) ")
            .border_style(self.theme.border_unfocused.add_modifier(Modifier::BOLD));

        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<22}", key),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*desc),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_is_centred_and_clamped() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(80, 11, area), Rect::new(10, 14, 80, 11));
        let small = Rect::new(0, 0, 40, 5);
        assert_eq!(centered_rect(80, 11, small), Rect::new(0, 0, 40, 5));
    }
}
