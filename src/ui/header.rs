use crate::ui::joke::JokeState;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, LAUGH_NEGATIVE, LAUGH_POSITIVE,
};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, joke: &JokeState, favorites: usize) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, status_color) = if joke.loading {
            ("Loading", ACCENT)
        } else if joke.has_error() {
            ("Offline", LAUGH_NEGATIVE)
        } else {
            ("Ready", LAUGH_POSITIVE)
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("Jokebox", Style::default().fg(ACCENT)),
            Span::styled("  │  ", separator_style),
            Span::styled(status, Style::default().fg(status_color)),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{favorites} favorites"), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
