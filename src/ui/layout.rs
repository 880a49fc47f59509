use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into the joke/error panel and, when shown, the favorites
/// panel below it. The top panel gets `top_height` rows, capped at the body.
pub fn body_panels(body: Rect, show_favorites: bool, top_height: u16) -> (Rect, Option<Rect>) {
    if !show_favorites {
        return (body, None);
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(top_height.min(body.height)),
            Constraint::Min(0),
        ])
        .split(body);
    (chunks[0], Some(chunks[1]))
}

/// Rows a bordered panel of `width` columns needs to show `lines` wrapped.
pub fn panel_height(lines: &[Line<'_>], width: u16) -> u16 {
    let inner = width.saturating_sub(2);
    lines
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
            wrapped_rows(&text, inner)
        })
        .fold(2, u16::saturating_add)
}

/// Greedy word wrap row count. Words wider than the row spill over.
fn wrapped_rows(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut rows = 1usize;
    let mut used = 0usize;

    for word in text.split_whitespace() {
        let word_width = Span::raw(word).width();
        let needed = if used == 0 {
            word_width
        } else {
            used + 1 + word_width
        };
        if needed <= width {
            used = needed;
            continue;
        }
        if used > 0 {
            rows += 1;
        }
        let spill = word_width.saturating_sub(1) / width;
        rows += spill;
        used = word_width - spill * width;
    }

    u16::try_from(rows).unwrap_or(u16::MAX)
}
