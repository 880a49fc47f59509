use crate::ui::app::App;
use crate::ui::header::Header;
use crate::ui::layout::{body_panels, layout_regions, panel_height};
use crate::ui::spinner::LoadingSpinner;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, LAUGH_NEGATIVE,
    LAUGH_POSITIVE, PANEL_BORDER,
};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new();
    frame.render_widget(
        header_widget.widget(app.joke_state(), app.favorites().jokes.len()),
        header,
    );
    frame.render_widget(Clear, body);

    let panels = app.panels();
    let (title, lines) = if panels.error {
        ("Error", error_lines(app))
    } else {
        ("Joke", joke_lines(app))
    };
    let (top, favorites_area) =
        body_panels(body, panels.favorites, panel_height(&lines, body.width));
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(panel_block(title));
    frame.render_widget(widget, top);

    if let Some(area) = favorites_area {
        draw_favorites_panel(frame, app, area);
    }

    draw_footer(frame, app, footer);
}

/// Key hints for what the current screen accepts.
fn footer_hints(app: &App) -> Vec<&'static str> {
    let mut hints = Vec::new();
    if app.joke_state().displayed().is_some() {
        hints.extend(["u: 👍", "d: 👎", "f: Add to favourites"]);
    }
    hints.push("r: Refresh");
    if app.panels().favorites {
        hints.extend(["↑↓: Select", "x: Delete"]);
    }
    hints.push("q: Quit");
    hints
}

fn draw_footer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [hints_area, version_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(VERSION.len() as u16 + 1),
    ])
    .areas(inner);

    let hints = format!(" {}", footer_hints(app).join(" │ "));
    frame.render_widget(Paragraph::new(hints).style(text_style), hints_area);
    frame.render_widget(
        Paragraph::new(VERSION)
            .style(text_style)
            .alignment(Alignment::Right),
        version_area,
    );
}

fn panel_block(title: &'static str) -> Block<'static> {
    Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PANEL_BORDER))
}

fn joke_lines(app: &App) -> Vec<Line<'static>> {
    let state = app.joke_state();
    let mut lines = Vec::new();

    if state.loading {
        lines.push(LoadingSpinner::new(app.ticks()).line());
    } else if let Some(joke) = &state.joke {
        let score = app.ratings().score(joke.id);
        let meter_color = if score < 0 {
            LAUGH_NEGATIVE
        } else {
            LAUGH_POSITIVE
        };
        lines.push(Line::from(Span::styled(
            format!("{}😄", joke.setup),
            Style::default().fg(HEADER_TEXT),
        )));
        lines.push(Line::from(Span::styled(
            format!("{}🥁", joke.punchline),
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!(" Laugh Meter: {score}"),
            Style::default().fg(meter_color),
        )));
    } else {
        lines.push(Line::from("No joke yet."));
    }

    lines.push(Line::from(Span::styled(
        "[u] 👍  [d] 👎  [r] Refresh  [f] Add to favourites",
        Style::default().fg(HEADER_SEPARATOR),
    )));
    lines
}

fn error_lines(app: &App) -> Vec<Line<'static>> {
    let state = app.joke_state();
    let mut lines = Vec::new();

    if state.loading {
        lines.push(LoadingSpinner::new(app.ticks()).line());
    } else if let Some(message) = &state.error {
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default()
                .fg(LAUGH_NEGATIVE)
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(Span::styled(
        "[r] Refresh",
        Style::default().fg(HEADER_SEPARATOR),
    )));
    lines
}

fn draw_favorites_panel(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let favorites = app.favorites();
    let items: Vec<ListItem> = favorites
        .jokes
        .iter()
        .map(|joke| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} - {}", joke.setup, joke.punchline),
                    Style::default().fg(HEADER_TEXT),
                ),
                Span::styled("  [x] Delete", Style::default().fg(HEADER_SEPARATOR)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(panel_block("Favorite Jokes"))
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
    let mut list_state = ListState::default().with_selected(Some(favorites.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}
