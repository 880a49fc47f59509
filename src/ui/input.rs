use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('r') => app.refresh_joke(),
        KeyCode::Char('u') | KeyCode::Char('+') => app.thumbs_up(),
        KeyCode::Char('d') | KeyCode::Char('-') => app.thumbs_down(),
        KeyCode::Char('f') => app.add_to_favorites(),
        KeyCode::Up => app.select_previous_favorite(),
        KeyCode::Down => app.select_next_favorite(),
        KeyCode::Char('x') | KeyCode::Delete => app.delete_selected_favorite(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
