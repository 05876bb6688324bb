use crate::ui::app::App;
use crate::ui::layout::button_rect;
use crate::ui::view::INCREMENT_BUTTON;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Windows reports both press and release
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.request_quit();
        return;
    }

    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('+')) {
        app.activate(INCREMENT_BUTTON);
    }
}

/// A left click inside the button counts as one activation.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let Some(area) = app.area() else {
        tracing::warn!("mouse event before first resize, ignoring");
        return;
    };

    let button = button_rect(area, app.show_footer());
    if button.contains(Position::new(mouse.column, mouse.row)) {
        app.activate(INCREMENT_BUTTON);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
