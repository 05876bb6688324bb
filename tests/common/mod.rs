//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use counter_view::ui::app::App;
use counter_view::ui::render::draw;
use counter_view::ui::view::{ViewNode, COUNTER_DISPLAY};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::path::PathBuf;
use tempfile::TempDir;

/// Mount a fresh counter view.
pub fn setup() -> App {
    App::default()
}

/// Nodes in the rendered tree carrying the given test tag.
pub fn find_by_test_attr<'a>(view: &'a ViewNode, tag: &str) -> Vec<&'a ViewNode> {
    view.find_by_tag(tag)
}

/// Text of the counter display in the current render.
pub fn display_text(app: &App) -> String {
    let view = app.render();
    let display = find_by_test_attr(&view, COUNTER_DISPLAY);
    assert_eq!(display.len(), 1, "expected exactly one counter display");
    display[0].text.clone()
}

pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

/// Draw the app into an in-memory terminal and return the buffer.
pub fn draw_to_buffer(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

/// Trimmed text of row `y` restricted to the columns of `rect`.
pub fn region_text(buffer: &Buffer, rect: Rect, y: u16) -> String {
    (rect.x..rect.x + rect.width)
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
