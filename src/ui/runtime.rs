use crate::config::UiConfig;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

/// Mount the counter view and run it until the user quits.
pub fn run(config: &UiConfig) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal(config.mouse_capture)?;
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let mut app = App::new(config);
    let events = EventHandler::new(tick_rate);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!(
        tick_rate_ms = config.tick_rate_ms,
        mouse_capture = config.mouse_capture,
        "counter view started"
    );

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!(value = app.counter().value(), "counter view stopped");
    drop(guard);
    Ok(())
}
