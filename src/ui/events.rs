use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use signal_hook::consts::{SIGINT, SIGTERM};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Resize(u16, u16),
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
}

/// Reads terminal events on a background thread and hands them to the UI
/// loop one at a time.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let terminate = Arc::new(AtomicBool::new(false));
            for signal in [SIGINT, SIGTERM] {
                if let Err(err) = signal_hook::flag::register(signal, Arc::clone(&terminate)) {
                    tracing::warn!(signal, error = %err, "failed to register signal handler");
                }
            }

            let mut last_tick = Instant::now();
            loop {
                if terminate.load(Ordering::Relaxed) {
                    let _ = tx.send(AppEvent::Shutdown);
                    break;
                }

                // Short poll timeout so the signal flag is checked often
                let timeout =
                    tick_rate.saturating_sub(last_tick.elapsed()).min(Duration::from_millis(50));

                let forwarded = match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)).is_ok(),
                        Ok(Event::Mouse(mouse)) => tx.send(AppEvent::Mouse(mouse)).is_ok(),
                        Ok(Event::Resize(cols, rows)) => {
                            tx.send(AppEvent::Resize(cols, rows)).is_ok()
                        }
                        Ok(_) => true,
                        Err(err) => {
                            tracing::error!(error = %err, "terminal event read failed");
                            false
                        }
                    },
                    // Timeout, no event
                    Ok(false) => true,
                    Err(err) => {
                        tracing::error!(error = %err, "terminal event poll failed");
                        false
                    }
                };
                // Receiver gone means the UI loop has exited
                if !forwarded {
                    break;
                }

                if last_tick.elapsed() >= tick_rate {
                    if tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
