//! Terminal event source.
//!
//! A blocking task polls crossterm and forwards events over a channel so the
//! main loop can wait on input and animation frames at the same time.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;
use tracing::warn;

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

/// Event handler for terminal events
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    /// Start polling the terminal, emitting a tick after `tick_rate_ms` of quiet
    pub fn new(tick_rate_ms: u64) -> Self {
        let tick_rate = Duration::from_millis(tick_rate_ms);
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::task::spawn_blocking(move || loop {
            let app_event = match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    // Only key presses; crossterm also reports releases on some systems
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                    Ok(Event::Resize(w, h)) => AppEvent::Resize(w, h),
                    Ok(_) => continue,
                    Err(e) => {
                        warn!(error = %e, "Failed to read terminal event");
                        break;
                    }
                },
                Ok(false) => AppEvent::Tick,
                Err(e) => {
                    warn!(error = %e, "Failed to poll terminal events");
                    break;
                }
            };

            if tx.send(app_event).is_err() {
                break; // receiver dropped
            }
        });

        Self { rx }
    }

    /// Wait for the next event; `None` once the reader has stopped
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}
