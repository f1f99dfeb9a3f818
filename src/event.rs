use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CEvent, KeyEvent, KeyEventKind};

/// Events that the application can receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A periodic tick event.
    Tick,
    /// A key press event from the user.
    Input(KeyEvent),
    /// The terminal was resized to (width, height) cells.
    Resize(u16, u16),
}

/// Handles polling for user input and timer ticks on the calling thread.
///
/// Terminal events are polled with a timeout equal to the time left until the
/// next tick deadline. The deadline is not re-armed automatically when a tick
/// is delivered; the caller calls [`EventHandler::schedule_next_tick`] once the
/// tick has been fully processed, so a slow sample delays the following tick
/// instead of queueing ticks up.
pub struct EventHandler {
    /// How often a tick event should be sent.
    tick_rate: Duration,
    deadline: Instant,
}

impl EventHandler {
    /// Create a new `EventHandler` whose first tick fires after `tick_rate`.
    pub fn new(tick_rate: Duration) -> Self {
        EventHandler {
            tick_rate,
            deadline: Instant::now() + tick_rate,
        }
    }

    /// Blocks until the next terminal event or tick.
    pub fn next(&mut self) -> io::Result<AppEvent> {
        loop {
            let timeout = self.deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                // Hold the deadline in the past until re-armed.
                return Ok(AppEvent::Tick);
            }
            match event::read()? {
                CEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(AppEvent::Input(key));
                }
                CEvent::Resize(width, height) => return Ok(AppEvent::Resize(width, height)),
                // Ignore other event types.
                _ => {}
            }
        }
    }

    /// Arms the next tick one `tick_rate` from now.
    pub fn schedule_next_tick(&mut self) {
        self.deadline = Instant::now() + self.tick_rate;
    }
}
