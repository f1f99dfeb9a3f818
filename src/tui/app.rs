//! Main TUI application.

use std::io;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use tracing::info;

use super::render::{render, render_to_string};
use super::state::{Message, ViewState};
use crate::collector::MetricsSampler;
use crate::errors::Result;
use crate::event::{AppEvent, EventHandler};

/// Owns the sampler and the current view state.
pub struct App {
    sampler: Box<dyn MetricsSampler>,
    state: ViewState,
}

impl App {
    /// Takes the first sample; the terminal size is learned on the first resize.
    pub fn new(mut sampler: Box<dyn MetricsSampler>) -> Self {
        let state = ViewState::new(sampler.sample());
        Self { sampler, state }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Current frame as text.
    pub fn view(&self) -> io::Result<String> {
        render_to_string(&self.state)
    }

    /// Applies one event. Ticks pull a fresh snapshot from the sampler.
    pub fn handle(&mut self, event: AppEvent) {
        let message = match event {
            AppEvent::Tick => Message::Tick(self.sampler.sample()),
            AppEvent::Input(key) => Message::Key(key),
            AppEvent::Resize(width, height) => Message::Resize { width, height },
        };
        self.state = std::mem::take(&mut self.state).update(message);
    }

    /// Runs the TUI until the user quits.
    pub fn run(mut self, tick_rate: Duration) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        let result = self.event_loop(&mut terminal, tick_rate);

        // Restore the terminal even if the loop failed.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        tick_rate: Duration,
    ) -> Result<()> {
        let mut events = EventHandler::new(tick_rate);

        let size = terminal.size()?;
        self.handle(AppEvent::Resize(size.width, size.height));
        info!(width = size.width, height = size.height, "started");

        let mut rearm = false;
        loop {
            terminal.draw(|frame| render(frame, &self.state))?;
            if self.state.should_quit() {
                info!("exiting");
                return Ok(());
            }
            // The next tick is due one interval after the previous one was drawn.
            if rearm {
                events.schedule_next_tick();
            }

            let event = events.next()?;
            rearm = event == AppEvent::Tick;
            self.handle(event);
        }
    }
}
