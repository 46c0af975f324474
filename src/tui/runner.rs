//! TUI runner - manages terminal lifecycle, the pending load and key input

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::errors::{Result, StayboardError};
use crate::schemas::Reservation;
use crate::tui::events::map_key;
use crate::tui::state::TuiState;
use crate::tui::widgets;

type PendingLoad = JoinHandle<Result<Vec<Reservation>>>;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Main TUI runner
pub struct TuiRunner {
    state: TuiState,
    pending_load: Option<PendingLoad>,
}

impl TuiRunner {
    /// Create a runner for a board whose initial load is in flight
    pub fn new(state: TuiState, load: PendingLoad) -> Self {
        Self {
            state,
            pending_load: Some(load),
        }
    }

    /// Run the TUI until the user quits. Returns the final state.
    pub async fn run(mut self) -> Result<TuiState> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, DisableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result.map(|()| self.state)
    }

    async fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while !self.state.should_quit {
            self.poll_load().await;
            self.draw(terminal)?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if let Some(command) = map_key(key) {
                        debug!(?command, "key command");
                        self.state.handle(command);
                    }
                }
            }
        }
        Ok(())
    }

    /// Draw one frame
    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|f| widgets::render(f, &self.state))?;
        Ok(())
    }

    /// Hand the load result to the state once the task has finished
    async fn poll_load(&mut self) {
        if !self.pending_load.as_ref().is_some_and(|h| h.is_finished()) {
            return;
        }
        let Some(handle) = self.pending_load.take() else {
            return;
        };

        let result = match handle.await {
            Ok(result) => result,
            Err(e) => Err(StayboardError::wrap(e, "initial load task failed")),
        };
        self.state.finish_load(result);
    }
}
