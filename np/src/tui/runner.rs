//! Form runner - main loop that owns the terminal and the store
//!
//! The TuiRunner is responsible for:
//! - Loading the stored record when the form mounts
//! - Dispatching events to App for handling
//! - Executing queued saves and expiring the save acknowledgment
//! - Rendering on every event

use std::time::{Duration, Instant};

use eyre::Result;
use prefstore::PrefStore;
use tracing::{debug, warn};

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::views;
use crate::config::Config;

/// Form runner that manages the terminal and event loop
pub struct TuiRunner {
    /// Application state
    app: App,
    /// Terminal handle
    terminal: Tui,
    /// The one preferences slot
    store: Box<dyn PrefStore>,
    /// Event handler
    event_handler: EventHandler,
    /// How long the save acknowledgment stays visible
    save_ack: Duration,
}

impl TuiRunner {
    /// Create a new TuiRunner over the given store
    pub fn new(terminal: Tui, store: Box<dyn PrefStore>, config: &Config) -> Self {
        Self {
            app: App::new(),
            terminal,
            store,
            event_handler: EventHandler::new(Duration::from_millis(config.ui.tick_rate_ms)),
            save_ack: Duration::from_millis(config.ui.save_ack_ms),
        }
    }

    /// Run the form main loop
    pub async fn run(&mut self) -> Result<()> {
        self.mount();

        loop {
            // Draw the UI
            self.terminal.draw(|frame| views::render(self.app.state(), frame))?;

            // Handle events
            match self.event_handler.next().await? {
                Event::Tick => self.handle_tick(),
                Event::Key(key_event) => {
                    if self.app.handle_key(key_event) {
                        break;
                    }
                }
                Event::Resize(_, _) => {
                    // Terminal handles resize automatically
                }
            }

            if self.app.state().should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Mount: hydrate the form from the stored record, if any
    fn mount(&mut self) {
        match self.store.load() {
            Ok(Some(record)) => {
                debug!("Hydrated form from stored preferences");
                self.app.state_mut().hydrate(record);
            }
            Ok(None) => {
                debug!("No stored preferences, starting from defaults");
            }
            Err(e) => {
                // The form still opens with defaults; only the message surfaces
                warn!("Failed to load preferences: {}", e);
                self.app.state_mut().set_error(format!("Failed to load preferences: {}", e));
            }
        }
    }

    /// Handle tick event - execute queued saves, expire the acknowledgment
    fn handle_tick(&mut self) {
        let now = Instant::now();
        self.app.state_mut().tick(now);

        if self.app.state_mut().take_pending_save() {
            self.execute_save(now);
        }
    }

    /// Write the current snapshot of all fields to the store
    fn execute_save(&mut self, now: Instant) {
        let snapshot = self.app.state().snapshot();
        match self.store.save(&snapshot) {
            Ok(()) => {
                debug!("Saved preferences");
                self.app.state_mut().mark_saved(now, self.save_ack);
            }
            Err(e) => {
                warn!("Failed to save preferences: {}", e);
                self.app.state_mut().set_error(format!("Failed to save: {}", e));
            }
        }
    }
}
