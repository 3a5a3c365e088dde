use std::sync::mpsc::{RecvTimeoutError, TryRecvError};
use std::time::Duration;

use anyhow::Result;

use crate::app::{App, Message, update};
use crate::watcher::SectionsWatcher;

/// How often the loop wakes up to poll the sections watcher.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Quiet period before a file change is reloaded.
const WATCH_DEBOUNCE: Duration = Duration::from_millis(200);

impl App {
    /// Render the initial document and start the configured fetch.
    ///
    /// Called automatically by [`App::run`]; calling it again is a no-op.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.sync_surface();
        if let Some(url) = self.initial_api_url.take() {
            self.dispatch(Message::ApiUrlChanged(Some(url)));
        }
    }

    /// Apply one message and perform its side effects.
    pub fn dispatch(&mut self, msg: Message) {
        let model = std::mem::take(&mut self.model);
        self.model = update(model, msg);
        self.handle_message_side_effects();
    }

    /// Apply every message already queued without blocking.
    ///
    /// Returns the number of messages handled.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        loop {
            match self.rx.try_recv() {
                Ok(msg) => {
                    self.dispatch(msg);
                    handled += 1;
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return handled,
            }
        }
    }

    /// Wait up to `timeout` for one message and apply it.
    ///
    /// Returns false if nothing arrived in time.
    pub fn process_next(&mut self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.dispatch(msg);
                true
            }
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => false,
        }
    }

    /// Run the event loop until [`Message::Quit`].
    ///
    /// # Errors
    ///
    /// Returns an error if the sections file watcher cannot be created.
    pub fn run(&mut self) -> Result<()> {
        self.mount();

        let mut watcher = match &self.watch_path {
            Some(path) => {
                let watcher = SectionsWatcher::new(path, WATCH_DEBOUNCE)?;
                tracing::debug!(path = %watcher.target_path().display(), "watching sections");
                Some(watcher)
            }
            None => None,
        };

        while !self.model.should_quit {
            self.process_next(POLL_INTERVAL);

            if let Some(watcher) = watcher.as_mut()
                && let Some(result) = watcher.poll_sections()
            {
                match result {
                    Ok(sections) => self.dispatch(Message::SectionsChanged(sections)),
                    Err(err) => tracing::warn!(%err, "keeping previous sections"),
                }
            }
        }

        Ok(())
    }
}
