use crate::app::{App, Message};
use crate::fetch::spawn_fetch;

impl App {
    /// Carry out whatever the last update asked for.
    pub(super) fn handle_message_side_effects(&mut self) {
        if let Some((url, generation)) = self.model.take_pending_fetch() {
            self.start_fetch(url, generation);
        }

        if let Some(section) = self.model.take_pending_click() {
            match self.on_item_click.as_mut() {
                Some(callback) => callback(&section),
                None => tracing::trace!("click ignored, no callback configured"),
            }
        }

        self.sync_surface();
    }

    fn start_fetch(&self, url: String, generation: u64) {
        let tx = self.tx.clone();
        // Detached: a superseded fetch still runs to completion and its
        // result is dropped by generation.
        let _ = spawn_fetch(self.source.clone(), url, move |result| {
            let _ = tx.send(Message::FetchCompleted { generation, result });
        });
    }

    /// Push a new document and height to the surface when they changed.
    pub(super) fn sync_surface(&mut self) {
        let revision = self.model.content_revision();
        if self.rendered_revision != Some(revision) {
            let html = self.model.document();
            tracing::debug!(
                revision,
                sections = self.model.current_sections.len(),
                bytes = html.len(),
                "loading document"
            );
            self.surface.load_document(&html);
            self.rendered_revision = Some(revision);
        }

        let height = self.model.surface_height;
        if self
            .applied_height
            .is_none_or(|applied| (applied - height).abs() > f64::EPSILON)
        {
            self.surface.set_height(height);
            self.applied_height = Some(height);
        }
    }
}
