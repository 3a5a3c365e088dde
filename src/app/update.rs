use crate::app::Model;
use crate::bridge::InboundMessage;
use crate::document::Bridge;
use crate::fetch::FetchError;
use crate::section::Section;
use crate::style::ColorScheme;

/// All possible events reaching the host.
///
/// These are configuration changes from the embedding application,
/// completions of background work, and raw messages from the surface.
#[derive(Debug)]
pub enum Message {
    // Data
    /// The externally supplied section list changed
    SectionsChanged(Vec<Section>),
    /// The remote source URL changed (or was removed)
    ApiUrlChanged(Option<String>),
    /// A remote fetch finished
    FetchCompleted {
        generation: u64,
        result: Result<Vec<Section>, FetchError>,
    },

    // Environment
    /// Switch between left-to-right and right-to-left
    SetRtl(bool),
    /// Enable or disable theme-aware colors
    SetDarkModeEnabled(bool),
    /// The platform color scheme changed
    ColorSchemeChanged(ColorScheme),
    /// Switch the message bridge used by the document
    SetBridge(Bridge),

    // Surface
    /// Raw payload posted by the embedded document
    SurfaceMessage(String),

    // Application
    /// Stop the event loop
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// All state transitions happen here. Side effects (starting fetches,
/// invoking the click callback, pushing documents to the surface) are
/// requested through the model and carried out by the host afterwards.
pub fn update(mut model: Model, msg: Message) -> Model {
    let options_before = model.render_options();

    match msg {
        // Data
        Message::SectionsChanged(sections) => {
            model.replace_sections(sections);
        }
        Message::ApiUrlChanged(url) => {
            if url != model.api_url {
                model.begin_fetch_generation(url);
            }
        }
        Message::FetchCompleted { generation, result } => {
            if generation != model.fetch_generation() {
                tracing::debug!(
                    generation,
                    current = model.fetch_generation(),
                    "dropping stale fetch result"
                );
                return model;
            }
            match result {
                Ok(sections) => model.replace_sections(sections),
                Err(err) => tracing::debug!(%err, "remote sections unavailable"),
            }
        }

        // Environment
        Message::SetRtl(rtl) => model.rtl = rtl,
        Message::SetDarkModeEnabled(enabled) => model.dark_mode_enabled = enabled,
        Message::ColorSchemeChanged(scheme) => model.color_scheme = scheme,
        Message::SetBridge(bridge) => model.bridge = bridge,

        // Surface
        Message::SurfaceMessage(payload) => {
            if let Some(inbound) = InboundMessage::decode(&payload) {
                tracing::trace!(message = %inbound.summary(), "surface message");
                match inbound {
                    InboundMessage::Height { height } => model.apply_reported_height(height),
                    InboundMessage::Click { id } => model.select_clicked(&id),
                }
            }
        }

        // Application
        Message::Quit => {
            model.should_quit = true;
        }
    }

    // Environment changes that leave the rendered output alone (e.g. the
    // platform turning dark while dark mode is disabled) keep the document.
    if model.render_options() != options_before {
        model.touch_content();
    }

    model
}
