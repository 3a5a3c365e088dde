//! Host state and event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete host-side render state
//! - [`Message`]: All possible events reaching the host
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Event loop that applies messages and drives the surface

mod effects;
mod event_loop;
mod model;
mod update;

pub use model::{DEFAULT_SURFACE_HEIGHT, Model, SURFACE_HEIGHT_PADDING};
pub use update::{Message, update};

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

use crate::document::Bridge;
use crate::fetch::{HttpSource, SectionSource};
use crate::section::Section;
use crate::style::ColorScheme;

/// The platform component that displays the generated document.
///
/// Implementations load markup into an isolated surface and forward every
/// message the document posts back to the host as
/// [`Message::SurfaceMessage`] through [`App::sender`].
pub trait Surface {
    /// Replace the surface content with a complete document.
    fn load_document(&mut self, html: &str);

    /// Lay the surface out at `height` CSS pixels.
    fn set_height(&mut self, height: f64);
}

/// Callback invoked with the section whose text was tapped.
pub type ClickCallback = Box<dyn FnMut(&Section)>;

/// Render host: owns the surface, the model, and the message channel.
pub struct App {
    model: Model,
    surface: Box<dyn Surface>,
    source: Arc<dyn SectionSource>,
    on_item_click: Option<ClickCallback>,
    initial_api_url: Option<String>,
    watch_path: Option<PathBuf>,
    tx: Sender<Message>,
    rx: Receiver<Message>,
    rendered_revision: Option<u64>,
    applied_height: Option<f64>,
    mounted: bool,
}

impl App {
    /// Create a host for `surface` with no sections.
    pub fn new(surface: impl Surface + 'static) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            model: Model::default(),
            surface: Box::new(surface),
            source: Arc::new(HttpSource::new()),
            on_item_click: None,
            initial_api_url: None,
            watch_path: None,
            tx,
            rx,
            rendered_revision: None,
            applied_height: None,
            mounted: false,
        }
    }

    /// Set the initial section list.
    #[must_use]
    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.model.current_sections = sections;
        self
    }

    /// Fetch sections from `url` when mounted.
    #[must_use]
    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        self.initial_api_url = url;
        self
    }

    /// Lay the document out right-to-left.
    #[must_use]
    pub const fn with_rtl(mut self, rtl: bool) -> Self {
        self.model.rtl = rtl;
        self
    }

    /// Enable or disable theme-aware colors (enabled by default).
    #[must_use]
    pub const fn with_dark_mode(mut self, enabled: bool) -> Self {
        self.model.dark_mode_enabled = enabled;
        self
    }

    /// Set the platform color scheme.
    #[must_use]
    pub const fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.model.color_scheme = scheme;
        self
    }

    /// Choose how the document posts messages.
    #[must_use]
    pub const fn with_bridge(mut self, bridge: Bridge) -> Self {
        self.model.bridge = bridge;
        self
    }

    /// Replace the transport used for remote section lists.
    #[must_use]
    pub fn with_source(mut self, source: impl SectionSource + 'static) -> Self {
        self.source = Arc::new(source);
        self
    }

    /// Invoke `callback` with the tapped section.
    #[must_use]
    pub fn on_item_click(mut self, callback: impl FnMut(&Section) + 'static) -> Self {
        self.on_item_click = Some(Box::new(callback));
        self
    }

    /// Reload sections from `path` whenever it changes while running.
    #[must_use]
    pub fn with_watch(mut self, path: Option<PathBuf>) -> Self {
        self.watch_path = path;
        self
    }

    /// Channel for delivering messages to the host from other threads,
    /// typically the surface's message callback.
    pub fn sender(&self) -> Sender<Message> {
        self.tx.clone()
    }

    /// Current state.
    pub const fn model(&self) -> &Model {
        &self.model
    }
}
