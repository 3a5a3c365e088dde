use crate::document::{Bridge, RenderOptions, render_document};
use crate::section::{Section, find_by_correlation_id};
use crate::style::{ColorScheme, Direction, Theme};

/// Surface height before the document has reported its own.
pub const DEFAULT_SURFACE_HEIGHT: f64 = 200.0;

/// Added to every reported height so the last line is never clipped.
pub const SURFACE_HEIGHT_PADDING: f64 = 20.0;

/// The complete host-side render state.
///
/// All state lives here. Every field that feeds document generation is
/// changed through [`Model::touch_content`] so the host can tell when the
/// surface needs a new document.
#[derive(Debug, Clone)]
pub struct Model {
    /// Sections currently shown
    pub current_sections: Vec<Section>,
    /// Height the surface should be laid out at
    pub surface_height: f64,
    /// Right-to-left document
    pub rtl: bool,
    /// Gate for theme-aware colors
    pub dark_mode_enabled: bool,
    /// Platform color scheme
    pub color_scheme: ColorScheme,
    /// Channel the document uses to post messages
    pub bridge: Bridge,
    /// Remote section list, if configured
    pub api_url: Option<String>,
    /// Whether the host should stop its event loop
    pub should_quit: bool,
    /// Bumped whenever document inputs change
    content_revision: u64,
    /// Bumped on every URL change; results from older fetches are dropped
    pub(super) fetch_generation: u64,
    /// Fetch the host still has to start: (url, generation)
    pub(super) pending_fetch: Option<(String, u64)>,
    /// Section whose text was tapped, waiting for the click callback
    pub(super) pending_click: Option<Section>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Model {
    /// Create a model showing `sections`.
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            current_sections: sections,
            surface_height: DEFAULT_SURFACE_HEIGHT,
            rtl: false,
            dark_mode_enabled: true,
            color_scheme: ColorScheme::Light,
            bridge: Bridge::default(),
            api_url: None,
            should_quit: false,
            content_revision: 0,
            fetch_generation: 0,
            pending_fetch: None,
            pending_click: None,
        }
    }

    pub const fn direction(&self) -> Direction {
        Direction::from_rtl(self.rtl)
    }

    pub const fn theme(&self) -> Theme {
        Theme::from_signals(self.dark_mode_enabled, self.color_scheme)
    }

    pub const fn is_dark(&self) -> bool {
        self.theme().is_dark()
    }

    pub const fn render_options(&self) -> RenderOptions {
        RenderOptions {
            direction: self.direction(),
            theme: self.theme(),
            bridge: self.bridge,
        }
    }

    /// Generate the document for the current state.
    pub fn document(&self) -> String {
        render_document(&self.current_sections, &self.render_options())
    }

    /// Revision of the document inputs; equal revisions render equal documents.
    pub const fn content_revision(&self) -> u64 {
        self.content_revision
    }

    pub(super) const fn touch_content(&mut self) {
        self.content_revision = self.content_revision.wrapping_add(1);
    }

    /// Replace the section list wholesale.
    pub(super) fn replace_sections(&mut self, sections: Vec<Section>) {
        self.current_sections = sections;
        self.touch_content();
    }

    /// Apply a height reported by the surface.
    pub(super) fn apply_reported_height(&mut self, height: f64) {
        self.surface_height = height + SURFACE_HEIGHT_PADDING;
    }

    /// Record the section a click refers to, if any matches.
    pub(super) fn select_clicked(&mut self, id: &str) {
        match find_by_correlation_id(&self.current_sections, id) {
            Some(section) => self.pending_click = Some(section.clone()),
            None => tracing::debug!(id, "click matched no section"),
        }
    }

    /// Start tracking a new remote URL; older fetches become stale.
    pub(super) fn begin_fetch_generation(&mut self, url: Option<String>) {
        self.fetch_generation = self.fetch_generation.wrapping_add(1);
        self.pending_fetch = url
            .as_ref()
            .map(|u| (u.clone(), self.fetch_generation));
        self.api_url = url;
    }

    /// Take the fetch the host should start, if any.
    pub fn take_pending_fetch(&mut self) -> Option<(String, u64)> {
        self.pending_fetch.take()
    }

    /// Take the clicked section waiting for the callback, if any.
    pub fn take_pending_click(&mut self) -> Option<Section> {
        self.pending_click.take()
    }

    /// Fetch generation results must carry to be applied.
    pub const fn fetch_generation(&self) -> u64 {
        self.fetch_generation
    }
}
