// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. section::SectionStyle)
    clippy::module_name_repetitions
)]

//! # Wrapview
//!
//! Styled sections rendered as one self-contained HTML document for an
//! embedded web surface.
//!
//! Each section is an image floated to one side with text wrapping around
//! it and an optional title above. Wrapview:
//! - Resolves per-section styles against direction and theme defaults
//! - Sanitizes user text before it reaches markup
//! - Lazily loads images as they approach the viewport
//! - Keeps the surface sized to its content via height messages
//! - Routes text taps back to the originating section
//!
//! ## Architecture
//!
//! The host uses The Elm Architecture (TEA) pattern:
//! - **Model**: Sections plus environment (direction, theme, bridge)
//! - **Message**: Data changes, environment changes, surface messages
//! - **Update**: Pure state transitions
//! - **Effects**: Fetches, click callbacks and surface reloads
//!
//! ## Modules
//!
//! - [`app`]: Render host, model and event loop
//! - [`section`]: Section data model and loading
//! - [`style`]: Style resolution with defaults
//! - [`sanitize`]: Text escaping for markup
//! - [`document`]: HTML document generation
//! - [`bridge`]: Messages posted by the document
//! - [`fetch`]: Remote section lists
//! - [`watcher`]: File watching for live reload
//! - [`config`]: Persistent CLI defaults
//! - [`output`]: File and stdout surface for the CLI

pub mod app;
pub mod bridge;
pub mod config;
pub mod document;
pub mod fetch;
pub mod output;
pub mod sanitize;
pub mod section;
pub mod style;
pub mod watcher;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model, Surface};
    pub use crate::document::{Bridge, RenderOptions, render_document};
    pub use crate::section::Section;
}
