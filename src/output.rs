//! Surface used by the command-line tool.
//!
//! A file target is rewritten on every load, so the file always holds exactly
//! the latest document. Stdout cannot be rewritten; in that mode only the
//! latest document is kept and written once with [`PendingDocument::write_to`]
//! when the run is over.

use std::cell::RefCell;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;

use crate::app::Surface;

/// Output combinations the tool refuses to run with.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OutputError {
    #[error("--watch regenerates the document repeatedly and needs --out <PATH>")]
    WatchNeedsFile,
}

/// Check that the output target can take repeated documents.
///
/// # Errors
/// Returns [`OutputError::WatchNeedsFile`] when watching without a file target.
pub const fn check_target(out: Option<&Path>, watch: bool) -> Result<(), OutputError> {
    if watch && out.is_none() {
        return Err(OutputError::WatchNeedsFile);
    }
    Ok(())
}

/// Latest document held back for stdout.
#[derive(Debug, Clone, Default)]
pub struct PendingDocument(Rc<RefCell<Option<String>>>);

impl PendingDocument {
    /// Write the held document, if any, to `out`.
    ///
    /// Returns whether a document was written.
    ///
    /// # Errors
    /// Returns the I/O error from writing or flushing.
    pub fn write_to(&self, mut out: impl Write) -> std::io::Result<bool> {
        let Some(html) = self.0.borrow_mut().take() else {
            return Ok(false);
        };
        out.write_all(html.as_bytes())?;
        out.flush()?;
        Ok(true)
    }
}

/// Writes documents to a file, or holds the latest one for stdout.
pub struct OutputSurface {
    path: Option<PathBuf>,
    pending: PendingDocument,
}

impl OutputSurface {
    /// Target `path`, or stdout when `None`.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            pending: PendingDocument::default(),
        }
    }

    /// Handle to the document held for stdout; stays empty for file targets.
    pub fn pending(&self) -> PendingDocument {
        self.pending.clone()
    }
}

impl Surface for OutputSurface {
    fn load_document(&mut self, html: &str) {
        match &self.path {
            Some(path) => {
                if let Err(err) = std::fs::write(path, html) {
                    tracing::error!(%err, path = %path.display(), "failed to write document");
                }
            }
            None => *self.pending.0.borrow_mut() = Some(html.to_string()),
        }
    }

    fn set_height(&mut self, height: f64) {
        tracing::info!(height, "surface height");
    }
}
