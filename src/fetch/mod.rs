//! Remote section lists.
//!
//! A [`SectionSource`] turns a URL into sections. [`HttpSource`] performs a
//! plain GET and expects a `{ "sections": [...] }` body. Fetches run on a
//! background thread via [`spawn_fetch`]; there is no timeout and no
//! cancellation, the host decides whether a late result still applies.

use std::sync::Arc;
use std::thread::JoinHandle;

use thiserror::Error;

use crate::section::{Section, parse_remote_body};

/// Why a remote fetch produced no sections.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("invalid sections body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Something that can produce the section list for a URL.
pub trait SectionSource: Send + Sync {
    /// Fetch and decode the sections at `url`.
    ///
    /// # Errors
    /// Returns [`FetchError`] on transport or decoding failure.
    fn fetch(&self, url: &str) -> Result<Vec<Section>, FetchError>;
}

/// Blocking HTTP source backed by a shared `ureq` agent.
#[derive(Clone)]
pub struct HttpSource {
    agent: ureq::Agent,
}

impl HttpSource {
    pub fn new() -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
        }
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<Vec<Section>, FetchError> {
        let transport = |err: ureq::Error| FetchError::Transport {
            url: url.to_string(),
            message: err.to_string(),
        };
        let mut response = self.agent.get(url).call().map_err(transport)?;
        let body = response.body_mut().read_to_string().map_err(transport)?;
        parse_remote_body(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

/// Run `source.fetch(url)` on its own thread and hand the result to `on_done`.
pub fn spawn_fetch<F>(source: Arc<dyn SectionSource>, url: String, on_done: F) -> JoinHandle<()>
where
    F: FnOnce(Result<Vec<Section>, FetchError>) + Send + 'static,
{
    std::thread::spawn(move || {
        tracing::debug!(%url, "fetching sections");
        let result = source.fetch(&url);
        on_done(result);
    })
}
