//! Cache backends for versioned bootstrap HTML
//!
//! A [`WebCache`] lets a caller that fetches a remote web client's entry page
//! skip the fetch when it already holds a known-good copy of that version.
//! [`LocalWebCache`] stores one file per version on disk; [`NoWebCache`]
//! never hits and never stores.

mod local;

pub use local::{LocalWebCache, LocalWebCacheOptions, DEFAULT_CACHE_DIR};

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;

use crate::error::WebCacheError;

/// A store of bootstrap HTML keyed by client version
#[async_trait]
pub trait WebCache: Send + Sync {
    /// Looks up the HTML for `version`.
    ///
    /// Returns `Ok(None)` when the version is not cached and the caller should
    /// fetch it fresh.
    async fn resolve(&self, version: &str) -> Result<Option<String>, WebCacheError>;

    /// Stores `index_html` under the version embedded in its markup.
    async fn persist(&self, index_html: &str) -> Result<(), WebCacheError>;
}

/// A cache that holds nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWebCache;

#[async_trait]
impl WebCache for NoWebCache {
    async fn resolve(&self, _version: &str) -> Result<Option<String>, WebCacheError> {
        Ok(None)
    }

    async fn persist(&self, _index_html: &str) -> Result<(), WebCacheError> {
        Ok(())
    }
}

/// Named cache backend types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebCacheKind {
    Local,
    /// Remote-store backed cache; needs network fetching, not provided here
    Remote,
    None,
}

impl WebCacheKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WebCacheKind::Local => "local",
            WebCacheKind::Remote => "remote",
            WebCacheKind::None => "none",
        }
    }
}

impl fmt::Display for WebCacheKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WebCacheKind {
    type Err = WebCacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(WebCacheKind::Local),
            "remote" => Ok(WebCacheKind::Remote),
            "none" => Ok(WebCacheKind::None),
            _ => Err(WebCacheError::UnknownKind(s.to_string())),
        }
    }
}

/// Builds the cache backend for `kind`.
///
/// `options` only applies to [`WebCacheKind::Local`].
pub fn create_web_cache(
    kind: WebCacheKind,
    options: LocalWebCacheOptions,
) -> Result<Box<dyn WebCache>, WebCacheError> {
    match kind {
        WebCacheKind::Local => Ok(Box::new(LocalWebCache::new(options))),
        WebCacheKind::None => Ok(Box::new(NoWebCache)),
        WebCacheKind::Remote => Err(WebCacheError::Unsupported(kind)),
    }
}
