//! Local filesystem web cache
//!
//! Provides a `LocalWebCache` that stores each version of the bootstrap HTML
//! as `<dir>/<version>.html`, keyed by the version found in the page itself.

use async_trait::async_trait;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::WebCache;
use crate::error::WebCacheError;
use crate::version::extract_version;

/// Directory used when no cache path is configured
pub const DEFAULT_CACHE_DIR: &str = "./.wwebjs_cache/";

fn default_path() -> PathBuf {
    PathBuf::from(DEFAULT_CACHE_DIR)
}

/// Construction options for [`LocalWebCache`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocalWebCacheOptions {
    /// Directory where cached versions are saved
    pub path: PathBuf,
    /// Treat a missing version as an error instead of a miss
    pub strict: bool,
}

impl Default for LocalWebCacheOptions {
    fn default() -> Self {
        Self {
            path: default_path(),
            strict: false,
        }
    }
}

/// Reads and writes bootstrap HTML in a flat directory
///
/// There is no index: a lookup builds the file name from the version and
/// reads it directly. Writing the same version twice replaces the file.
#[derive(Debug, Clone)]
pub struct LocalWebCache {
    /// Directory where cache files are stored
    cache_dir: PathBuf,
    strict: bool,
}

impl LocalWebCache {
    /// Creates a cache from options, falling back to [`DEFAULT_CACHE_DIR`]
    /// when the path is empty.
    pub fn new(options: LocalWebCacheOptions) -> Self {
        let cache_dir = if options.path.as_os_str().is_empty() {
            default_path()
        } else {
            options.path
        };
        Self {
            cache_dir,
            strict: options.strict,
        }
    }

    /// Creates a non-strict cache rooted at `cache_dir`
    pub fn with_dir(cache_dir: impl Into<PathBuf>) -> Self {
        Self::new(LocalWebCacheOptions {
            path: cache_dir.into(),
            strict: false,
        })
    }

    /// Creates a cache in the platform cache directory
    ///
    /// Uses `~/.cache/webcache/` on Linux, or the equivalent path elsewhere.
    /// Returns `None` if no home directory can be determined.
    pub fn in_project_dirs(strict: bool) -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "webcache")?;
        Some(Self::new(LocalWebCacheOptions {
            path: project_dirs.cache_dir().to_path_buf(),
            strict,
        }))
    }

    pub fn path(&self) -> &Path {
        &self.cache_dir
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Returns the path of the cache file for `version`
    ///
    /// The version is joined into the path as-is. Callers must not pass
    /// strings containing path separators or `..` components.
    pub fn entry_path(&self, version: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.html", version))
    }

    /// Whether an entry file exists for `version`
    pub fn contains(&self, version: &str) -> bool {
        self.entry_path(version).is_file()
    }

    /// Reads the cached HTML for `version`
    ///
    /// Invalid UTF-8 in an existing entry is replaced with U+FFFD rather than
    /// treated as a miss.
    ///
    /// # Returns
    /// * `Ok(Some(html))` if the entry exists and is readable
    /// * `Ok(None)` if it cannot be read and the cache is not strict
    /// * `Err(WebCacheError::VersionResolve)` if it cannot be read and the cache is strict
    pub fn load(&self, version: &str) -> Result<Option<String>, WebCacheError> {
        let path = self.entry_path(version);
        match fs::read(&path) {
            Ok(bytes) => {
                debug!(version, path = %path.display(), "web cache hit");
                Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
            }
            Err(source) => {
                debug!(version, path = %path.display(), error = %source, "web cache miss");
                if self.strict {
                    Err(WebCacheError::VersionResolve {
                        version: version.to_string(),
                        source,
                    })
                } else {
                    Ok(None)
                }
            }
        }
    }

    /// Writes `index_html` under the version found in its markup
    ///
    /// # Returns
    /// * `Ok(Some(path))` with the file written
    /// * `Ok(None)` if the page has no version marker; nothing is written
    /// * `Err` if directory creation or file writing fails
    pub fn store(&self, index_html: &str) -> Result<Option<PathBuf>, WebCacheError> {
        let Some(extracted) = extract_version(index_html) else {
            warn!(
                len = index_html.len(),
                "no version marker in bootstrap HTML, skipping web cache write"
            );
            return Ok(None);
        };

        fs::create_dir_all(&self.cache_dir)?;
        let path = self.entry_path(extracted.as_str());
        fs::write(&path, index_html)?;

        debug!(
            version = extracted.as_str(),
            source = ?extracted.source,
            path = %path.display(),
            "web cache write"
        );
        Ok(Some(path))
    }
}

#[async_trait]
impl WebCache for LocalWebCache {
    async fn resolve(&self, version: &str) -> Result<Option<String>, WebCacheError> {
        self.load(version)
    }

    async fn persist(&self, index_html: &str) -> Result<(), WebCacheError> {
        self.store(index_html).map(|_| ())
    }
}
