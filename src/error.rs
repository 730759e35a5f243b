//! Error types for web cache backends

use std::io;

use thiserror::Error;

use crate::cache::WebCacheKind;

/// Errors that can occur when resolving or persisting cached versions
#[derive(Debug, Error)]
pub enum WebCacheError {
    /// A strict cache could not load the requested version
    #[error("Couldn't load version {version} from the cache")]
    VersionResolve {
        /// The version the caller asked for
        version: String,
        #[source]
        source: io::Error,
    },

    /// Creating the cache directory or writing an entry failed
    #[error("Cache I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The cache type name is not recognized
    #[error("Invalid web cache type: '{0}'. Valid types: local, remote, none")]
    UnknownKind(String),

    /// The cache type exists but no backend for it is built into this crate
    #[error("Web cache type '{0}' is not supported by this crate")]
    Unsupported(WebCacheKind),
}
