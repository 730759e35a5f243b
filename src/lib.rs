//! Local cache for versioned web client bootstrap HTML
//!
//! Browser automation that loads a remote web client can keep known-good
//! copies of the client's entry page on disk and skip refetching them. The
//! caller does the fetching; this crate only maps versions to files.

pub mod cache;
pub mod error;
pub mod version;

pub use cache::{
    create_web_cache, LocalWebCache, LocalWebCacheOptions, NoWebCache, WebCache, WebCacheKind,
    DEFAULT_CACHE_DIR,
};
pub use error::WebCacheError;
pub use version::{extract_version, ExtractedVersion, VersionSource};
