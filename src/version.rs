//! Version marker extraction from bootstrap HTML
//!
//! The web client's entry page embeds its build identifier in one of two
//! places: a `"client_revision"` field inside an inline JSON blob, or the name
//! of the manifest file it links to. Both are matched as plain substrings;
//! the page is never parsed.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Prefix prepended to a bare client revision to form a full version
const CLIENT_REVISION_PREFIX: &str = "2.3000.";

/// Matches `"client_revision": 1012170943`
#[allow(clippy::expect_used)]
static CLIENT_REVISION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""client_revision"\s*:\s*([0-9]+)"#).expect("valid regex")
});

/// Matches `manifest-2.2206.9.json`
#[allow(clippy::expect_used)]
static MANIFEST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"manifest-([0-9\\.]+)\.json").expect("valid regex"));

/// Where in the page a version was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    /// Synthesized from a `"client_revision"` field
    ClientRevision,
    /// Captured from a `manifest-<version>.json` reference
    Manifest,
}

/// A version identifier derived from bootstrap HTML
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedVersion {
    /// The version string used as the cache key
    pub version: String,
    /// Which marker produced it
    pub source: VersionSource,
}

impl ExtractedVersion {
    pub fn as_str(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for ExtractedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.version)
    }
}

/// Derives the version of a bootstrap page from its markup.
///
/// A `"client_revision"` field wins over a manifest reference. Within each
/// pattern the first occurrence in the document is used.
///
/// # Returns
/// * `Some(ExtractedVersion)` if either marker is present
/// * `None` if the page carries no recognizable version marker
pub fn extract_version(html: &str) -> Option<ExtractedVersion> {
    if let Some(caps) = CLIENT_REVISION.captures(html) {
        return Some(ExtractedVersion {
            version: format!("{}{}", CLIENT_REVISION_PREFIX, &caps[1]),
            source: VersionSource::ClientRevision,
        });
    }

    MANIFEST.captures(html).map(|caps| ExtractedVersion {
        version: caps[1].to_string(),
        source: VersionSource::Manifest,
    })
}
