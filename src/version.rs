//! Version extraction from a skill's metadata header
//!
//! Extraction never fails hard: a missing file, a missing header or an
//! unusable `version` field yields [`ExtractedVersion::Defaulted`], which
//! packages as [`FALLBACK_VERSION`].

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::frontmatter::{self, Frontmatter};

/// Version used when none can be extracted
pub const FALLBACK_VERSION: &str = "0.0.0";

/// Dotted numeric core with optional semver pre-release and build suffixes.
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(\.\d+)*(-[0-9A-Za-z-]+(\.[0-9A-Za-z-]+)*)?(\+[0-9A-Za-z-]+(\.[0-9A-Za-z-]+)*)?$")
        .unwrap_or_else(|e| unreachable!("version pattern is valid: {e}"))
});

/// The header fields version extraction reads
#[derive(Debug, Deserialize)]
struct VersionHeader {
    #[serde(default)]
    version: Option<String>,
}

/// Why a version was defaulted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultReason {
    MissingFile,
    Unreadable(String),
    NoFrontmatter,
    InvalidFrontmatter(String),
    MissingField,
    InvalidFormat(String),
}

impl fmt::Display for DefaultReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFile => write!(f, "metadata file not found"),
            Self::Unreadable(reason) => write!(f, "metadata file unreadable: {reason}"),
            Self::NoFrontmatter => write!(f, "no frontmatter header found"),
            Self::InvalidFrontmatter(reason) => write!(f, "invalid frontmatter: {reason}"),
            Self::MissingField => write!(f, "no 'version' field in frontmatter"),
            Self::InvalidFormat(raw) => write!(f, "'{raw}' is not a dotted numeric version"),
        }
    }
}

/// Result of reading a version from a metadata file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedVersion {
    /// The literal `version` field value, trimmed
    Parsed(String),
    /// No usable version; packages as [`FALLBACK_VERSION`]
    Defaulted(DefaultReason),
}

impl ExtractedVersion {
    /// Version string to use in artifact names
    pub fn as_str(&self) -> &str {
        match self {
            Self::Parsed(version) => version,
            Self::Defaulted(_) => FALLBACK_VERSION,
        }
    }
}

impl fmt::Display for ExtractedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `raw` is an acceptable version literal.
pub fn is_valid_version(raw: &str) -> bool {
    VERSION_PATTERN.is_match(raw)
}

/// Extract the version from the metadata file at `path`.
pub fn extract_version(path: &Path) -> ExtractedVersion {
    if !path.is_file() {
        return ExtractedVersion::Defaulted(DefaultReason::MissingFile);
    }
    match fs::read_to_string(path) {
        Ok(content) => version_from_content(&content),
        Err(e) => ExtractedVersion::Defaulted(DefaultReason::Unreadable(e.to_string())),
    }
}

/// Extract the version from metadata file content.
pub fn version_from_content(content: &str) -> ExtractedVersion {
    match frontmatter::parse(content) {
        Frontmatter::Parsed(value) if value.is_null() => {
            return ExtractedVersion::Defaulted(DefaultReason::MissingField);
        }
        Frontmatter::Parsed(_) => {}
        Frontmatter::Missing => return ExtractedVersion::Defaulted(DefaultReason::NoFrontmatter),
        Frontmatter::Invalid(reason) => {
            return ExtractedVersion::Defaulted(DefaultReason::InvalidFrontmatter(reason));
        }
    }

    // A non-scalar `version` fails to deserialize and counts as missing
    let raw = match frontmatter::deserialize::<VersionHeader>(content) {
        Some(Ok(VersionHeader { version: Some(raw) })) => raw,
        _ => return ExtractedVersion::Defaulted(DefaultReason::MissingField),
    };
    let version = raw.trim();
    if version.is_empty() {
        return ExtractedVersion::Defaulted(DefaultReason::MissingField);
    }
    if !is_valid_version(version) {
        return ExtractedVersion::Defaulted(DefaultReason::InvalidFormat(version.to_string()));
    }
    ExtractedVersion::Parsed(version.to_string())
}
