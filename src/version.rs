//! Release version model.
//!
//! Archived Debian releases live in directories named `<major>.<minor>.<patch>/`.
//! Ordering is componentwise left to right, so `10.10.0` sorts above `10.2.0`
//! and `9.13.0`.

use std::fmt;

/// A three-component release version. Field order gives the derived `Ord`
/// the required tuple comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReleaseVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl ReleaseVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self { major, minor, patch }
    }

    /// Parses `"10.10.0"` into a version; exactly three dotted integer
    /// components, nothing more.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split('.');
        let major = parse_component(parts.next()?)?;
        let minor = parse_component(parts.next()?)?;
        let patch = parse_component(parts.next()?)?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { major, minor, patch })
    }

    /// Parses a directory-index entry such as `"10.10.0/"`. The trailing
    /// slash is required; anything else (files, parent links, query links)
    /// yields `None`.
    pub fn from_index_entry(entry: &str) -> Option<Self> {
        Self::parse(entry.strip_suffix('/')?)
    }
}

/// A component is one or more ASCII digits; bare `u64::from_str` would also
/// accept a leading `+`.
fn parse_component(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Picks the highest release among the index entries that parse as versions.
/// Returns `None` when nothing matches.
pub fn latest_release<'a>(entries: impl IntoIterator<Item = &'a str>) -> Option<ReleaseVersion> {
    entries
        .into_iter()
        .filter_map(ReleaseVersion::from_index_entry)
        .max()
}
