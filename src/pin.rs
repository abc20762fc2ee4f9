//! Pin orchestration: one straight-line pass from mirror index to digest.

use crate::error::PinError;
use crate::fetch::{self, Timeouts};
use crate::listing::DirectoryIndex;
use crate::manifest;
use crate::mirror::ReleaseLayout;
use crate::outputs;
use crate::version::{self, ReleaseVersion};
use std::path::Path;

/// A fully resolved release: everything the output artifacts need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinnedRelease {
    pub version: ReleaseVersion,
    pub iso_filename: String,
    pub iso_url: String,
    pub digest: String,
}

/// Resolves the newest archived release and its netinst ISO digest.
///
/// Sequence: list the index, select the maximum version, build the release
/// URLs, fetch the `SHA256SUMS` manifest, extract the digest for the exact
/// ISO filename.
pub fn pin_latest(
    index: &dyn DirectoryIndex,
    mirror_url: &str,
    timeouts: Timeouts,
) -> Result<PinnedRelease, PinError> {
    let entries = index.entries(mirror_url)?;
    let latest = version::latest_release(entries.iter().map(String::as_str)).ok_or_else(|| {
        PinError::NoVersionsFound {
            url: mirror_url.to_string(),
        }
    })?;
    tracing::info!("latest archived release is {}", latest);

    let layout = ReleaseLayout::new(mirror_url, latest);
    let sums_url = layout.sums_url();
    let manifest_text = fetch::get_text(&sums_url, timeouts)?;

    let iso_filename = layout.iso_filename();
    let digest = manifest::digest_for(&manifest_text, &iso_filename).ok_or_else(|| {
        PinError::ChecksumNotFound {
            url: sums_url,
            filename: iso_filename.clone(),
        }
    })?;
    tracing::info!("pinned {} ({})", iso_filename, digest);

    Ok(PinnedRelease {
        version: latest,
        iso_filename,
        iso_url: layout.iso_url(),
        digest,
    })
}

/// Full run: resolve, then write both artifacts into `out_dir`.
///
/// Resolution happens strictly before the first write, so any failure leaves
/// files from a previous run untouched.
pub fn pin_and_write(
    index: &dyn DirectoryIndex,
    mirror_url: &str,
    timeouts: Timeouts,
    out_dir: &Path,
) -> Result<PinnedRelease, PinError> {
    let pinned = pin_latest(index, mirror_url, timeouts)?;
    outputs::write_artifacts(out_dir, &pinned.digest, &pinned.iso_url)?;
    Ok(pinned)
}
