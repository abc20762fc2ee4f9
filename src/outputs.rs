//! Output artifacts: the two flat files consumed by build tooling.
//!
//! Both are fully overwritten on every run. The hash file deliberately names
//! the generic `debian-amd64-netinst.iso`, not the versioned file that was
//! actually hashed; downstream Makefiles rename the ISO after download.

use crate::error::PinError;
use std::fs;
use std::path::Path;

pub const HASH_FILE: &str = "sha256_hashes";
pub const VARS_FILE: &str = "generated-makefile-variables";

/// Fixed filename written next to the digest in the hash file.
pub const PINNED_ISO_NAME: &str = "debian-amd64-netinst.iso";

/// `<digest>  debian-amd64-netinst.iso\n` (two-space separator, as
/// `sha256sum -c` expects).
pub fn hash_line(digest: &str) -> String {
    format!("{}  {}\n", digest, PINNED_ISO_NAME)
}

/// `DISTRO_ISO_URL=<url>\n`, a Makefile variable assignment.
pub fn vars_line(iso_url: &str) -> String {
    format!("DISTRO_ISO_URL={}\n", iso_url)
}

/// Writes both artifacts into `dir`. Callers must only invoke this with a
/// fully resolved digest and URL, so a failed resolution never touches files
/// from a previous run.
pub fn write_artifacts(dir: &Path, digest: &str, iso_url: &str) -> Result<(), PinError> {
    write_file(dir.join(HASH_FILE), &hash_line(digest))?;
    write_file(dir.join(VARS_FILE), &vars_line(iso_url))?;
    Ok(())
}

fn write_file(path: std::path::PathBuf, contents: &str) -> Result<(), PinError> {
    tracing::debug!("writing {}", path.display());
    fs::write(&path, contents).map_err(|source| PinError::WriteFailed { path, source })
}
