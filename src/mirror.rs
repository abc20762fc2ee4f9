//! Mirror layout modeling: URLs and filenames for one archived release.
//!
//! The tool targets exactly one remote layout: the Debian CD-image archive
//! tree, `<base>/<version>/amd64/iso-cd/`, holding the netinst ISO and its
//! `SHA256SUMS` manifest.

use crate::version::ReleaseVersion;

/// Default archive index. Overridable via config or `--mirror`.
pub const DEFAULT_MIRROR_URL: &str = "https://cdimage.debian.org/mirror/cdimage/archive";

/// Architecture and image flavour are fixed; this tool pins one artifact.
const ARCH: &str = "amd64";
const IMAGE_DIR: &str = "iso-cd";
const SUMS_FILE: &str = "SHA256SUMS";

/// Paths for one release under a mirror base URL.
#[derive(Debug, Clone)]
pub struct ReleaseLayout {
    base: String,
    version: ReleaseVersion,
}

impl ReleaseLayout {
    /// `base` may carry a trailing slash; it is normalized away so joins
    /// never produce `//`.
    pub fn new(base: &str, version: ReleaseVersion) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            version,
        }
    }

    pub fn version(&self) -> ReleaseVersion {
        self.version
    }

    /// Directory holding the ISO and its manifest, with trailing slash.
    pub fn release_dir_url(&self) -> String {
        format!("{}/{}/{}/{}/", self.base, self.version, ARCH, IMAGE_DIR)
    }

    /// `debian-<version>-amd64-netinst.iso`
    pub fn iso_filename(&self) -> String {
        format!("debian-{}-{}-netinst.iso", self.version, ARCH)
    }

    pub fn iso_url(&self) -> String {
        format!("{}{}", self.release_dir_url(), self.iso_filename())
    }

    pub fn sums_url(&self) -> String {
        format!("{}{}", self.release_dir_url(), SUMS_FILE)
    }
}
