//! Failure kinds for a pin run.
//!
//! Every error between "invoke" and "files written" is one of these four
//! kinds; `main` prints the rendered message as a one-line diagnostic and
//! exits non-zero.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PinError {
    /// Network failure, curl-level error, or non-success HTTP status.
    #[error("transport error for {url}: {reason}")]
    Transport { url: String, reason: String },

    /// The mirror index contained no entry matching `<major>.<minor>.<patch>/`.
    #[error("no release directories found at {url}")]
    NoVersionsFound { url: String },

    /// The checksum manifest was fetched but never names the expected file.
    #[error("no checksum for {filename} in {url}")]
    ChecksumNotFound { url: String, filename: String },

    /// An output artifact could not be written.
    #[error("failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
