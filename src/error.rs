//! Structured errors (spec.md §7), replacing the teacher's print-and-exit
//! style with a `thiserror` enum so callers (library and CLI alike) can
//! match on failure modes instead of scraping stdout.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("not a {expected} archive (found {found:?})")]
    FormatMismatch { expected: String, found: String },

    #[error("malformed archive header: {0}")]
    InvalidHeader(String),

    #[error("refusing to overwrite existing file {0}")]
    OutputExists(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
