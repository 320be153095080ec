//! # Error Types
//!
//! Fatal failures of a validation walk. Malformed JSON is *not* an error —
//! it becomes a [`Diagnostic`](crate::Diagnostic) and the walk continues.
//! Only filesystem-level failures abort the run.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal failure while walking or reading the tree.
#[derive(Error, Debug)]
pub enum WalkError {
    /// A file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// A directory could not be traversed.
    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}
