//! File persistence for the catalog.
//!
//! # Responsibility
//! - Read and write the whole book sequence as one JSON document.
//! - Report I/O and decoding failures with the offending path attached.
//!
//! # Invariants
//! - The on-disk shape is a top-level JSON array of book objects.
//! - A missing file is reported as absence, not as an error.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod json_file;

pub use json_file::{read_books, write_books};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    /// File could not be opened, created, read or written.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File content is not a valid book array, or encoding failed.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Path of the file the failed operation targeted.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Json { path, .. } => path.as_path(),
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "i/o error on `{}`: {source}", path.display()),
            Self::Json { path, source } => {
                write!(f, "invalid catalog json in `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}
