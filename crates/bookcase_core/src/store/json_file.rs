//! Whole-file JSON read/write for book sequences.
//!
//! # Side effects
//! - Emits `store_write` / `store_read` logging events with duration,
//!   record count and status. Record contents are never logged.

use super::{StoreError, StoreResult};
use crate::model::book::Book;
use log::{debug, error, info};
use serde_json::error::Category;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;
use std::time::Instant;

/// Writes `books` to `path` as a JSON array, replacing existing content.
///
/// The file handle is dropped before returning on every path. An
/// interrupted write can leave a truncated file behind.
///
/// # Errors
/// - [`StoreError::Io`] when the file cannot be created or written.
/// - [`StoreError::Json`] when encoding fails.
pub fn write_books(path: impl AsRef<Path>, books: &[Book]) -> StoreResult<()> {
    let path = path.as_ref();
    let started_at = Instant::now();
    debug!(
        "event=store_write module=store status=start path={}",
        path.display()
    );

    let result = write_inner(path, books);
    match &result {
        Ok(()) => info!(
            "event=store_write module=store status=ok count={} duration_ms={}",
            books.len(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=store_write module=store status=error duration_ms={} error={}",
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}

/// Reads a JSON book array from `path`.
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
/// - [`StoreError::Io`] for any open/read failure other than not-found.
/// - [`StoreError::Json`] when content is not an array of complete book
///   objects with an integer `year`.
pub fn read_books(path: impl AsRef<Path>) -> StoreResult<Option<Vec<Book>>> {
    let path = path.as_ref();
    let started_at = Instant::now();
    debug!(
        "event=store_read module=store status=start path={}",
        path.display()
    );

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(
                "event=store_read module=store status=not_found duration_ms={}",
                started_at.elapsed().as_millis()
            );
            return Ok(None);
        }
        Err(source) => {
            let err = io_error(path, source);
            error!(
                "event=store_read module=store status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err);
        }
    };

    match serde_json::from_reader::<_, Vec<Book>>(BufReader::new(file)) {
        Ok(books) => {
            info!(
                "event=store_read module=store status=ok count={} duration_ms={}",
                books.len(),
                started_at.elapsed().as_millis()
            );
            Ok(Some(books))
        }
        Err(source) => {
            let err = json_error(path, source);
            error!(
                "event=store_read module=store status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn write_inner(path: &Path, books: &[Book]) -> StoreResult<()> {
    let file = File::create(path).map_err(|source| io_error(path, source))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, books).map_err(|source| json_error(path, source))?;
    writer.flush().map_err(|source| io_error(path, source))
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

// serde_json reports writer/reader failures as its own error type; surface
// those as raw I/O errors.
fn json_error(path: &Path, source: serde_json::Error) -> StoreError {
    if source.classify() == Category::Io {
        return io_error(path, std::io::Error::from(source));
    }
    StoreError::Json {
        path: path.to_path_buf(),
        source,
    }
}
