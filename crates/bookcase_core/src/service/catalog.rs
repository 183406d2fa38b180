//! Catalog aggregate over an ordered book sequence.
//!
//! # Responsibility
//! - Provide add/find/remove/count entry points over in-memory records.
//! - Persist and restore the whole sequence through the JSON file store.
//!
//! # Invariants
//! - Insertion order is the only ordering; removals keep survivor order.
//! - Every stored record has an integer year.
//! - A failed add or load leaves the sequence unchanged.
//! - Titles are not unique; remove deletes every case-insensitive match.

use crate::model::book::{Book, BookValidationError};
use crate::search::matcher::FoldedQuery;
use crate::store::{read_books, write_books, StoreError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog operation error.
#[derive(Debug)]
pub enum CatalogError {
    /// Input rejected before touching the sequence.
    Validation(BookValidationError),
    /// Save or load failed in the file store.
    Store(StoreError),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<BookValidationError> for CatalogError {
    fn from(value: BookValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for CatalogError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Confirmation returned by add operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
}

/// Result of a remove-by-title call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// At least one record matched; `count` records were dropped.
    Removed { count: usize },
    /// No title matched.
    NotFound,
}

/// Confirmation returned by [`Catalog::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
}

/// Result of [`Catalog::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Sequence replaced with `count` records from file.
    Loaded { count: usize },
    /// Path did not exist; sequence untouched.
    FileNotFound,
}

impl Display for AddOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("book added")
    }
}

impl Display for RemoveOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Removed { .. } => f.write_str("book removed"),
            Self::NotFound => f.write_str("book not found"),
        }
    }
}

impl Display for SaveOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("books saved")
    }
}

impl Display for LoadOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loaded { .. } => f.write_str("books loaded"),
            Self::FileNotFound => f.write_str("file not found"),
        }
    }
}

/// In-memory book catalog owned by a single caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog seeded with `books` in the given order.
    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Appends a record built from typed fields.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
    ) -> AddOutcome {
        self.add_book(Book::new(title, author, genre, year))
    }

    /// Appends a record whose year arrives as text.
    ///
    /// # Errors
    /// - [`CatalogError::Validation`] when `year` is not an integer. The
    ///   sequence is not modified.
    pub fn add_with_year_text(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: &str,
    ) -> CatalogResult<AddOutcome> {
        let book = Book::with_year_text(title, author, genre, year).inspect_err(|_| {
            debug!("event=catalog_add module=catalog status=rejected reason=non_integer_year");
        })?;
        Ok(self.add_book(book))
    }

    /// Appends an already-built record.
    pub fn add_book(&mut self, book: Book) -> AddOutcome {
        self.books.push(book);
        debug!(
            "event=catalog_add module=catalog status=ok count={}",
            self.books.len()
        );
        AddOutcome::Added
    }

    /// Returns every record whose title equals `title`, ignoring case.
    pub fn find_by_title(&self, title: &str) -> Vec<&Book> {
        let query = FoldedQuery::new(title);
        self.books
            .iter()
            .filter(|book| query.equals(&book.title))
            .collect()
    }

    /// Returns every record whose author contains `author`, ignoring case.
    pub fn find_by_author(&self, author: &str) -> Vec<&Book> {
        let query = FoldedQuery::new(author);
        self.books
            .iter()
            .filter(|book| query.contained_in(&book.author))
            .collect()
    }

    /// Removes every record whose title equals `title`, ignoring case.
    pub fn remove(&mut self, title: &str) -> RemoveOutcome {
        let query = FoldedQuery::new(title);
        let before = self.books.len();
        self.books.retain(|book| !query.equals(&book.title));
        let removed = before - self.books.len();

        debug!(
            "event=catalog_remove module=catalog status=ok removed={} count={}",
            removed,
            self.books.len()
        );
        if removed == 0 {
            RemoveOutcome::NotFound
        } else {
            RemoveOutcome::Removed { count: removed }
        }
    }

    /// Number of records currently held.
    pub fn count(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Records in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Writes the full sequence to `path`, overwriting existing content.
    ///
    /// # Errors
    /// - [`CatalogError::Store`] carrying the underlying I/O or encoding
    ///   failure.
    pub fn save(&self, path: impl AsRef<Path>) -> CatalogResult<SaveOutcome> {
        write_books(path, &self.books)?;
        Ok(SaveOutcome::Saved)
    }

    /// Replaces the sequence with the records stored at `path`.
    ///
    /// A missing file yields [`LoadOutcome::FileNotFound`] and keeps the
    /// current records.
    ///
    /// # Errors
    /// - [`CatalogError::Store`] for malformed content or other I/O
    ///   failures. The current records are kept.
    pub fn load(&mut self, path: impl AsRef<Path>) -> CatalogResult<LoadOutcome> {
        let Some(books) = read_books(path)? else {
            return Ok(LoadOutcome::FileNotFound);
        };

        let count = books.len();
        self.books = books;
        info!(
            "event=catalog_load module=catalog status=ok count={}",
            count
        );
        Ok(LoadOutcome::Loaded { count })
    }
}

#[cfg(test)]
mod tests {
    use super::{AddOutcome, LoadOutcome, RemoveOutcome, SaveOutcome};

    #[test]
    fn outcome_messages_are_stable() {
        assert_eq!(AddOutcome::Added.to_string(), "book added");
        assert_eq!(
            RemoveOutcome::Removed { count: 2 }.to_string(),
            "book removed"
        );
        assert_eq!(RemoveOutcome::NotFound.to_string(), "book not found");
        assert_eq!(SaveOutcome::Saved.to_string(), "books saved");
        assert_eq!(LoadOutcome::Loaded { count: 0 }.to_string(), "books loaded");
        assert_eq!(LoadOutcome::FileNotFound.to_string(), "file not found");
    }
}
