//! Book domain model.
//!
//! # Responsibility
//! - Define the canonical record stored by the catalog.
//! - Parse untyped year input into the integer year the record requires.
//!
//! # Invariants
//! - `year` is always an integer; negative values represent BCE dates.
//! - Records carry no identity; equality is field-wise.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One catalog entry.
///
/// Serialized with exactly the keys `title`, `author`, `genre`, `year`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub genre: String,
    /// Publication year. No range restriction beyond the integer type.
    pub year: i32,
}

impl Book {
    /// Creates a record from its four fields.
    ///
    /// Text fields are stored as given; they are not trimmed or checked for
    /// emptiness.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            year,
        }
    }

    /// Creates a record from text year input.
    ///
    /// # Errors
    /// - Returns [`BookValidationError::NonIntegerYear`] when `year` is not a
    ///   base-10 integer.
    pub fn with_year_text(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: &str,
    ) -> Result<Self, BookValidationError> {
        let year = parse_year(year)?;
        Ok(Self::new(title, author, genre, year))
    }
}

/// Validation failure for book input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    /// Year input is not an integer.
    NonIntegerYear { value: String },
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerYear { value } => {
                write!(f, "year must be an integer, got `{value}`")
            }
        }
    }
}

impl Error for BookValidationError {}

/// Parses year text into an integer year.
///
/// Surrounding whitespace is ignored. A leading `-` marks a BCE year.
pub fn parse_year(value: &str) -> Result<i32, BookValidationError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| BookValidationError::NonIntegerYear {
            value: value.to_string(),
        })
}
