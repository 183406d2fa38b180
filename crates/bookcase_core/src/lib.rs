//! Core domain logic for Bookcase.
//! This crate is the single source of truth for catalog invariants.

pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::book::{parse_year, Book, BookValidationError};
pub use search::matcher::{author_contains, fold_case, titles_match};
pub use service::catalog::{
    AddOutcome, Catalog, CatalogError, CatalogResult, LoadOutcome, RemoveOutcome, SaveOutcome,
};
pub use store::{read_books, write_books, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
