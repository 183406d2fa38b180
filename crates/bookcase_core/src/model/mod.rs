//! Domain model for catalog records.
//!
//! # Responsibility
//! - Define the book record shared by search, storage and service layers.
//!
//! # Invariants
//! - Records have no identity field; lookups match on text fields.

pub mod book;
