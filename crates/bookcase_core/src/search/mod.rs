//! Text matching used by catalog lookups.
//!
//! # Responsibility
//! - Keep case folding rules in one place for find and remove paths.

pub mod matcher;
