//! Core use-case services.
//!
//! # Responsibility
//! - Expose the catalog aggregate to embedding applications.
//! - Keep callers decoupled from matching and file storage details.

pub mod catalog;
