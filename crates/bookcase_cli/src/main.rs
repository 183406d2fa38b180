//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `bookcase_core` linkage and walk through catalog usage once.
//! - Keep all state local to `main`; the catalog file lives in a temp dir.

use bookcase_core::{core_version, init_logging, Catalog, CatalogError, LoggingConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("bookcase_core version={}", core_version());

    let log_config = LoggingConfig::with_default_level(std::env::temp_dir().join("bookcase-logs"));
    if let Err(err) = init_logging(&log_config) {
        eprintln!("bookcase_cli logging disabled: {err}");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("bookcase_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CatalogError> {
    let path = std::env::temp_dir().join(format!("bookcase-{}.json", std::process::id()));

    let mut catalog = Catalog::new();
    catalog.add(
        "Cien años de soledad",
        "Gabriel García Márquez",
        "Novela",
        1967,
    );
    println!("{}", catalog.save(&path)?);

    let mut restored = Catalog::new();
    println!("{}", restored.load(&path)?);
    for book in restored.find_by_author("Gabriel García Márquez") {
        println!("{} | {} | {} | {}", book.title, book.author, book.genre, book.year);
    }

    // Best effort; the walkthrough already succeeded.
    let _ = std::fs::remove_file(&path);
    Ok(())
}
