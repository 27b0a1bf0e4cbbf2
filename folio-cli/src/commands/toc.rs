//! Toc command implementation

use anyhow::{Context, Result};
use folio_core::{Book, HtmlExtractor, TocEntry};
use serde::Serialize;
use std::path::Path;

/// Table of contents output
#[derive(Serialize)]
struct TocOutput<'a> {
    pages: usize,
    entries: &'a [TocEntry],
}

/// Print the synthesized table of contents of a book
pub fn toc(input: &str, container: &str, json: bool) -> Result<()> {
    let pages = HtmlExtractor::new()
        .with_container(container)
        .extract_file(Path::new(input))
        .with_context(|| format!("Failed to extract pages from {}", input))?;

    let book = Book::assemble(pages);

    if json {
        let output = TocOutput {
            pages: book.len() - 1,
            entries: book.toc(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Contents ({} pages):", book.len() - 1);
        for entry in book.toc() {
            println!("  {:>3}  {}", entry.target, entry.label);
        }
    }

    Ok(())
}
