//! The main Book type - ordered pages plus the synthesized table of contents

use super::{Page, TocEntry};
use serde::{Deserialize, Serialize};

/// The complete book: a table-of-contents page at index 0 followed by the
/// content pages in source order.
///
/// Assembled exactly once from the extracted source pages and immutable
/// afterwards. `len() == source pages + 1`, always at least 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    pages: Vec<Page>,
    toc: Vec<TocEntry>,
}

impl Book {
    /// Assemble a book from the ordered source pages.
    ///
    /// Builds one TOC entry per source page (label = trimmed title, or
    /// `"Page {n}"` when the block had no usable title; target = source
    /// index + 1, accounting for the prepended contents page), synthesizes
    /// the contents page from those entries, and prepends it. An empty
    /// source sequence yields a book of length 1 with an empty entry list.
    pub fn assemble(sources: Vec<Page>) -> Self {
        let toc: Vec<TocEntry> = sources
            .iter()
            .enumerate()
            .map(|(idx, page)| {
                let label = page
                    .title
                    .as_deref()
                    .map(str::trim)
                    .filter(|title| !title.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Page {}", idx + 1));
                TocEntry::new(label, idx + 1)
            })
            .collect();

        let contents = Page::new(contents_body(&toc)).with_title("Contents");

        let mut pages = Vec::with_capacity(sources.len() + 1);
        pages.push(contents);
        pages.extend(sources);

        Self { pages, toc }
    }

    /// Total number of pages, contents page included
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// True only for a book that was never assembled; `assemble` always
    /// prepends the contents page
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page at the given absolute index
    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// All pages in order
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// The table of contents entries, in page order
    pub fn toc(&self) -> &[TocEntry] {
        &self.toc
    }
}

/// Synthesize the body of the contents page: a heading, one list item per
/// entry carrying its jump target, and a short usage hint.
fn contents_body(toc: &[TocEntry]) -> String {
    let mut body = String::from("<h2>Contents</h2>\n<ul class=\"toc\">\n");
    for entry in toc {
        body.push_str(&format!(
            "  <li data-target=\"{}\">{}</li>\n",
            entry.target,
            escape_text(&entry.label)
        ));
    }
    body.push_str("</ul>\n<p class=\"toc-hint\">Select an entry to jump straight to its page.</p>");
    body
}

/// Minimal HTML text escaping for labels lifted out of document text
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_prepends_contents_page() {
        let book = Book::assemble(vec![
            Page::new("<p>one</p>").with_title("Intro"),
            Page::new("<p>two</p>"),
        ]);

        assert_eq!(book.len(), 3);
        assert_eq!(book.page(0).unwrap().title.as_deref(), Some("Contents"));
        assert_eq!(book.page(1).unwrap().body, "<p>one</p>");

        assert_eq!(book.toc().len(), 2);
        assert_eq!(book.toc()[0], TocEntry::new("Intro", 1));
        // missing title falls back to a 1-based page label
        assert_eq!(book.toc()[1], TocEntry::new("Page 2", 2));
    }

    #[test]
    fn test_blank_title_falls_back() {
        let book = Book::assemble(vec![Page::new("<p>x</p>").with_title("   ")]);
        assert_eq!(book.toc()[0].label, "Page 1");
    }

    #[test]
    fn test_empty_sources_yield_single_page() {
        let book = Book::assemble(Vec::new());
        assert_eq!(book.len(), 1);
        assert!(book.toc().is_empty());
        assert!(book.page(0).unwrap().body.contains("<ul class=\"toc\">"));
    }

    #[test]
    fn test_book_serialization() {
        let book = Book::assemble(vec![Page::new("<p>x</p>").with_title("X")]);
        let json = serde_json::to_string(&book).unwrap();
        let deserialized: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(book, deserialized);
    }

    #[test]
    fn test_contents_page_escapes_labels() {
        let book = Book::assemble(vec![Page::new("<p>x</p>").with_title("War & <Peace>")]);
        let contents = book.page(0).unwrap();
        assert!(contents.body.contains("War &amp; &lt;Peace&gt;"));
        assert!(contents.body.contains("data-target=\"1\""));
        // the entry itself keeps the raw label
        assert_eq!(book.toc()[0].label, "War & <Peace>");
    }
}
