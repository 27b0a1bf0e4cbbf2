//! Folio Core Library
//!
//! This crate provides the reading model for the folio book viewer: an HTML
//! source adapter extracts ordered page blocks, a book is assembled with a
//! synthesized table of contents at index 0, and a pagination controller
//! tracks the two-page spread cursor and renders the view the host applies.

pub mod error;
pub mod extract;
pub mod reader;
pub mod types;

pub use error::{ExtractError, FolioError, Result};
pub use extract::HtmlExtractor;
pub use reader::{
    Command, InputEvent, PaginationController, RenderedPage, SpreadView, Theme,
    SWIPE_THRESHOLD_PX,
};
pub use types::{Book, Page, TocEntry};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_from_extracted_pages() {
        let html = r#"<div id="book-pages"><div><h2>Only</h2><p>page</p></div></div>"#;
        let pages = HtmlExtractor::new().extract(html).unwrap();
        let controller = PaginationController::new(pages);
        assert_eq!(controller.book().len(), 2);
        assert_eq!(controller.book().toc()[0].label, "Only");
    }
}
