//! Page type - one renderable block of the book

use serde::{Deserialize, Serialize};

/// A single renderable page.
///
/// Pages are read from the source document once and never mutated. The body
/// is an HTML fragment; the title is the text of the heading the source
/// adapter found inside the block, used only for the table of contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page {
    /// Inner HTML of the page block
    pub body: String,

    /// Extracted heading text, if the block had one
    pub title: Option<String>,
}

impl Page {
    /// Create a page from its body markup
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            title: None,
        }
    }

    /// Set the table-of-contents title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
