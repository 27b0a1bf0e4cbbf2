//! HTML source adapter

use crate::error::{ExtractError, FolioError};
use crate::types::Page;
use scraper::{ElementRef, Html, Selector};
use std::fs;
use std::path::Path;

/// Extracts the ordered page blocks from an HTML document.
///
/// One page per direct `div` child of the configured container element; the
/// page title is the text of the first `h2` inside the block, if any.
pub struct HtmlExtractor {
    /// CSS selector of the container holding the page blocks
    container: String,
}

impl HtmlExtractor {
    pub fn new() -> Self {
        Self {
            container: "#book-pages".to_string(),
        }
    }

    /// Set the container selector
    pub fn with_container(mut self, selector: impl Into<String>) -> Self {
        self.container = selector.into();
        self
    }

    /// Extract the ordered source pages from a full HTML document.
    ///
    /// A document without the container (or with an empty one) yields an
    /// empty sequence; only a malformed configured selector is an error.
    pub fn extract(&self, html: &str) -> Result<Vec<Page>, ExtractError> {
        let block_selector = Selector::parse(&format!("{} > div", self.container))
            .map_err(|_| ExtractError::InvalidSelector(self.container.clone()))?;
        let title_selector = Selector::parse("h2").unwrap();

        let document = Html::parse_document(html);
        let mut pages = Vec::new();

        for block in document.select(&block_selector) {
            let title = block
                .select(&title_selector)
                .next()
                .map(|heading| heading.text().collect::<String>().trim().to_string())
                .filter(|title| !title.is_empty());

            let mut page = Page::new(block.inner_html().trim());
            if let Some(title) = title {
                page = page.with_title(title);
            }
            pages.push(page);
        }

        Ok(pages)
    }

    /// Read a document from disk and extract its pages
    pub fn extract_file(&self, path: &Path) -> Result<Vec<Page>, FolioError> {
        let html = fs::read_to_string(path)?;
        Ok(self.extract(&html)?)
    }
}

impl Default for HtmlExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Tags that end the current line of flattened output
const BLOCK_TAGS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "div", "section", "article", "ul", "ol", "blockquote",
];

/// Collapse an HTML fragment to displayable plain text.
///
/// Inline markup is dropped, block elements become paragraphs separated by a
/// blank line, and list items become `- ` prefixed lines. Used by terminal
/// front ends that cannot render markup.
pub fn flatten_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut out = String::new();
    flatten_element(fragment.root_element(), &mut out);
    out.trim().to_string()
}

fn flatten_element(element: ElementRef, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            push_normalized(out, text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            let tag = child_element.value().name();
            if tag == "br" {
                out.push('\n');
                continue;
            }

            let is_block = BLOCK_TAGS.contains(&tag);
            if is_block {
                end_paragraph(out);
            } else if tag == "li" {
                end_line(out);
                out.push_str("- ");
            }

            flatten_element(child_element, out);

            if is_block {
                end_paragraph(out);
            } else if tag == "li" {
                end_line(out);
            }
        }
    }
}

/// Append text with whitespace runs collapsed to single spaces
fn push_normalized(out: &mut String, text: &str) {
    let mut at_break = out.is_empty() || out.ends_with([' ', '\n']);
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !at_break {
                out.push(' ');
                at_break = true;
            }
        } else {
            out.push(ch);
            at_break = false;
        }
    }
}

fn end_line(out: &mut String) {
    while out.ends_with(' ') {
        out.pop();
    }
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

fn end_paragraph(out: &mut String) {
    end_line(out);
    if !out.is_empty() && !out.ends_with("\n\n") {
        out.push('\n');
    }
}
