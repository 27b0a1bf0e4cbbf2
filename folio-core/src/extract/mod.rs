//! Content-source adapters.
//!
//! The pagination controller never touches a live document: an adapter
//! produces a plain ordered sequence of [`Page`](crate::types::Page) records
//! and everything downstream depends only on that.

mod html;

pub use html::{flatten_text, HtmlExtractor};
