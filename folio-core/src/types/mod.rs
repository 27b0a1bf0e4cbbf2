//! Core types for the folio reading model

mod book;
mod page;
mod toc;

pub use book::Book;
pub use page::Page;
pub use toc::TocEntry;
