//! Pagination controller - cursor tracking and navigation

use super::input::Command;
use super::view::SpreadView;
use crate::types::{Book, Page};

/// The two pages currently visible, derived from the cursor on demand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spread<'a> {
    /// Absolute index of the left page
    pub left_index: usize,
    /// The left page, always present
    pub left: &'a Page,
    /// The right page, absent past the end of the book
    pub right: Option<&'a Page>,
}

/// Owns the book and the spread cursor and applies navigation to it.
///
/// The cursor always points at the left page of the spread and is always
/// even; every boundary condition is a silent clamp or no-op, never an
/// error. `0 <= current <= len - 1` holds after any operation sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationController {
    book: Book,
    current: usize,
}

impl PaginationController {
    /// Assemble the book from the extracted source pages and open it at the
    /// contents page.
    pub fn new(sources: Vec<Page>) -> Self {
        Self {
            book: Book::assemble(sources),
            current: 0,
        }
    }

    /// The assembled book
    pub fn book(&self) -> &Book {
        &self.book
    }

    /// Cursor position: absolute index of the left page
    pub fn current(&self) -> usize {
        self.current
    }

    /// Advance one spread. No-op when the last spread is already visible.
    pub fn go_next(&mut self) {
        if self.current + 2 < self.book.len() {
            self.current += 2;
        }
    }

    /// Go back one spread. No-op at the front of the book.
    pub fn go_previous(&mut self) {
        if self.current > 0 {
            self.current -= 2;
        }
    }

    /// Jump so the target page becomes visible.
    ///
    /// The target is clamped into `[0, len - 1]`; an odd result is rounded
    /// down one page so the target lands on the left side of the spread
    /// (round-down bias, matching contents-entry activation).
    pub fn jump_to(&mut self, target: isize) {
        let last = (self.book.len() - 1) as isize;
        let mut target = target.clamp(0, last);
        if target % 2 != 0 {
            target -= 1;
        }
        self.current = target as usize;
    }

    /// Apply a mapped navigation command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Next => self.go_next(),
            Command::Previous => self.go_previous(),
            Command::JumpTo(target) => self.jump_to(target),
            // start is handled by the host before the controller exists
            Command::Start => {}
        }
    }

    /// The currently visible pair of pages
    pub fn spread(&self) -> Spread<'_> {
        Spread {
            left_index: self.current,
            left: &self.book.pages()[self.current],
            right: self.book.page(self.current + 1),
        }
    }

    /// Produce the full view description of the current spread: themed page
    /// cards, navigation-control enabled state, and the contents entries
    /// whenever the contents page is visible.
    pub fn render(&self) -> SpreadView {
        SpreadView::compose(&self.book, self.current)
    }
}
