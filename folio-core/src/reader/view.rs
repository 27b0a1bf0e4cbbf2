//! Spread rendering - the view the host applies

use crate::types::{Book, TocEntry};
use serde::Serialize;

/// Cosmetic page theme, cycling with the absolute page index
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Theme {
    #[serde(rename = "theme-a")]
    A,
    #[serde(rename = "theme-b")]
    B,
    #[serde(rename = "theme-c")]
    C,
}

impl Theme {
    /// Theme for the page at the given absolute index
    pub fn for_index(index: usize) -> Self {
        match index % 3 {
            0 => Theme::A,
            1 => Theme::B,
            _ => Theme::C,
        }
    }

    /// CSS class carried by the page card
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::A => "theme-a",
            Theme::B => "theme-b",
            Theme::C => "theme-c",
        }
    }
}

/// One fully rendered page of a spread
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RenderedPage {
    /// Absolute index into the book
    pub index: usize,
    /// Title of the page, if it has one
    pub title: Option<String>,
    /// Theme applied to the card
    pub theme: Theme,
    /// The page card: body wrapped in a themed `<article>`
    pub html: String,
}

/// Complete description of the visible spread.
///
/// Produced by [`PaginationController::render`](super::PaginationController::render)
/// on every change; the host applies it wholesale instead of patching a live
/// document. Contents-entry jump targets travel as data in `contents`, so
/// activation reads the target at click time and nothing is ever rebound.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SpreadView {
    /// Left page of the spread, always present
    pub left: RenderedPage,
    /// Right page, `None` when the cursor sits on the final page
    pub right: Option<RenderedPage>,
    /// Whether the "previous" control is enabled
    pub prev_enabled: bool,
    /// Whether the "next" control is enabled
    pub next_enabled: bool,
    /// The contents entries, present exactly when the contents page is visible
    pub contents: Option<Vec<TocEntry>>,
}

impl SpreadView {
    /// Compose the view for the spread starting at `current`.
    ///
    /// `current` must be a valid cursor (even, within the book); the
    /// controller maintains that invariant.
    pub(crate) fn compose(book: &Book, current: usize) -> Self {
        let contents_visible = current == 0;
        Self {
            left: rendered_page(book, current),
            right: book
                .page(current + 1)
                .map(|_| rendered_page(book, current + 1)),
            prev_enabled: current > 0,
            next_enabled: current + 2 < book.len(),
            contents: contents_visible.then(|| book.toc().to_vec()),
        }
    }
}

fn rendered_page(book: &Book, index: usize) -> RenderedPage {
    let page = &book.pages()[index];
    let theme = Theme::for_index(index);
    RenderedPage {
        index,
        title: page.title.clone(),
        theme,
        html: page_card(&page.body, theme),
    }
}

/// Wrap a page body in its themed card markup
fn page_card(body: &str, theme: Theme) -> String {
    format!(
        "<article class=\"page-skin {}\">\n{}\n</article>",
        theme.class_name(),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Page;

    fn book(n: usize) -> Book {
        Book::assemble(
            (0..n)
                .map(|i| Page::new(format!("<p>{i}</p>")).with_title(format!("T{i}")))
                .collect(),
        )
    }

    #[test]
    fn test_theme_cycles_every_three_pages() {
        assert_eq!(Theme::for_index(0), Theme::A);
        assert_eq!(Theme::for_index(1), Theme::B);
        assert_eq!(Theme::for_index(2), Theme::C);
        assert_eq!(Theme::for_index(3), Theme::A);
    }

    #[test]
    fn test_compose_wraps_pages_in_cards() {
        let view = SpreadView::compose(&book(3), 2);
        assert_eq!(view.left.index, 2);
        assert_eq!(view.left.theme, Theme::C);
        assert!(view.left.html.starts_with("<article class=\"page-skin theme-c\">"));
        assert!(view.left.html.ends_with("</article>"));

        let right = view.right.unwrap();
        assert_eq!(right.index, 3);
        assert_eq!(right.theme, Theme::A);
    }

    #[test]
    fn test_control_state_at_boundaries() {
        let first = SpreadView::compose(&book(3), 0);
        assert!(!first.prev_enabled);
        assert!(first.next_enabled);

        let last = SpreadView::compose(&book(3), 2);
        assert!(last.prev_enabled);
        assert!(!last.next_enabled);
    }

    #[test]
    fn test_contents_only_on_first_spread() {
        let first = SpreadView::compose(&book(3), 0);
        let entries = first.contents.unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].target, 1);

        let later = SpreadView::compose(&book(3), 2);
        assert!(later.contents.is_none());
    }

    #[test]
    fn test_blank_right_page_on_even_length() {
        // 3 sources -> len 4; cursor 2 shows (2, 3)
        let view = SpreadView::compose(&book(3), 2);
        assert!(view.right.is_some());

        // 1 source -> len 2; cursor 0 shows (0, 1)
        let view = SpreadView::compose(&book(1), 0);
        assert!(view.right.is_some());

        // empty book -> len 1; right side is blank
        let view = SpreadView::compose(&book(0), 0);
        assert!(view.right.is_none());
        assert!(!view.prev_enabled);
        assert!(!view.next_enabled);
    }
}
