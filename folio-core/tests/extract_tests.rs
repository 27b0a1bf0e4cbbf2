//! Extraction and contents-page synthesis tests
//!
//! These run the whole source-to-view pipeline on a small document and pin
//! the synthesized markup with snapshots to catch unintended format drift.

use folio_core::{Book, HtmlExtractor, PaginationController};

/// A small but complete source document: three page blocks, the middle one
/// without a heading.
const DOCUMENT: &str = r#"<!DOCTYPE html>
<html>
  <body>
    <section id="start"><button id="btnStart">Open</button></section>
    <div id="book-pages">
      <div>
        <h2>Intro</h2>
        <p>It begins.</p>
      </div>
      <div>
        <p>An interlude without a heading.</p>
      </div>
      <div>
        <h2>End</h2>
        <p>It ends.</p>
      </div>
    </div>
  </body>
</html>
"#;

fn assembled() -> Book {
    let pages = HtmlExtractor::new().extract(DOCUMENT).unwrap();
    Book::assemble(pages)
}

#[test]
fn document_to_book() {
    let book = assembled();
    assert_eq!(book.len(), 4);
    assert_eq!(book.page(1).unwrap().title.as_deref(), Some("Intro"));
    assert_eq!(book.page(2).unwrap().title, None);
    assert!(book.page(3).unwrap().body.contains("It ends."));
}

#[test]
fn contents_page_markup() {
    let book = assembled();
    insta::assert_snapshot!(book.page(0).unwrap().body, @r#"
    <h2>Contents</h2>
    <ul class="toc">
      <li data-target="1">Intro</li>
      <li data-target="2">Page 2</li>
      <li data-target="3">End</li>
    </ul>
    <p class="toc-hint">Select an entry to jump straight to its page.</p>
    "#);
}

#[test]
fn contents_entries_as_json() {
    let book = Book::assemble(
        HtmlExtractor::new()
            .extract(r#"<div id="book-pages"><div><h2>Solo</h2><p>x</p></div></div>"#)
            .unwrap(),
    );
    insta::assert_json_snapshot!(book.toc(), @r#"
    [
      {
        "label": "Solo",
        "target": 1
      }
    ]
    "#);
}

#[test]
fn rendered_card_carries_theme_class() {
    let pages = HtmlExtractor::new().extract(DOCUMENT).unwrap();
    let mut controller = PaginationController::new(pages);
    controller.jump_to(2);

    let view = controller.render();
    assert!(view.left.html.starts_with("<article class=\"page-skin theme-c\">"));
    let right = view.right.unwrap();
    assert!(right.html.starts_with("<article class=\"page-skin theme-a\">"));
    assert!(right.html.contains("It ends."));
}

#[test]
fn whole_pipeline_text_view() {
    let pages = HtmlExtractor::new().extract(DOCUMENT).unwrap();
    let controller = PaginationController::new(pages);

    let view = controller.render();
    let text = folio_core::extract::flatten_text(&view.left.html);
    assert!(text.starts_with("Contents"));
    assert!(text.contains("- Intro"));
    assert!(text.contains("- Page 2"));
}
