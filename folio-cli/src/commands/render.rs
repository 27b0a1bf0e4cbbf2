//! Render command implementation

use anyhow::{Context, Result};
use folio_core::{HtmlExtractor, PaginationController, SpreadView};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Render the spread containing the given page to HTML (or JSON)
pub fn render(
    input: &str,
    container: &str,
    page: isize,
    json: bool,
    output: Option<&str>,
) -> Result<()> {
    let pages = HtmlExtractor::new()
        .with_container(container)
        .extract_file(Path::new(input))
        .with_context(|| format!("Failed to extract pages from {}", input))?;

    let mut controller = PaginationController::new(pages);
    controller.jump_to(page);
    debug!(
        "rendering spread at cursor {} of {}",
        controller.current(),
        controller.book().len()
    );

    let view = controller.render();
    let rendered = if json {
        serde_json::to_string_pretty(&view)?
    } else {
        spread_html(&view)
    };

    match output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write output file: {}", path))?,
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Wrap the two page cards in a spread container
fn spread_html(view: &SpreadView) -> String {
    let mut html = String::from("<div class=\"spread\">\n");
    html.push_str(&view.left.html);
    html.push('\n');
    if let Some(right) = &view.right {
        html.push_str(&right.html);
        html.push('\n');
    }
    html.push_str("</div>");
    html
}
