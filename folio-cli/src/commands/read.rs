//! Read command implementation - interactive terminal reader

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use folio_core::extract::flatten_text;
use folio_core::{
    Command, HtmlExtractor, InputEvent, Page, PaginationController, RenderedPage, Theme,
};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::{DefaultTerminal, Frame};
use std::io;
use std::path::Path;
use tracing::debug;

/// Nominal pixel width of one terminal cell when translating mouse drags
/// into the swipe gesture, whose threshold is in pixels
const CELL_WIDTH_PX: i32 = 10;

struct ReadApp {
    source_name: String,
    /// Pages waiting behind the start screen; consumed on start
    pending: Option<Vec<Page>>,
    controller: Option<PaginationController>,
    drag_origin: Option<u16>,
}

impl ReadApp {
    fn dispatch(&mut self, event: InputEvent) {
        let Some(command) = Command::from_event(event) else {
            return;
        };
        match command {
            Command::Start => {
                // dismiss the start screen, then initialize
                if let Some(pages) = self.pending.take() {
                    debug!("opening book with {} source pages", pages.len());
                    self.controller = Some(PaginationController::new(pages));
                }
            }
            other => {
                if let Some(controller) = self.controller.as_mut() {
                    controller.apply(other);
                }
            }
        }
    }
}

/// Read a book interactively in the terminal
pub fn read(input: &str, container: &str) -> Result<()> {
    let pages = HtmlExtractor::new()
        .with_container(container)
        .extract_file(Path::new(input))
        .with_context(|| format!("Failed to extract pages from {}", input))?;
    debug!("extracted {} pages from {}", pages.len(), input);

    let mut terminal = ratatui::init();
    let _ = execute!(io::stdout(), EnableMouseCapture);
    let result = run(&mut terminal, input, pages);
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

fn run(terminal: &mut DefaultTerminal, source_name: &str, pages: Vec<Page>) -> Result<()> {
    let mut app = ReadApp {
        source_name: source_name.to_string(),
        pending: Some(pages),
        controller: None,
        drag_origin: None,
    };

    loop {
        terminal.draw(|frame| draw(frame, &app))?;

        // nothing animates, so blocking reads are fine
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                code => {
                    if let Some(event) = input_event_for(code, &app) {
                        app.dispatch(event);
                    }
                }
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    app.drag_origin = Some(mouse.column);
                }
                MouseEventKind::Up(MouseButton::Left) => {
                    if let Some(origin) = app.drag_origin.take() {
                        let dx = (i32::from(mouse.column) - i32::from(origin)) * CELL_WIDTH_PX;
                        app.dispatch(InputEvent::Swipe { dx });
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }
}

/// Map a key press to an input event, honoring the current screen
fn input_event_for(code: KeyCode, app: &ReadApp) -> Option<InputEvent> {
    match code {
        KeyCode::Enter if app.controller.is_none() => Some(InputEvent::StartControl),
        KeyCode::Right => Some(InputEvent::ArrowRight),
        KeyCode::Left => Some(InputEvent::ArrowLeft),
        KeyCode::Char('n') => Some(InputEvent::NextControl),
        KeyCode::Char('p') => Some(InputEvent::PreviousControl),
        KeyCode::Char(digit @ '1'..='9') => {
            let controller = app.controller.as_ref()?;
            let entries = controller.render().contents?;
            let entry = entries.get(digit as usize - '1' as usize)?;
            Some(InputEvent::ContentsEntry {
                target: entry.target,
            })
        }
        _ => None,
    }
}

fn draw(frame: &mut Frame, app: &ReadApp) {
    match &app.controller {
        None => draw_start(frame, app),
        Some(controller) => draw_spread(frame, controller),
    }
}

fn draw_start(frame: &mut Frame, app: &ReadApp) {
    let lines = vec![
        Line::from(Span::styled(
            "folio",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(app.source_name.as_str()),
        Line::from(""),
        Line::from("Press Enter to open the book - q to quit"),
    ];
    let area = centered(frame.area(), 60, 7);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn draw_spread(frame: &mut Frame, controller: &PaginationController) {
    let view = controller.render();

    let rows = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(frame.area());
    let columns =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(rows[0]);

    draw_page(frame, columns[0], Some(&view.left));
    draw_page(frame, columns[1], view.right.as_ref());

    let mut hints: Vec<Span> = vec![
        dimmed_unless("<- prev", view.prev_enabled),
        Span::raw("  "),
        dimmed_unless("next ->", view.next_enabled),
    ];
    if view.contents.is_some() {
        hints.push(Span::raw("  [1-9] open entry"));
    }
    hints.push(Span::raw("  q quit"));
    frame.render_widget(Paragraph::new(Line::from(hints)), rows[1]);
}

fn dimmed_unless(label: &str, enabled: bool) -> Span<'_> {
    if enabled {
        Span::raw(label)
    } else {
        Span::styled(label, Style::default().add_modifier(Modifier::DIM))
    }
}

fn draw_page(frame: &mut Frame, area: Rect, page: Option<&RenderedPage>) {
    let Some(page) = page else {
        // blank right page at the end of an even-length book
        frame.render_widget(Block::default().borders(Borders::ALL), area);
        return;
    };

    // untitled pages reuse the contents-page fallback label
    let title = page
        .title
        .clone()
        .unwrap_or_else(|| format!("Page {}", page.index));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme_color(page.theme)))
        .title(format!(" {} ", title));

    frame.render_widget(
        Paragraph::new(flatten_text(&page.html))
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

fn theme_color(theme: Theme) -> Color {
    match theme {
        Theme::A => Color::Cyan,
        Theme::B => Color::Magenta,
        Theme::C => Color::Green,
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
