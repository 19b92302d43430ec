//! Terminal UI components
//!
//! Built with ratatui. Keyboard-first navigation throughout.

pub mod catalog;
pub mod detail;
pub mod grid;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, DetailPhase, InputMode, SearchInput};
use crate::route::Route;

/// Site name shown in the header
pub const SITE_NAME: &str = "CoolMovieHub";

/// Search box placeholder
pub const SEARCH_PLACEHOLDER: &str = "Search for a movie...";

/// Main render function - dispatches to view-specific renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Style::default().bg(Theme::BACKGROUND)), area);

    // Main layout: header, content, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0], app);

    let content = Rect {
        x: chunks[1].x + 1,
        width: chunks[1].width.saturating_sub(2),
        ..chunks[1]
    };
    match app.route {
        Route::Catalog => catalog::render(frame, content, &app.catalog),
        Route::Watch(_) => detail::render(frame, content, &app.detail),
    }

    render_status_bar(frame, chunks[2], app);
}

/// Site name, plus the search box on screens that have one
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16), // Site name
            Constraint::Min(1),     // Search box
        ])
        .split(area);

    let brand = Paragraph::new(Span::styled(SITE_NAME, Theme::brand()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Theme::border()),
        );
    frame.render_widget(brand, header_chunks[0]);

    if let Some(search) = app.active_search() {
        render_search_box(frame, header_chunks[1], search, app.input_mode == InputMode::Editing);
    }
}

fn render_search_box(frame: &mut Frame, area: Rect, search: &SearchInput, editing: bool) {
    let line = if editing {
        let cursor = search.cursor.min(search.query.len());
        let (before, after) = search.query.split_at(cursor);
        Line::from(vec![
            Span::raw("⌕ "),
            Span::raw(before.to_string()),
            Span::styled("│", Theme::input_cursor()),
            Span::raw(after.to_string()),
        ])
    } else if search.query.is_empty() {
        Line::from(Span::styled(format!("⌕ {}", SEARCH_PLACEHOLDER), Theme::dimmed()))
    } else {
        Line::from(format!("⌕ {}", search.query))
    };

    let border = if editing {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    let search_box = Paragraph::new(line).style(Theme::input()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(Span::styled(" Search ", Theme::title())),
    );
    frame.render_widget(search_box, area);
}

/// Mode, route, load phase, transient notice and key hints
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mode = match app.input_mode {
        InputMode::Normal => Span::styled(
            " NORMAL ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::PRIMARY),
        ),
        InputMode::Editing => Span::styled(
            " INSERT ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::WARNING),
        ),
    };

    let mut spans = vec![
        mode,
        Span::styled(format!(" {} ", app.route), Theme::dimmed()),
    ];

    if let Some(watch) = app.detail.state.watching().filter(|_| app.route.movie_id().is_some()) {
        let phase = match watch.phase() {
            DetailPhase::Loading => Span::styled("LOADING ", Theme::loading()),
            DetailPhase::Ready => Span::styled("READY ", Theme::success()),
        };
        spans.push(phase);
    }

    if let Some(notice) = &app.notice {
        spans.push(Span::raw("│ "));
        let style = if notice.is_error() {
            Theme::error()
        } else {
            Theme::warning()
        };
        spans.push(Span::styled(notice.text().to_string(), style));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::raw("│"));
    spans.push(Span::styled(
        " q:quit  /:search  ⏎:open  o:player  g:home  ESC:back ",
        Theme::dimmed(),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Theme::status_bar());
    frame.render_widget(status, area);
}
