//! Watch view
//!
//! Title, player panel and related movies for one movie id, or a dead-end
//! message when the route carried no id.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::app::{DetailPhase, DetailState, DetailView, WatchState};
use crate::ui::grid::{self, Section, Tile};
use crate::ui::Theme;

pub const NO_MOVIE_MESSAGE: &str = "No movie selected to stream";
pub const RELATED_HEADING: &str = "Related Movies";

/// Player panel height, borders included
const PLAYER_HEIGHT: u16 = 7;

pub fn render(frame: &mut Frame, area: Rect, detail: &DetailView) {
    match &detail.state {
        DetailState::NoIdentifier => render_no_identifier(frame, area),
        DetailState::Watching(watch) => render_watching(frame, area, watch),
    }
}

fn render_no_identifier(frame: &mut Frame, area: Rect) {
    let top = area.y + area.height.saturating_sub(1) / 3;
    let line_area = Rect::new(area.x, top, area.width, area.height.min(1));
    let message = Paragraph::new(Span::styled(NO_MOVIE_MESSAGE, Theme::title()))
        .alignment(Alignment::Center);
    frame.render_widget(message, line_area);
}

fn render_watching(frame: &mut Frame, area: Rect, watch: &WatchState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Title
            Constraint::Length(PLAYER_HEIGHT), // Player
            Constraint::Length(1),             // Spacer
            Constraint::Min(0),                // Related
        ])
        .split(area);

    let mut title = vec![Span::styled(watch.display_title().to_string(), Theme::title())];
    if watch.phase() == DetailPhase::Loading {
        title.push(Span::styled("  ⟳", Theme::loading()));
    }
    frame.render_widget(Paragraph::new(Line::from(title)), chunks[0]);

    render_player(frame, chunks[1], watch);

    let related = Section::new(
        RELATED_HEADING,
        watch.visible_related().iter().map(Tile::related).collect(),
    );
    grid::render_sections(frame, chunks[3], &[related], Some(watch.grid.selected));
}

/// The player itself lives in the browser; this panel shows where
fn render_player(frame: &mut Frame, area: Rect, watch: &WatchState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_focused())
        .title(Span::styled(" Streaming Player ", Theme::title()));

    let body = vec![
        Line::from(""),
        Line::from(Span::styled(watch.embed_url.clone(), Theme::link())),
        Line::from(""),
        Line::from(vec![
            Span::styled("o", Theme::keybind()),
            Span::styled(" open in browser", Theme::keybind_desc()),
        ]),
    ];

    let player = Paragraph::new(body)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(player, area);
}
