//! Catalog view
//!
//! Search results (when there are any) above this week's trending movies.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::CatalogState;
use crate::ui::grid::{self, Section, Tile};
use crate::ui::Theme;

pub const SEARCH_RESULTS_HEADING: &str = "🎯 Search Results";
pub const TRENDING_HEADING: &str = "🔥 Trending This Week";

/// Sections in display order. Empty lists produce empty sections, which
/// the grid skips.
pub fn sections(catalog: &CatalogState) -> Vec<Section> {
    vec![
        Section::new(
            SEARCH_RESULTS_HEADING,
            catalog.visible_results().iter().map(Tile::catalog).collect(),
        ),
        Section::new(
            TRENDING_HEADING,
            catalog.visible_trending().iter().map(Tile::catalog).collect(),
        ),
    ]
}

pub fn render(frame: &mut Frame, area: Rect, catalog: &CatalogState) {
    if catalog.visible_len() == 0 {
        let hint = Paragraph::new(Line::from(vec![
            Span::styled("/", Theme::keybind()),
            Span::styled(" to search", Theme::keybind_desc()),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(hint, area);
        return;
    }

    grid::render_sections(frame, area, &sections(catalog), Some(catalog.grid.selected));
}
