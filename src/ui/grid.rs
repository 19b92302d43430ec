//! Movie tile grid
//!
//! Tiles are laid out five to a row under an optional heading. Several
//! sections can be stacked; the stack scrolls so the selected tile's row
//! stays on screen.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::api::embed::{poster_url, PosterSize, IMAGE_BASE_URL, PLACEHOLDER_POSTER_URL};
use crate::app::GRID_COLUMNS;
use crate::models::MovieSummary;
use crate::ui::Theme;

/// Rows occupied by one tile, borders included
pub const TILE_HEIGHT: u16 = 6;

/// Poster shown on a tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poster {
    /// Image URL (a real poster or the remote placeholder image)
    Image(String),
    /// Local "No Image" block
    Block,
}

impl Poster {
    /// Text drawn in the poster area
    pub fn label(&self) -> String {
        match self {
            Poster::Image(url) => url
                .strip_prefix(IMAGE_BASE_URL)
                .map(|rest| rest.trim_start_matches('/'))
                .or_else(|| url.strip_prefix("https://"))
                .or_else(|| url.strip_prefix("http://"))
                .unwrap_or(url)
                .to_string(),
            Poster::Block => "No Image".to_string(),
        }
    }
}

/// A selectable movie card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub id: u64,
    pub title: String,
    pub poster: Poster,
}

impl Tile {
    /// Catalog card: large poster, or a "No Image" block
    pub fn catalog(movie: &MovieSummary) -> Self {
        let poster = match &movie.poster_path {
            Some(path) => Poster::Image(poster_url(path, PosterSize::W500)),
            None => Poster::Block,
        };
        Self {
            id: movie.id,
            title: movie.title.clone(),
            poster,
        }
    }

    /// Related card: small poster, or the remote placeholder image
    pub fn related(movie: &MovieSummary) -> Self {
        let url = match &movie.poster_path {
            Some(path) => poster_url(path, PosterSize::W300),
            None => PLACEHOLDER_POSTER_URL.to_string(),
        };
        Self {
            id: movie.id,
            title: movie.title.clone(),
            poster: Poster::Image(url),
        }
    }
}

/// Heading plus tiles
#[derive(Debug, Clone)]
pub struct Section {
    pub heading: String,
    pub tiles: Vec<Tile>,
}

impl Section {
    pub fn new(heading: impl Into<String>, tiles: Vec<Tile>) -> Self {
        Self {
            heading: heading.into(),
            tiles,
        }
    }
}

/// One vertical slot in the scrolled stack
enum Slot<'a> {
    Heading(&'a str),
    Row { tiles: &'a [Tile], first: usize },
}

impl Slot<'_> {
    fn height(&self) -> u16 {
        match self {
            Slot::Heading(_) => 2,
            Slot::Row { .. } => TILE_HEIGHT,
        }
    }

    fn contains(&self, index: usize) -> bool {
        match self {
            Slot::Heading(_) => false,
            Slot::Row { tiles, first } => index >= *first && index < first + tiles.len(),
        }
    }
}

/// Render stacked sections. `selected` is a flat index across all tiles.
/// Sections without tiles are skipped entirely.
pub fn render_sections(frame: &mut Frame, area: Rect, sections: &[Section], selected: Option<usize>) {
    let mut slots = Vec::new();
    let mut flat = 0;
    for section in sections.iter().filter(|s| !s.tiles.is_empty()) {
        slots.push(Slot::Heading(&section.heading));
        for (row, chunk) in section.tiles.chunks(GRID_COLUMNS).enumerate() {
            slots.push(Slot::Row {
                tiles: chunk,
                first: flat + row * GRID_COLUMNS,
            });
        }
        flat += section.tiles.len();
    }

    let start = scroll_start(&slots, area.height, selected);

    let mut y = area.y;
    let bottom = area.y + area.height;
    for slot in &slots[start..] {
        let height = slot.height();
        if y + height > bottom {
            break;
        }
        let slot_area = Rect::new(area.x, y, area.width, height);
        match slot {
            Slot::Heading(text) => {
                let heading = Paragraph::new(Span::styled(text.to_string(), Theme::title()));
                frame.render_widget(heading, Rect::new(area.x, y, area.width, 1));
            }
            Slot::Row { tiles, first } => render_row(frame, slot_area, tiles, *first, selected),
        }
        y += height;
    }
}

/// First slot to draw so the selected row fits at the bottom
fn scroll_start(slots: &[Slot<'_>], height: u16, selected: Option<usize>) -> usize {
    let Some(target) = selected.and_then(|sel| slots.iter().position(|s| s.contains(sel))) else {
        return 0;
    };

    let mut start = 0;
    let mut used: u16 = slots[..=target].iter().map(Slot::height).sum();
    while used > height && start < target {
        used -= slots[start].height();
        start += 1;
    }
    start
}

fn render_row(frame: &mut Frame, area: Rect, tiles: &[Tile], first: usize, selected: Option<usize>) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
        .split(area);

    for (offset, tile) in tiles.iter().enumerate() {
        let is_selected = selected == Some(first + offset);
        render_tile(frame, columns[offset], tile, is_selected);
    }
}

/// Render a single tile: poster area, then the title
pub fn render_tile(frame: &mut Frame, area: Rect, tile: &Tile, is_selected: bool) {
    let (style, border) = if is_selected {
        (Theme::tile_selected(), Theme::border_focused())
    } else {
        (Theme::tile(), Theme::border())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let poster_style = match tile.poster {
        Poster::Block => Theme::poster_placeholder(),
        Poster::Image(_) => Theme::poster_url(),
    };
    let poster = Paragraph::new(tile.poster.label())
        .style(poster_style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(poster, parts[0]);

    let title = Paragraph::new(Span::styled(tile.title.clone(), style))
        .alignment(Alignment::Center);
    frame.render_widget(title, parts[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64, poster: Option<&str>) -> MovieSummary {
        MovieSummary {
            id,
            title: format!("Movie {}", id),
            poster_path: poster.map(String::from),
        }
    }

    #[test]
    fn test_catalog_tile_posters() {
        let with = Tile::catalog(&movie(1, Some("/a.jpg")));
        assert_eq!(
            with.poster,
            Poster::Image("https://image.tmdb.org/t/p/w500/a.jpg".into())
        );
        assert_eq!(Tile::catalog(&movie(2, None)).poster, Poster::Block);
    }

    #[test]
    fn test_related_tile_posters() {
        let with = Tile::related(&movie(1, Some("/b.jpg")));
        assert_eq!(
            with.poster,
            Poster::Image("https://image.tmdb.org/t/p/w300/b.jpg".into())
        );
        let without = Tile::related(&movie(2, None));
        assert_eq!(without.poster, Poster::Image(PLACEHOLDER_POSTER_URL.into()));
    }

    #[test]
    fn test_poster_labels() {
        assert_eq!(Poster::Block.label(), "No Image");
        assert_eq!(
            Poster::Image("https://image.tmdb.org/t/p/w300/b.jpg".into()).label(),
            "w300/b.jpg"
        );
        assert_eq!(
            Poster::Image(PLACEHOLDER_POSTER_URL.into()).label(),
            "via.placeholder.com/300x450?text=No+Image"
        );
    }

    #[test]
    fn test_scroll_keeps_selection_visible() {
        let tiles: Vec<Tile> = (0..20).map(|i| Tile::catalog(&movie(i, None))).collect();
        let slots = vec![
            Slot::Heading("A"),
            Slot::Row { tiles: &tiles[0..5], first: 0 },
            Slot::Row { tiles: &tiles[5..10], first: 5 },
            Slot::Row { tiles: &tiles[10..15], first: 10 },
            Slot::Row { tiles: &tiles[15..20], first: 15 },
        ];
        assert_eq!(scroll_start(&slots, 14, Some(0)), 0);
        assert_eq!(scroll_start(&slots, 14, None), 0);
        // Heading (2) + two rows (12) fit in 14, the third row does not
        assert_eq!(scroll_start(&slots, 14, Some(12)), 2);
        assert_eq!(scroll_start(&slots, 14, Some(19)), 3);
    }
}
