//! Slate and indigo theme for MovieHub
//!
//! Color palette and style helpers for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// Dark slate palette with indigo and blue accents
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #111827 (slate 900)
    pub const BACKGROUND: Color = Color::Rgb(0x11, 0x18, 0x27);

    /// Panels and tiles: #1f2937 (slate 800)
    pub const PANEL: Color = Color::Rgb(0x1f, 0x29, 0x37);

    /// Primary: #818cf8 (indigo 400)
    pub const PRIMARY: Color = Color::Rgb(0x81, 0x8c, 0xf8);

    /// Secondary: #a5b4fc (indigo 300)
    pub const SECONDARY: Color = Color::Rgb(0xa5, 0xb4, 0xfc);

    /// Selection: #2563eb (blue 600)
    pub const SELECTION: Color = Color::Rgb(0x25, 0x63, 0xeb);

    /// Text: #f3f4f6 (slate 100)
    pub const TEXT: Color = Color::Rgb(0xf3, 0xf4, 0xf6);

    /// Text on selection: #ffffff
    pub const TEXT_ON_SELECTION: Color = Color::Rgb(0xff, 0xff, 0xff);

    /// Dim: #9ca3af (slate 400)
    pub const DIM: Color = Color::Rgb(0x9c, 0xa3, 0xaf);

    /// Border: #374151 (slate 700)
    pub const BORDER: Color = Color::Rgb(0x37, 0x41, 0x51);

    /// Success: #4ade80
    pub const SUCCESS: Color = Color::Rgb(0x4a, 0xde, 0x80);

    /// Warning: #fbbf24
    pub const WARNING: Color = Color::Rgb(0xfb, 0xbf, 0x24);

    /// Error: #f87171
    pub const ERROR: Color = Color::Rgb(0xf8, 0x71, 0x71);

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    /// Site name in the header
    pub fn brand() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Section headings and the watch title
    pub fn title() -> Style {
        Style::default()
            .fg(Self::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Self::WARNING)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // COMPONENT STYLES
    // ═══════════════════════════════════════════════════════════════════════

    /// Movie tile (normal state)
    pub fn tile() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::PANEL)
    }

    /// Movie tile (selected)
    pub fn tile_selected() -> Style {
        Style::default()
            .fg(Self::TEXT_ON_SELECTION)
            .bg(Self::SELECTION)
            .add_modifier(Modifier::BOLD)
    }

    /// "No Image" block inside a tile
    pub fn poster_placeholder() -> Style {
        Style::default().fg(Self::DIM).bg(Self::BORDER)
    }

    /// Poster URL line inside a tile
    pub fn poster_url() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn input() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::PANEL)
    }

    pub fn input_cursor() -> Style {
        Style::default().fg(Self::BACKGROUND).bg(Self::PRIMARY)
    }

    /// Keybinding hint style
    pub fn keybind() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    /// Keybinding description style
    pub fn keybind_desc() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::PANEL)
    }

    /// Loading indicator
    pub fn loading() -> Style {
        Style::default()
            .fg(Self::WARNING)
            .add_modifier(Modifier::BOLD)
    }

    /// Embed URL in the player panel
    pub fn link() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::UNDERLINED)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Relative luminance of an sRGB color
/// Formula: https://www.w3.org/TR/WCAG20/#relativeluminancedef
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b)
}

/// Contrast ratio between two colors, from 1 to 21
pub fn contrast_ratio(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> f64 {
    let l1 = relative_luminance(fg.0, fg.1, fg.2);
    let l2 = relative_luminance(bg.0, bg.1, bg.2);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG AA for normal text (4.5:1)
pub fn meets_wcag_aa(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 4.5
}

/// Extract RGB tuple from ratatui Color (only works for Rgb variant)
pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(color: Color) -> (u8, u8, u8) {
        color_to_rgb(color).expect("Theme colors should all be RGB")
    }

    #[test]
    fn test_all_theme_colors_are_rgb() {
        for color in [
            Theme::BACKGROUND,
            Theme::PANEL,
            Theme::PRIMARY,
            Theme::SECONDARY,
            Theme::SELECTION,
            Theme::TEXT,
            Theme::TEXT_ON_SELECTION,
            Theme::DIM,
            Theme::BORDER,
            Theme::SUCCESS,
            Theme::WARNING,
            Theme::ERROR,
        ] {
            assert!(color_to_rgb(color).is_some(), "{:?} is not RGB", color);
        }
    }

    #[test]
    fn test_readable_text_on_background() {
        let bg = rgb(Theme::BACKGROUND);
        for fg in [Theme::TEXT, Theme::PRIMARY, Theme::SECONDARY, Theme::DIM, Theme::ERROR] {
            let ratio = contrast_ratio(rgb(fg), bg);
            assert!(meets_wcag_aa(rgb(fg), bg), "{:?} only {:.2}:1", fg, ratio);
        }
    }

    #[test]
    fn test_selected_tile_contrast() {
        let ratio = contrast_ratio(rgb(Theme::TEXT_ON_SELECTION), rgb(Theme::SELECTION));
        assert!(ratio >= 4.5, "selected tile only {:.2}:1", ratio);
    }

    #[test]
    fn test_tile_text_on_panel() {
        assert!(meets_wcag_aa(rgb(Theme::TEXT), rgb(Theme::PANEL)));
    }

    #[test]
    fn test_selected_style_differs_from_normal() {
        assert_ne!(Theme::tile(), Theme::tile_selected());
        assert_eq!(Theme::tile_selected().bg, Some(Theme::SELECTION));
    }

    #[test]
    fn test_contrast_ratio_bounds() {
        assert!((contrast_ratio((0, 0, 0), (255, 255, 255)) - 21.0).abs() < 0.1);
        assert!((contrast_ratio((90, 90, 90), (90, 90, 90)) - 1.0).abs() < 0.001);
    }
}
