//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Section heading and title color.
    pub heading: Color,
    /// Year badge color on publication cards.
    pub badge: Color,
    /// Color for linked lines (titles, DOI, link tags).
    pub link: Color,
    /// Dimmed text and saturated affordances.
    pub dimmed: Color,
    /// Border color.
    pub border: Color,
    /// Active control foreground color.
    pub active_fg: Color,
    /// Active control background color.
    pub active_bg: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                badge: Color::Rgb(250, 189, 47),
                link: Color::Rgb(131, 165, 152),
                dimmed: Color::Rgb(146, 131, 116),
                border: Color::Rgb(102, 92, 84),
                active_fg: Color::Rgb(40, 40, 40),
                active_bg: Color::Rgb(251, 184, 108),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                badge: Color::Rgb(181, 118, 20),
                link: Color::Rgb(7, 102, 120),
                dimmed: Color::Rgb(168, 153, 132),
                border: Color::Rgb(213, 196, 161),
                active_fg: Color::Rgb(251, 245, 234),
                active_bg: Color::Rgb(175, 58, 3),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
            },
        }
    }
}
