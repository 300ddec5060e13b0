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
    /// Column header color.
    pub heading: Color,
    /// Row index color.
    pub label: Color,
    /// Cell value color.
    pub value: Color,
    /// Border color.
    pub border: Color,
    /// Toolbar button foreground.
    pub button_fg: Color,
    /// Toolbar button background.
    pub button_bg: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Error color.
    pub error: Color,
    /// Line colors for plotted columns, cycled.
    pub series: [Color; 4],
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                label: Color::Rgb(184, 187, 38),
                value: Color::Rgb(142, 192, 124),
                border: Color::Rgb(102, 92, 84),
                button_fg: Color::Rgb(40, 40, 40),
                button_bg: Color::Rgb(251, 184, 108),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                error: Color::Rgb(251, 73, 52),
                series: [
                    Color::Rgb(131, 165, 152),
                    Color::Rgb(250, 189, 47),
                    Color::Rgb(211, 134, 155),
                    Color::Rgb(142, 192, 124),
                ],
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                label: Color::Rgb(121, 116, 14),
                value: Color::Rgb(102, 123, 3),
                border: Color::Rgb(213, 196, 161),
                button_fg: Color::Rgb(251, 245, 234),
                button_bg: Color::Rgb(175, 58, 3),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                error: Color::Rgb(157, 0, 6),
                series: [
                    Color::Rgb(7, 102, 120),
                    Color::Rgb(181, 118, 20),
                    Color::Rgb(143, 63, 113),
                    Color::Rgb(66, 123, 88),
                ],
            },
        }
    }
}
