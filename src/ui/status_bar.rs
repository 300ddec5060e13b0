//! Status bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar. Errors take precedence over the status message.
pub(super) fn draw_status(
    f: &mut Frame<'_>,
    area: Rect,
    status: &str,
    error: Option<&str>,
    colors: &ThemeColors,
) {
    let (text, fg) = match error {
        Some(error) => (error, colors.error),
        None => (status, colors.status_fg),
    };

    let paragraph = Paragraph::new(text).style(Style::default().fg(fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
