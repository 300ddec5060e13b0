//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Key help shown at the bottom of the screen.
pub const KEYMAP_TEXT: &str =
    "c:checkpoint | r:restore | x:clear | a/d:add/drop row | Tab:source | v:view | jk:scroll | T:theme | q:quit";

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new(KEYMAP_TEXT).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
