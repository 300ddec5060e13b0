//! Toolbar row: one button per action tool.

use crate::tools::{ActionTool, Toolbar};
use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Terminal glyph for a tool icon identifier.
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "bk-tool-icon-save" => "💾",
        "bk-tool-icon-undo" => "↶",
        "bk-tool-icon-reset" => "⟲",
        _ => "•",
    }
}

/// Key bound to the tool at `index`.
pub fn tool_key(index: usize) -> char {
    ['c', 'r', 'x'].get(index).copied().unwrap_or('?')
}

/// Draw the toolbar and the snapshot depth of the shown source.
pub(super) fn draw_toolbar(
    f: &mut Frame<'_>,
    area: Rect,
    toolbar: &Toolbar,
    depth: usize,
    colors: &ThemeColors,
) {
    let button = Style::default()
        .fg(colors.button_fg)
        .bg(colors.button_bg)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::new();
    for (index, tool) in toolbar.tools().iter().enumerate() {
        spans.push(Span::styled(label(tool.as_ref(), index), button));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        format!(" snapshots: {}", depth),
        Style::default().fg(colors.text),
    ));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(colors.bg));
    f.render_widget(paragraph, area);
}

fn label(tool: &dyn ActionTool, index: usize) -> String {
    format!(
        " {} {} [{}] ",
        icon_glyph(tool.icon()),
        tool.tool_name(),
        tool_key(index)
    )
}
