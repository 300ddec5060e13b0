//! User interface rendering.

pub mod formatters;
mod keymap_bar;
mod plot;
mod status_bar;
mod table;
mod theme;
mod toolbar;

use crate::app::{App, ViewMode};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub use keymap_bar::KEYMAP_TEXT;
pub use plot::{build_series, Series};
pub use theme::ThemeColors;
pub use toolbar::{icon_glyph, tool_key};

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Toolbar, content, status bar, key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    toolbar::draw_toolbar(f, chunks[0], &app.toolbar, app.current_depth(), &colors);
    draw_content(f, app, chunks[1], &colors);
    status_bar::draw_status(
        f,
        chunks[2],
        &app.status,
        app.error_message.as_deref(),
        &colors,
    );
    keymap_bar::draw_keymap(f, chunks[3], &colors);
}

fn draw_content(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let Some(source) = app.current_source() else {
        draw_welcome(f, area, colors);
        return;
    };
    // Sources are only mutated between frames.
    let Ok(source) = source.try_borrow() else {
        return;
    };

    match app.view_mode {
        ViewMode::Table => table::draw_table(f, area, &source, app.scroll, &app.config.table, colors),
        ViewMode::Plot => plot::draw_plot(f, area, &source, &app.config.plot, colors),
    }
}

fn draw_welcome(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new("No data sources loaded.\n\nRun `datasnap <file.json>` to open one.")
        .style(Style::default().fg(colors.text))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Datasnap ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        );

    f.render_widget(paragraph, area);
}
