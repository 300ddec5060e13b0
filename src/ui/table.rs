//! Table view of a data source.

use super::formatters::{format_number, format_value, truncate};
use crate::config::TableLayoutConfig;
use crate::data::ColumnDataSource;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

/// Draw the columns of `source` starting at row `scroll`.
pub(super) fn draw_table(
    f: &mut Frame<'_>,
    area: Rect,
    source: &ColumnDataSource,
    scroll: usize,
    layout: &TableLayoutConfig,
    colors: &ThemeColors,
) {
    let visible_rows = (area.height as usize).saturating_sub(layout.border_padding);
    let col_width = layout.column_width as usize;
    let visible_cols = ((area.width as usize)
        .saturating_sub(layout.row_header_width as usize + 2)
        / col_width.max(1))
    .clamp(1, layout.max_visible_columns);

    let names: Vec<&str> = source.column_names().into_iter().take(visible_cols).collect();
    let total_rows = source.len();
    let end_row = (scroll + visible_rows).min(total_rows);

    let mut rows = Vec::new();
    for row_idx in scroll..end_row {
        let mut cells = vec![Cell::from(format!("{}", row_idx)).style(Style::default().fg(colors.label))];
        for name in &names {
            let text = source
                .column(name)
                .and_then(|column| column.get(row_idx))
                .map(format_value)
                .unwrap_or_default();
            cells.push(
                Cell::from(truncate(&text, col_width.saturating_sub(1)))
                    .style(Style::default().fg(colors.value)),
            );
        }
        rows.push(Row::new(cells));
    }

    let mut header_cells = vec![Cell::from("#").style(Style::default().fg(colors.label))];
    for name in &names {
        header_cells.push(
            Cell::from(truncate(name, col_width.saturating_sub(1))).style(
                Style::default()
                    .fg(colors.heading)
                    .add_modifier(Modifier::BOLD),
            ),
        );
    }

    let mut widths = vec![Constraint::Length(layout.row_header_width)];
    widths.extend(names.iter().map(|_| Constraint::Length(layout.column_width)));

    let title = format!(
        " {} - {} rows x {} columns ",
        source.display_name(),
        format_number(total_rows),
        source.data().len()
    );

    let table = Table::new(rows, widths)
        .header(Row::new(header_cells).bottom_margin(1))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        );

    f.render_widget(table, area);
}
