//! Line plot view of a data source.

use super::formatters::format_float;
use crate::config::PlotLayoutConfig;
use crate::data::{Column, ColumnDataSource};
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Name of the column used for the X axis when present and numeric.
const X_COLUMN: &str = "x";

/// Points to plot for one column.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Column name.
    pub name: String,
    /// `(x, y)` pairs; rows with a non-numeric cell are skipped.
    pub points: Vec<(f64, f64)>,
}

fn numeric(column: &Column) -> Option<Vec<f64>> {
    column.iter().map(|v| v.as_f64()).collect()
}

/// Build one series per numeric column.
///
/// Uses the `x` column for X when it is fully numeric, otherwise the row index.
pub fn build_series(source: &ColumnDataSource) -> Vec<Series> {
    let xs = source.column(X_COLUMN).and_then(numeric);

    source
        .data()
        .iter()
        .filter(|(name, _)| xs.is_none() || name.as_str() != X_COLUMN)
        .filter_map(|(name, column)| {
            let points: Vec<(f64, f64)> = column
                .iter()
                .enumerate()
                .filter_map(|(row, value)| {
                    let y = value.as_f64().filter(|y| y.is_finite())?;
                    let x = match &xs {
                        Some(xs) => xs.get(row).copied().filter(|x| x.is_finite())?,
                        None => row as f64,
                    };
                    Some((x, y))
                })
                .collect();
            if points.is_empty() {
                None
            } else {
                Some(Series {
                    name: name.clone(),
                    points,
                })
            }
        })
        .collect()
}

fn bounds(series: &[Series], pick: impl Fn(&(f64, f64)) -> f64) -> (f64, f64) {
    series
        .iter()
        .flat_map(|s| s.points.iter())
        .map(pick)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
            (min.min(v), max.max(v))
        })
}

fn axis_labels(min: f64, max: f64, count: usize) -> Vec<Span<'static>> {
    let count = count.max(2);
    (0..count)
        .map(|i| {
            let t = i as f64 / (count - 1) as f64;
            Span::raw(format_float(min + (max - min) * t))
        })
        .collect()
}

/// Draw numeric columns of `source` as lines.
pub(super) fn draw_plot(
    f: &mut Frame<'_>,
    area: Rect,
    source: &ColumnDataSource,
    layout: &PlotLayoutConfig,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .title(format!(" {} - plot ", source.display_name()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let series = build_series(source);
    if series.is_empty() {
        let para = Paragraph::new("No numeric data to plot")
            .style(Style::default().fg(colors.text))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(para, area);
        return;
    }

    let (x_min, x_max) = bounds(&series, |p| p.0);
    let (y_min, y_max) = bounds(&series, |p| p.1);
    let padding = ((y_max - y_min).abs() * layout.y_axis_padding_factor).max(0.5);
    let (y_min, y_max) = (y_min - padding, y_max + padding);
    let x_max = if x_max > x_min { x_max } else { x_min + 1.0 };

    let datasets: Vec<Dataset<'_>> = series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            Dataset::default()
                .name(s.name.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors.series[i % colors.series.len()]))
                .data(&s.points)
        })
        .collect();

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(colors.border))
                .bounds([x_min, x_max])
                .labels(axis_labels(x_min, x_max, layout.axis_labels)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(colors.border))
                .bounds([y_min, y_max])
                .labels(axis_labels(y_min, y_max, layout.axis_labels)),
        );

    f.render_widget(chart, area);
}
