//! Layout configuration for the viewer.

/// Configuration for table view layout.
#[derive(Debug, Clone)]
pub struct TableLayoutConfig {
    /// Rows lost to borders and the header.
    pub border_padding: usize,
    /// Width of each column in characters.
    pub column_width: u16,
    /// Maximum number of visible columns.
    pub max_visible_columns: usize,
    /// Width of the row index column.
    pub row_header_width: u16,
}

impl Default for TableLayoutConfig {
    fn default() -> Self {
        Self {
            border_padding: 4,
            column_width: 14,
            max_visible_columns: 12,
            row_header_width: 6,
        }
    }
}

/// Configuration for the line plot view.
#[derive(Debug, Clone)]
pub struct PlotLayoutConfig {
    /// Padding factor for the Y axis (0.15 = 15% margin).
    pub y_axis_padding_factor: f64,
    /// Number of tick labels on each axis.
    pub axis_labels: usize,
}

impl Default for PlotLayoutConfig {
    fn default() -> Self {
        Self {
            y_axis_padding_factor: 0.15,
            axis_labels: 3,
        }
    }
}

/// Combined viewer configuration.
#[derive(Debug, Clone, Default)]
pub struct ViewerConfig {
    /// Table view.
    pub table: TableLayoutConfig,
    /// Plot view.
    pub plot: PlotLayoutConfig,
}
