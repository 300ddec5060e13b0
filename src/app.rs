//! Application state and logic.

use std::path::PathBuf;

use crate::config::ViewerConfig;
use crate::data::{DataReader, SourceId, SourceRef};
use crate::notify::{emit_data_changed, ChangeEvent, ChangeListener};
use crate::tools::{Toolbar, ToolKind};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// How the selected source is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Rows and columns.
    #[default]
    Table,
    /// Numeric columns as lines against the row index.
    Plot,
}

impl ViewMode {
    /// Get the next view mode in cycle.
    pub fn next(self) -> Self {
        match self {
            ViewMode::Table => ViewMode::Plot,
            ViewMode::Plot => ViewMode::Table,
        }
    }

    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            ViewMode::Table => "Table",
            ViewMode::Plot => "Plot",
        }
    }
}

/// The viewer's side of the change contract: remembers which sources need a
/// redraw until the next frame picks them up.
#[derive(Debug, Default)]
pub struct RenderTracker {
    pending: Vec<SourceId>,
    received: usize,
}

impl RenderTracker {
    /// Sources changed since the last call, in notification order.
    pub fn take_pending(&mut self) -> Vec<SourceId> {
        std::mem::take(&mut self.pending)
    }

    /// Total events received.
    pub fn received(&self) -> usize {
        self.received
    }
}

impl ChangeListener for RenderTracker {
    fn on_change(&mut self, event: &ChangeEvent) {
        self.received += 1;
        let id = event.source();
        if !self.pending.contains(&id) {
            self.pending.push(id);
        }
        tracing::trace!("render requested by {:?}", event);
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Current file path.
    pub file_path: Option<PathBuf>,
    /// Loaded data sources, owned by the viewer.
    pub sources: Vec<SourceRef>,
    /// Checkpoint/restore/clear tools over all sources.
    pub toolbar: Toolbar,
    /// Pending redraws.
    pub tracker: RenderTracker,
    /// Index of the displayed source.
    pub selected: usize,
    /// Current view mode.
    pub view_mode: ViewMode,
    /// First visible table row.
    pub scroll: usize,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Layout configuration.
    pub config: ViewerConfig,
    /// Error message.
    pub error_message: Option<String>,
}

impl App {
    /// Create a new application instance, loading `file_path` if given.
    pub fn new(file_path: Option<PathBuf>) -> Self {
        let mut app = Self::with_sources(Vec::new());
        if let Some(path) = file_path {
            app.load_file(path);
        }
        app
    }

    /// Create an application over already loaded sources.
    pub fn with_sources(sources: Vec<SourceRef>) -> Self {
        Self {
            file_path: None,
            toolbar: Toolbar::with_sources(sources.clone()),
            sources,
            tracker: RenderTracker::default(),
            selected: 0,
            view_mode: ViewMode::Table,
            scroll: 0,
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
            config: ViewerConfig::default(),
            error_message: None,
        }
    }

    /// Load a file, replacing all sources.
    pub fn load_file(&mut self, path: PathBuf) {
        match DataReader::read_file(&path) {
            Ok(sources) => {
                self.status = format!(
                    "{} loaded ({} sources)",
                    path.file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "file".to_string()),
                    sources.len()
                );
                self.toolbar = Toolbar::with_sources(sources.clone());
                self.sources = sources;
                self.selected = 0;
                self.scroll = 0;
                self.error_message = None;
                self.file_path = Some(path);
                tracing::info!("File loaded successfully");
            },
            Err(e) => {
                self.error_message = Some(format!("Error loading file: {}", e));
                self.status = "Error loading file".to_string();
                tracing::error!("Error loading file: {}", e);
            },
        }
    }

    /// Currently displayed source.
    pub fn current_source(&self) -> Option<&SourceRef> {
        self.sources.get(self.selected)
    }

    /// Snapshot depth of the displayed source.
    pub fn current_depth(&self) -> usize {
        self.current_source()
            .map(|s| self.toolbar.manager().depth(s.borrow().id()))
            .unwrap_or(0)
    }

    /// Activate a toolbar tool and report the outcome in the status line.
    pub fn activate(&mut self, kind: ToolKind) {
        if self.sources.is_empty() {
            self.status = format!("{}: no data sources", kind.tool_name());
            return;
        }

        let before = self.tracker.received();
        self.toolbar.activate(kind, &mut self.tracker);
        let events = self.tracker.received() - before;

        self.status = match kind {
            ToolKind::Checkpoint => format!("Checkpoint saved (depth {})", self.current_depth()),
            ToolKind::Restore if events == 0 => "Nothing to restore".to_string(),
            ToolKind::Restore => format!("Restored (depth {})", self.current_depth()),
            ToolKind::Clear => format!("Cleared {} source(s)", self.sources.len()),
        };
    }

    /// Show the next source.
    pub fn next_source(&mut self) {
        if !self.sources.is_empty() {
            self.selected = (self.selected + 1) % self.sources.len();
            self.scroll = 0;
        }
    }

    /// Duplicate the last row of the displayed source.
    pub fn append_row(&mut self) {
        self.edit_current(|source| source.borrow_mut().append_row(), "Row appended");
    }

    /// Remove the last row of the displayed source.
    pub fn drop_row(&mut self) {
        self.edit_current(|source| source.borrow_mut().pop_row(), "Row removed");
    }

    fn edit_current(&mut self, edit: impl FnOnce(&SourceRef) -> bool, done: &str) {
        let Some(source) = self.sources.get(self.selected) else {
            self.status = "No data source".to_string();
            return;
        };
        if edit(source) {
            let id = source.borrow().id();
            emit_data_changed(&mut self.tracker, id);
            self.status = done.to_string();
        } else {
            self.status = "Nothing to edit".to_string();
        }
    }

    /// Cycle view mode.
    pub fn cycle_view_mode(&mut self) {
        self.view_mode = self.view_mode.next();
        self.status = format!("View: {}", self.view_mode.name());
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Scroll the table down.
    pub fn scroll_down(&mut self, amount: usize) {
        let rows = self
            .current_source()
            .map(|s| s.borrow().len())
            .unwrap_or(0);
        self.scroll = (self.scroll + amount).min(rows.saturating_sub(1));
    }

    /// Scroll the table up.
    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll = self.scroll.saturating_sub(amount);
    }

    /// Apply pending redraw requests. Returns the sources that changed.
    pub fn sync_changes(&mut self) -> Vec<SourceId> {
        let changed = self.tracker.take_pending();
        if !changed.is_empty() {
            let rows = self
                .current_source()
                .map(|s| s.borrow().len())
                .unwrap_or(0);
            self.scroll = self.scroll.min(rows.saturating_sub(1));
        }
        changed
    }
}
