//! Toolbar action tools.
//!
//! Each tool carries the list of sources it acts on, a display name and an
//! icon identifier. Activating a tool runs its action once against the
//! toolbar's shared [`SnapshotManager`].

mod actions;
mod toolbar;

pub use actions::{CheckpointTool, ClearTool, RestoreTool};
pub use toolbar::Toolbar;

use crate::data::SourceRef;
use crate::notify::ChangeListener;
use crate::snapshot::SnapshotManager;
use std::fmt;

/// The three tools a toolbar offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ToolKind {
    /// Save the current data.
    Checkpoint,
    /// Bring back the last saved data.
    Restore,
    /// Empty all columns.
    Clear,
}

impl ToolKind {
    /// All tools in toolbar order.
    pub const ALL: [ToolKind; 3] = [ToolKind::Checkpoint, ToolKind::Restore, ToolKind::Clear];

    /// Name shown to the user.
    pub fn tool_name(self) -> &'static str {
        match self {
            ToolKind::Checkpoint => "Checkpoint",
            ToolKind::Restore => "Restore",
            ToolKind::Clear => "Clear data",
        }
    }

    /// Icon identifier.
    pub fn icon(self) -> &'static str {
        match self {
            ToolKind::Checkpoint => "bk-tool-icon-save",
            ToolKind::Restore => "bk-tool-icon-undo",
            ToolKind::Clear => "bk-tool-icon-reset",
        }
    }

    /// Build a tool of this kind over `sources`.
    pub fn build(self, sources: Vec<SourceRef>) -> Box<dyn ActionTool> {
        match self {
            ToolKind::Checkpoint => Box::new(CheckpointTool::new(sources)),
            ToolKind::Restore => Box::new(RestoreTool::new(sources)),
            ToolKind::Clear => Box::new(ClearTool::new(sources)),
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tool_name())
    }
}

/// A toolbar button that performs one action when activated.
pub trait ActionTool: fmt::Debug {
    /// Which tool this is.
    fn kind(&self) -> ToolKind;

    /// Sources the tool acts on.
    fn sources(&self) -> &[SourceRef];

    /// Replace the configured sources.
    fn set_sources(&mut self, sources: Vec<SourceRef>);

    /// Run the action.
    fn doit(&self, manager: &mut SnapshotManager, listener: &mut dyn ChangeListener);

    /// Name shown to the user.
    fn tool_name(&self) -> &'static str {
        self.kind().tool_name()
    }

    /// Icon identifier.
    fn icon(&self) -> &'static str {
        self.kind().icon()
    }
}
