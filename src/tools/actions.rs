//! Checkpoint, restore and clear tools.

use super::{ActionTool, ToolKind};
use crate::data::SourceRef;
use crate::notify::ChangeListener;
use crate::snapshot::SnapshotManager;

/// Saves a copy of each source's data. Emits no events.
#[derive(Debug, Default)]
pub struct CheckpointTool {
    sources: Vec<SourceRef>,
}

impl CheckpointTool {
    /// Create the tool over `sources`.
    pub fn new(sources: Vec<SourceRef>) -> Self {
        Self { sources }
    }
}

impl ActionTool for CheckpointTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Checkpoint
    }

    fn sources(&self) -> &[SourceRef] {
        &self.sources
    }

    fn set_sources(&mut self, sources: Vec<SourceRef>) {
        self.sources = sources;
    }

    fn doit(&self, manager: &mut SnapshotManager, _listener: &mut dyn ChangeListener) {
        manager.checkpoint(&self.sources);
    }
}

/// Puts the most recent saved copy back into each source.
#[derive(Debug, Default)]
pub struct RestoreTool {
    sources: Vec<SourceRef>,
}

impl RestoreTool {
    /// Create the tool over `sources`.
    pub fn new(sources: Vec<SourceRef>) -> Self {
        Self { sources }
    }
}

impl ActionTool for RestoreTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Restore
    }

    fn sources(&self) -> &[SourceRef] {
        &self.sources
    }

    fn set_sources(&mut self, sources: Vec<SourceRef>) {
        self.sources = sources;
    }

    fn doit(&self, manager: &mut SnapshotManager, listener: &mut dyn ChangeListener) {
        manager.restore(&self.sources, listener);
    }
}

/// Empties every column of each source.
#[derive(Debug, Default)]
pub struct ClearTool {
    sources: Vec<SourceRef>,
}

impl ClearTool {
    /// Create the tool over `sources`.
    pub fn new(sources: Vec<SourceRef>) -> Self {
        Self { sources }
    }
}

impl ActionTool for ClearTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Clear
    }

    fn sources(&self) -> &[SourceRef] {
        &self.sources
    }

    fn set_sources(&mut self, sources: Vec<SourceRef>) {
        self.sources = sources;
    }

    fn doit(&self, manager: &mut SnapshotManager, listener: &mut dyn ChangeListener) {
        manager.clear(&self.sources, listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{columns, ColumnDataSource, Value};
    use crate::notify::EventLog;

    #[test]
    fn names_and_icons() {
        let tools: Vec<Box<dyn ActionTool>> = vec![
            Box::new(CheckpointTool::default()),
            Box::new(RestoreTool::default()),
            Box::new(ClearTool::default()),
        ];
        let labels: Vec<_> = tools.iter().map(|t| (t.tool_name(), t.icon())).collect();
        assert_eq!(
            labels,
            vec![
                ("Checkpoint", "bk-tool-icon-save"),
                ("Restore", "bk-tool-icon-undo"),
                ("Clear data", "bk-tool-icon-reset"),
            ]
        );
        assert!(tools.iter().all(|t| t.sources().is_empty()));
    }

    #[test]
    fn tools_share_a_manager() {
        let source = ColumnDataSource::new(columns([("x", vec![Value::Int(1)])])).into_shared();
        let mut checkpoint = CheckpointTool::default();
        checkpoint.set_sources(vec![source.clone()]);
        let clear = ClearTool::new(vec![source.clone()]);
        let restore = RestoreTool::new(vec![source.clone()]);
        let mut manager = SnapshotManager::new();
        let mut log = EventLog::new();

        checkpoint.doit(&mut manager, &mut log);
        assert!(log.is_empty());
        clear.doit(&mut manager, &mut log);
        assert!(source.borrow().is_empty());
        restore.doit(&mut manager, &mut log);

        assert_eq!(source.borrow().column("x"), Some(&vec![Value::Int(1)]));
        assert_eq!(log.len(), 4);
    }
}
