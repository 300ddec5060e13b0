//! Toolbar holding the tools and their shared snapshot stacks.

use super::{ActionTool, ToolKind};
use crate::data::SourceRef;
use crate::notify::ChangeListener;
use crate::snapshot::SnapshotManager;

/// A row of action tools sharing one [`SnapshotManager`].
#[derive(Debug)]
pub struct Toolbar {
    manager: SnapshotManager,
    tools: Vec<Box<dyn ActionTool>>,
}

impl Default for Toolbar {
    fn default() -> Self {
        Self::new()
    }
}

impl Toolbar {
    /// Create a toolbar with all three tools and no sources.
    pub fn new() -> Self {
        Self::with_sources(Vec::new())
    }

    /// Create a toolbar whose tools all act on `sources`.
    pub fn with_sources(sources: Vec<SourceRef>) -> Self {
        let tools = ToolKind::ALL
            .iter()
            .map(|kind| kind.build(sources.clone()))
            .collect();
        Self {
            manager: SnapshotManager::new(),
            tools,
        }
    }

    /// Point every tool at `sources`.
    pub fn set_sources(&mut self, sources: Vec<SourceRef>) {
        for tool in &mut self.tools {
            tool.set_sources(sources.clone());
        }
    }

    /// Tools in display order.
    pub fn tools(&self) -> &[Box<dyn ActionTool>] {
        &self.tools
    }

    /// Tool of the given kind.
    pub fn tool_mut(&mut self, kind: ToolKind) -> Option<&mut Box<dyn ActionTool>> {
        self.tools.iter_mut().find(|tool| tool.kind() == kind)
    }

    /// Shared snapshot stacks.
    pub fn manager(&self) -> &SnapshotManager {
        &self.manager
    }

    /// Mutable access to the shared snapshot stacks.
    pub fn manager_mut(&mut self) -> &mut SnapshotManager {
        &mut self.manager
    }

    /// Activate the tool of the given kind. Returns false if it is missing.
    pub fn activate(&mut self, kind: ToolKind, listener: &mut dyn ChangeListener) -> bool {
        let Some(tool) = self.tools.iter().find(|tool| tool.kind() == kind) else {
            return false;
        };
        tracing::debug!("activate {} on {} source(s)", kind, tool.sources().len());
        tool.doit(&mut self.manager, listener);
        true
    }

    /// Activate the tool at `index` in display order.
    pub fn activate_index(
        &mut self,
        index: usize,
        listener: &mut dyn ChangeListener,
    ) -> Option<ToolKind> {
        let tool = self.tools.get(index)?;
        let kind = tool.kind();
        tool.doit(&mut self.manager, listener);
        Some(kind)
    }
}
