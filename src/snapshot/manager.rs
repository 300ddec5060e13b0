//! Per-source snapshot stacks and the checkpoint/restore/clear operations.

use super::{Snapshot, SnapshotStack};
use crate::data::{Column, ColumnDataSource, SourceId, SourceRef};
use crate::notify::{emit_data_changed, ChangeListener};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// Where a source sits in the checkpoint/restore cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackState {
    /// Nothing to restore.
    Empty,
    /// This many snapshots are waiting.
    HasSnapshots(usize),
}

#[derive(Debug)]
struct Entry {
    owner: Weak<RefCell<ColumnDataSource>>,
    stack: SnapshotStack,
}

/// Owns one snapshot stack per source, keyed by source identity.
///
/// Stacks are created on the first checkpoint of a source and live as long as
/// the source does; [`prune`](Self::prune) drops stacks whose source is gone.
/// Sources that are already borrowed when an operation reaches them are
/// skipped so the remaining sources are still processed.
#[derive(Debug, Default)]
pub struct SnapshotManager {
    entries: HashMap<SourceId, Entry>,
}

impl SnapshotManager {
    /// Create a manager with no stacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a copy of every source's columns onto its stack.
    pub fn checkpoint(&mut self, sources: &[SourceRef]) {
        self.prune();

        for source in sources {
            let Ok(live) = source.try_borrow() else {
                tracing::warn!("checkpoint: source is busy, skipping");
                continue;
            };
            let id = live.id();
            let entry = self.entries.entry(id).or_insert_with(|| Entry {
                owner: Rc::downgrade(source),
                stack: SnapshotStack::new(),
            });
            entry.stack.push(Snapshot::capture(live.data()));
            tracing::debug!("checkpoint {}: depth {}", id, entry.stack.len());
        }
    }

    /// Pop the latest snapshot of every source back into its live data.
    ///
    /// Sources without snapshots are left untouched and produce no events.
    pub fn restore(&mut self, sources: &[SourceRef], listener: &mut dyn ChangeListener) {
        self.prune();

        for source in sources {
            let Ok(mut live) = source.try_borrow_mut() else {
                tracing::warn!("restore: source is busy, skipping");
                continue;
            };
            let id = live.id();
            let Some(snapshot) = self.entries.get_mut(&id).and_then(|e| e.stack.pop()) else {
                tracing::debug!("restore {}: nothing to restore", id);
                continue;
            };
            live.set_data(snapshot.into_data());
            drop(live);

            tracing::debug!("restore {}: depth {}", id, self.depth(id));
            emit_data_changed(listener, id);
        }
    }

    /// Empty every column of every source, keeping the column names.
    pub fn clear(&mut self, sources: &[SourceRef], listener: &mut dyn ChangeListener) {
        for source in sources {
            let Ok(mut live) = source.try_borrow_mut() else {
                tracing::warn!("clear: source is busy, skipping");
                continue;
            };
            for column in live.data_mut().values_mut() {
                *column = Column::new();
            }
            let id = live.id();
            drop(live);

            tracing::debug!("clear {}", id);
            emit_data_changed(listener, id);
        }
    }

    /// Number of snapshots held for a source.
    pub fn depth(&self, id: SourceId) -> usize {
        self.entries.get(&id).map_or(0, |e| e.stack.len())
    }

    /// State of a source's stack.
    pub fn state(&self, id: SourceId) -> StackState {
        match self.depth(id) {
            0 => StackState::Empty,
            n => StackState::HasSnapshots(n),
        }
    }

    /// Stack for a source, if one was ever created.
    pub fn stack(&self, id: SourceId) -> Option<&SnapshotStack> {
        self.entries.get(&id).map(|e| &e.stack)
    }

    /// Number of sources with a stack.
    pub fn tracked_sources(&self) -> usize {
        self.entries.len()
    }

    /// Drop the stack of a source the host is discarding.
    pub fn release(&mut self, id: SourceId) -> Option<SnapshotStack> {
        self.entries.remove(&id).map(|e| e.stack)
    }

    /// Drop stacks whose source no longer exists. Returns how many were dropped.
    pub fn prune(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, e| e.owner.strong_count() > 0);
        let dropped = before - self.entries.len();
        if dropped > 0 {
            tracing::debug!("pruned {} stack(s) of dropped sources", dropped);
        }
        dropped
    }
}
