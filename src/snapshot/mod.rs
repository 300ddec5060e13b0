//! Point-in-time copies of data sources and the stacks that hold them.
//!
//! [`SnapshotManager`] implements the three toolbar operations:
//!
//! - **checkpoint**: copy each source's columns onto its stack
//! - **restore**: pop the latest copy back into the live source
//! - **clear**: empty every column, leaving the stack alone

mod manager;

pub use manager::{SnapshotManager, StackState};

use crate::data::{copy_column, Column, ColumnData};

/// Independent copy of a source's columns.
#[derive(Debug, PartialEq)]
pub struct Snapshot {
    data: ColumnData,
}

impl Snapshot {
    /// Copy `data` using the cell copy policy.
    pub fn capture(data: &ColumnData) -> Self {
        let data = data
            .iter()
            .map(|(name, column)| (name.clone(), copy_column(column)))
            .collect();
        Self { data }
    }

    /// Captured columns.
    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    /// Captured column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.data.get(name)
    }

    /// Consume the snapshot, yielding its columns.
    pub fn into_data(self) -> ColumnData {
        self.data
    }
}

/// LIFO history of snapshots for one source. Unbounded.
#[derive(Debug, Default)]
pub struct SnapshotStack {
    entries: Vec<Snapshot>,
}

impl SnapshotStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a snapshot.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.push(snapshot);
    }

    /// Pop the most recent snapshot.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop()
    }

    /// Most recent snapshot.
    pub fn top(&self) -> Option<&Snapshot> {
        self.entries.last()
    }

    /// Number of snapshots held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there is nothing to restore.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshots from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{columns, Value};

    #[test]
    fn capture_copies_columns() {
        let cell = Value::array(vec![Value::Int(1)]);
        let data = columns([("img", vec![cell.clone()]), ("x", vec![Value::Int(5)])]);

        let snapshot = Snapshot::capture(&data);

        assert_eq!(snapshot.data(), &data);
        let copied = &snapshot.column("img").unwrap()[0];
        assert!(!copied.shares_storage(&cell));
    }

    #[test]
    fn stack_is_lifo() {
        let mut stack = SnapshotStack::new();
        assert!(stack.pop().is_none());

        stack.push(Snapshot::capture(&columns([("x", vec![Value::Int(1)])])));
        stack.push(Snapshot::capture(&columns([("x", vec![Value::Int(2)])])));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top().unwrap().column("x"), Some(&vec![Value::Int(2)]));

        let popped = stack.pop().unwrap().into_data();
        assert_eq!(popped["x"], vec![Value::Int(2)]);
        assert_eq!(stack.iter().count(), 1);
    }
}
