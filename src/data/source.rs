//! Column data sources.

use super::value::{copy_value, Value};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// One column: an ordered sequence of cells.
pub type Column = Vec<Value>;

/// Column name to column mapping.
pub type ColumnData = BTreeMap<String, Column>;

/// Shared handle to a data source owned by the host.
pub type SourceRef = Rc<RefCell<ColumnDataSource>>;

static NEXT_SOURCE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceId(u64);

impl SourceId {
    fn next() -> Self {
        Self(NEXT_SOURCE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "source#{}", self.0)
    }
}

/// A named set of columns backing a rendered plot.
///
/// Columns are expected to share a length, but nothing here enforces it.
#[derive(Debug)]
pub struct ColumnDataSource {
    id: SourceId,
    name: Option<String>,
    data: ColumnData,
}

impl ColumnDataSource {
    /// Create an unnamed source.
    pub fn new(data: ColumnData) -> Self {
        Self {
            id: SourceId::next(),
            name: None,
            data,
        }
    }

    /// Create a named source.
    pub fn named(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(data)
        }
    }

    /// Wrap into a shared handle.
    pub fn into_shared(self) -> SourceRef {
        Rc::new(RefCell::new(self))
    }

    /// Identity of this source.
    pub fn id(&self) -> SourceId {
        self.id
    }

    /// Optional display name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name for display, falling back to the id.
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.id.to_string())
    }

    /// Current columns.
    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    /// Replace all columns at once.
    pub fn set_data(&mut self, data: ColumnData) {
        self.data = data;
    }

    /// Mutable access to all columns.
    pub fn data_mut(&mut self) -> &mut ColumnData {
        &mut self.data
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.data.get(name)
    }

    /// Mutable access to a column.
    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.data.get_mut(name)
    }

    /// Insert or replace a column, returning the previous one.
    pub fn insert_column(&mut self, name: impl Into<String>, column: Column) -> Option<Column> {
        self.data.insert(name.into(), column)
    }

    /// Column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.data.keys().map(String::as_str).collect()
    }

    /// Number of rows, taken from the longest column.
    pub fn len(&self) -> usize {
        self.data.values().map(Vec::len).max().unwrap_or(0)
    }

    /// True when every column is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a row that duplicates the last one.
    ///
    /// Numeric cells are advanced by one so a plotted line keeps growing.
    /// Integers saturate at `i64::MAX`.
    /// Returns false if the source has no rows to duplicate.
    pub fn append_row(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        for column in self.data.values_mut() {
            let next = match column.last() {
                Some(Value::Int(i)) => Value::Int(i.saturating_add(1)),
                Some(Value::Float(f)) => Value::Float(f + 1.0),
                Some(other) => copy_value(other),
                None => Value::Null,
            };
            column.push(next);
        }
        true
    }

    /// Remove the last row from every column.
    pub fn pop_row(&mut self) -> bool {
        let mut removed = false;
        for column in self.data.values_mut() {
            removed |= column.pop().is_some();
        }
        removed
    }
}

/// Build column data from `(name, cells)` pairs.
pub fn columns<I, S>(pairs: I) -> ColumnData
where
    I: IntoIterator<Item = (S, Column)>,
    S: Into<String>,
{
    pairs
        .into_iter()
        .map(|(name, column)| (name.into(), column))
        .collect()
}
