//! Data sources and their cell values.
//!
//! This module holds the column model shared by the snapshot tools and the
//! viewer, plus the JSON reader used to load sources from disk.

mod reader;
mod source;
mod value;

pub use reader::{json_to_value, sources_to_json, value_to_json, DataReader};
pub use source::{columns, Column, ColumnData, ColumnDataSource, SourceId, SourceRef};
pub use value::{copy_column, copy_value, ArrayRef, BufferRef, ObjectRef, Value};
