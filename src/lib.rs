//! Datasnap - checkpoint, restore and clear tools for plot data sources.
//!
//! A plot toolbar gets three buttons that act on the column data backing the
//! plot: save a copy of the current columns, put the last saved copy back, or
//! empty every column. The snapshot logic is host-agnostic; the bundled
//! terminal viewer is one host.
//!
//! # Features
//!
//! - Per-source LIFO snapshot stacks keyed by source identity
//! - Copy policy that detaches arrays and binary buffers from live data
//! - Explicit change notifications for the host to re-render
//! - Terminal viewer with table and line plot views
//! - Headless mode for scripting tool activations
//!
//! # Example
//!
//! ```
//! use datasnap::data::{columns, ColumnDataSource, Value};
//! use datasnap::notify::EventLog;
//! use datasnap::tools::{Toolbar, ToolKind};
//!
//! let source = ColumnDataSource::new(columns([("x", vec![Value::Int(1), Value::Int(2)])]))
//!     .into_shared();
//! let mut toolbar = Toolbar::with_sources(vec![source.clone()]);
//! let mut events = EventLog::new();
//!
//! toolbar.activate(ToolKind::Checkpoint, &mut events);
//! toolbar.activate(ToolKind::Clear, &mut events);
//! assert!(source.borrow().is_empty());
//!
//! toolbar.activate(ToolKind::Restore, &mut events);
//! assert_eq!(source.borrow().len(), 2);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod notify;
pub mod snapshot;
pub mod tools;
pub mod ui;

pub use error::{DatasnapError, Result};
