//! Change notifications sent to the host after live data is replaced.

use crate::data::SourceId;

/// Name of the data property reported in [`ChangeEvent::PropertyChanged`].
pub const DATA_PROPERTY: &str = "data";

/// A change the host should react to, typically by re-rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    /// The whole source changed.
    SourceChanged(SourceId),
    /// A single property of the source changed.
    PropertyChanged {
        /// Source that changed.
        source: SourceId,
        /// Property name.
        property: &'static str,
    },
}

impl ChangeEvent {
    /// Source this event refers to.
    pub fn source(&self) -> SourceId {
        match self {
            ChangeEvent::SourceChanged(id) => *id,
            ChangeEvent::PropertyChanged { source, .. } => *source,
        }
    }
}

/// Observer supplied by the host.
pub trait ChangeListener {
    /// Called once per event, after the mutation has been applied.
    fn on_change(&mut self, event: &ChangeEvent);
}

/// Send the pair of events that follow a wholesale data replacement.
pub fn emit_data_changed(listener: &mut dyn ChangeListener, source: SourceId) {
    listener.on_change(&ChangeEvent::SourceChanged(source));
    listener.on_change(&ChangeEvent::PropertyChanged {
        source,
        property: DATA_PROPERTY,
    });
}

/// Listener that records every event in order.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Vec<ChangeEvent>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far.
    pub fn events(&self) -> &[ChangeEvent] {
        &self.events
    }

    /// Number of events received.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if nothing was received.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drain recorded events.
    pub fn take(&mut self) -> Vec<ChangeEvent> {
        std::mem::take(&mut self.events)
    }
}

impl ChangeListener for EventLog {
    fn on_change(&mut self, event: &ChangeEvent) {
        self.events.push(*event);
    }
}

/// Listener that only logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingListener;

impl ChangeListener for TracingListener {
    fn on_change(&mut self, event: &ChangeEvent) {
        match event {
            ChangeEvent::SourceChanged(id) => tracing::debug!("{} changed", id),
            ChangeEvent::PropertyChanged { source, property } => {
                tracing::debug!("{}.{} changed", source, property)
            },
        }
    }
}
