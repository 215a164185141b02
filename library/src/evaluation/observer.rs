//! Structured evaluation events.
//!
//! The controller reports what it did through an [`EvalObserver`]. The
//! default [`LogObserver`] writes to the `log` facade; embedders can route
//! events anywhere else.

use std::sync::Mutex;

use log::debug;

use crate::model::{Channel, CombineMode, TagSequence};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalEvent {
    /// The node is disabled; nothing was evaluated.
    Disabled,
    /// The node is locked; the cached bundle was returned.
    CacheHit { bundle: String },
    /// A channel's template resolved to `text`.
    Resolved { channel: Channel, text: String },
    /// A channel's merged and deduplicated tags.
    Combined {
        channel: Channel,
        mode: CombineMode,
        tags: TagSequence,
    },
    Finished { bundle: String },
}

pub trait EvalObserver: Send + Sync {
    fn on_event(&self, event: &EvalEvent);
}

pub struct LogObserver;

impl EvalObserver for LogObserver {
    fn on_event(&self, event: &EvalEvent) {
        match event {
            EvalEvent::Disabled => debug!("Node disabled, returning empty bundle"),
            EvalEvent::CacheHit { bundle } => debug!("Node locked, reusing cached output {:?}", bundle),
            EvalEvent::Resolved { channel, text } => debug!("Resolved {} template: {:?}", channel, text),
            EvalEvent::Combined {
                channel,
                mode,
                tags,
            } => debug!("{} {} -> {} tags: {}", mode, channel, tags.len(), tags),
            EvalEvent::Finished { bundle } => debug!("Output bundle: {:?}", bundle),
        }
    }
}

pub struct NullObserver;

impl EvalObserver for NullObserver {
    fn on_event(&self, _event: &EvalEvent) {}
}

/// Keeps every event in memory.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<EvalEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<EvalEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl EvalObserver for RecordingObserver {
    fn on_event(&self, event: &EvalEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }
}
