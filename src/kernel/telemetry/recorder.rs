use std::collections::VecDeque;
use super::event::TelemetryEvent;
use super::metrics::{TelemetrySnapshot, compute_snapshot};

const MAX_EVENTS: usize = 10_000;

#[derive(Debug)]
pub struct TelemetryRecorder {
    buffer: VecDeque<TelemetryEvent>,
    capacity: usize,
}

impl Default for TelemetryRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryRecorder {
    pub fn new() -> Self {
        Self::with_capacity(MAX_EVENTS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity.min(MAX_EVENTS)),
            capacity: capacity.max(1),
        }
    }

    /// Oldest events are dropped once the buffer is full.
    pub fn record(&mut self, event: TelemetryEvent) {
        if self.buffer.len() >= self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(event);
    }

    pub fn snapshot(&self) -> TelemetrySnapshot {
        compute_snapshot(&self.buffer)
    }

    pub fn events(&self) -> impl Iterator<Item = &TelemetryEvent> {
        self.buffer.iter()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
