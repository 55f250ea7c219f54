use serde::{Deserialize, Serialize};
use crate::kernel::error::LookupError;
use crate::kernel::state::RequestId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TelemetryEvent {
    RequestLifecycle {
        /// `None` when the call never got far enough to be assigned an id.
        request_id: Option<RequestId>,
        event: RequestEventKind,
    },

    SelectionChanged {
        selected: usize,
    },

    SelectionCleared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestEventKind {
    Started,
    Succeeded { count: usize, latency_ms: u64 },
    Failed { kind: FailureKind, latency_ms: u64 },
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    Validation,
    Lookup,
    Timeout,
    Cancelled,
}

impl From<&LookupError> for FailureKind {
    fn from(err: &LookupError) -> Self {
        match err {
            LookupError::Failed(_) => FailureKind::Lookup, // Detail STRIPPED
            LookupError::Timeout(_) => FailureKind::Timeout,
            LookupError::Cancelled => FailureKind::Cancelled,
        }
    }
}
