use std::collections::VecDeque;
use super::event::{FailureKind, RequestEventKind, TelemetryEvent};

#[derive(Debug, Clone, Default)]
pub struct TelemetrySnapshot {
    pub request_stats: RequestStats,
    pub selection_stats: SelectionStats,
}

#[derive(Debug, Clone, Default)]
pub struct RequestStats {
    pub started: u64,
    pub succeeded: u64,
    pub validation_failures: u64,
    pub lookup_failures: u64,
    pub timeouts: u64,
    pub cancelled: u64,
    pub rejected: u64,
    pub total_latency_ms: u64,
    /// Over completed lookups, successful or not.
    pub avg_latency_ms: f64,
    pub last_result_count: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct SelectionStats {
    pub changes: u64,
    pub clears: u64,
    /// Largest selection size observed.
    pub peak_selected: usize,
}

pub fn compute_snapshot(events: &VecDeque<TelemetryEvent>) -> TelemetrySnapshot {
    let mut snap = TelemetrySnapshot::default();
    let mut completed = 0u64;

    for event in events {
        match event {
            TelemetryEvent::RequestLifecycle { event, .. } => {
                let stats = &mut snap.request_stats;
                match event {
                    RequestEventKind::Started => stats.started += 1,
                    RequestEventKind::Succeeded { count, latency_ms } => {
                        stats.succeeded += 1;
                        stats.total_latency_ms += latency_ms;
                        stats.last_result_count = Some(*count);
                        completed += 1;
                    }
                    RequestEventKind::Failed { kind, latency_ms } => {
                        match kind {
                            FailureKind::Validation => stats.validation_failures += 1,
                            FailureKind::Lookup => stats.lookup_failures += 1,
                            FailureKind::Timeout => stats.timeouts += 1,
                            FailureKind::Cancelled => stats.cancelled += 1,
                        }
                        // Validation never reaches the lookup.
                        if *kind != FailureKind::Validation {
                            stats.total_latency_ms += latency_ms;
                            completed += 1;
                        }
                    }
                    RequestEventKind::Rejected => stats.rejected += 1,
                }
            }
            TelemetryEvent::SelectionChanged { selected } => {
                snap.selection_stats.changes += 1;
                snap.selection_stats.peak_selected = snap.selection_stats.peak_selected.max(*selected);
            }
            TelemetryEvent::SelectionCleared => {
                snap.selection_stats.clears += 1;
            }
        }
    }

    if completed > 0 {
        snap.request_stats.avg_latency_ms = snap.request_stats.total_latency_ms as f64 / completed as f64;
    }

    snap
}
