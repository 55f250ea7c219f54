mod common;

use std::sync::Arc;

use common::{item, mood, FailingLookup, FixedLookup};
use moodfood::kernel::state::RequestId;
use moodfood::kernel::telemetry::event::{FailureKind, RequestEventKind, TelemetryEvent};
use moodfood::kernel::telemetry::recorder::TelemetryRecorder;
use moodfood::model::MoodId;
use moodfood::{MoodStore, RecommendationController};

#[tokio::test]
async fn test_request_lifecycle_counts() {
    let store = MoodStore::new();
    let ok = RecommendationController::new(store.clone(), FixedLookup::new(vec![item("1", "A"), item("2", "B")]));
    let failing = RecommendationController::new(store.clone(), Arc::new(FailingLookup));

    let _ = ok.fetch_recommendations().await; // validation
    store.select_mood(&mood("happy")).await;
    ok.fetch_recommendations().await.unwrap();
    let _ = failing.fetch_recommendations().await;

    let stats = store.telemetry().await.request_stats;
    assert_eq!(stats.started, 2);
    assert_eq!(stats.succeeded, 1);
    assert_eq!(stats.validation_failures, 1);
    assert_eq!(stats.lookup_failures, 1);
    assert_eq!(stats.last_result_count, Some(2));
}

#[tokio::test]
async fn test_selection_changes_recorded() {
    let store = MoodStore::new();
    store.select_mood(&mood("happy")).await;
    store.select_mood(&mood("sad")).await;
    store.select_mood(&mood("sad")).await; // no-op, not recorded
    store.deselect_mood(&MoodId::new("happy")).await;
    store.clear().await;

    let stats = store.telemetry().await.selection_stats;
    assert_eq!(stats.changes, 3);
    assert_eq!(stats.peak_selected, 2);
    assert_eq!(stats.clears, 1);
}

#[test]
fn test_average_latency_skips_validation() {
    let mut recorder = TelemetryRecorder::new();
    let id = RequestId::new();
    recorder.record(TelemetryEvent::RequestLifecycle {
        request_id: Some(id),
        event: RequestEventKind::Succeeded { count: 3, latency_ms: 100 },
    });
    recorder.record(TelemetryEvent::RequestLifecycle {
        request_id: Some(RequestId::new()),
        event: RequestEventKind::Failed { kind: FailureKind::Timeout, latency_ms: 300 },
    });
    recorder.record(TelemetryEvent::RequestLifecycle {
        request_id: None,
        event: RequestEventKind::Failed { kind: FailureKind::Validation, latency_ms: 0 },
    });

    let stats = recorder.snapshot().request_stats;
    assert_eq!(stats.total_latency_ms, 400);
    assert_eq!(stats.avg_latency_ms, 200.0);
    assert_eq!(stats.timeouts, 1);
    assert_eq!(stats.validation_failures, 1);
}
