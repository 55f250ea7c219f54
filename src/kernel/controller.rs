use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use super::error::{LookupError, RecommendError, ValidationError, LOOKUP_FAILED_MESSAGE, VALIDATION_MESSAGE};
use super::intensity::Intensity;
use super::state::{RequestId, StateDelta};
use super::store::{MoodStore, StoreInner};
use super::telemetry::event::{FailureKind, RequestEventKind, TelemetryEvent};
use crate::config::{FetchPolicy, StoreConfig};
use crate::model::{FoodRecommendation, Mood};
use crate::services::RecommendationLookup;

/// Drives one logical "fetch recommendations" operation against a
/// [`MoodStore`].
///
/// The only suspension point is the lookup itself. Under
/// [`FetchPolicy::Overlap`] concurrent calls are not serialized: each one
/// writes its own outcome when it finishes, so the last to finish wins.
#[derive(Clone)]
pub struct RecommendationController {
    store: MoodStore,
    lookup: Arc<dyn RecommendationLookup>,
    policy: FetchPolicy,
    timeout: Option<Duration>,
}

impl RecommendationController {
    pub fn new(store: MoodStore, lookup: Arc<dyn RecommendationLookup>) -> Self {
        Self {
            store,
            lookup,
            policy: FetchPolicy::Overlap,
            timeout: None,
        }
    }

    pub fn with_config(store: MoodStore, lookup: Arc<dyn RecommendationLookup>, config: &StoreConfig) -> Self {
        Self {
            store,
            lookup,
            policy: config.fetch_policy,
            timeout: config.lookup_timeout(),
        }
    }

    pub fn store(&self) -> &MoodStore {
        &self.store
    }

    pub fn policy(&self) -> FetchPolicy {
        self.policy
    }

    /// Validates, enters `Loading`, awaits the lookup and records the
    /// outcome. The state is already updated when this returns; the
    /// result only mirrors it for callers that want to branch.
    pub async fn fetch_recommendations(&self) -> Result<Vec<FoodRecommendation>, RecommendError> {
        self.fetch(None).await
    }

    /// Same as [`Self::fetch_recommendations`], but `cancel` aborts the wait.
    /// A cancelled request ends in the generic error state.
    pub async fn fetch_recommendations_cancellable(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<FoodRecommendation>, RecommendError> {
        self.fetch(Some(cancel)).await
    }

    async fn fetch(&self, cancel: Option<&CancellationToken>) -> Result<Vec<FoodRecommendation>, RecommendError> {
        let (id, moods, intensity) = self.begin().await?;
        info!("Request {:?} started with {} mood(s)", id.0, moods.len());

        // Armed until the outcome is written, so a caller dropping this
        // future mid-lookup cannot leave the store in `Loading`.
        let mut pending = PendingRequest::new(self.store.clone(), id);
        let outcome = self.run_lookup(&moods, intensity, cancel).await;
        let latency_ms = pending.elapsed_ms();

        self.store
            .with_inner(|inner| {
                pending.settled = true;
                settle(inner, id, &outcome, latency_ms);
            })
            .await;

        outcome.map_err(RecommendError::from)
    }

    /// Precondition checks and `Loading` transition under a single lock.
    /// The in-flight check comes first so a rejected call never writes.
    async fn begin(&self) -> Result<(RequestId, Vec<Mood>, Intensity), RecommendError> {
        let policy = self.policy;
        self.store
            .with_inner(|inner| {
                if policy == FetchPolicy::SingleFlight && inner.in_flight > 0 {
                    inner.telemetry.record(TelemetryEvent::RequestLifecycle {
                        request_id: None,
                        event: RequestEventKind::Rejected,
                    });
                    info!("Rejected overlapping recommendation request");
                    return Err(RecommendError::InFlight);
                }

                if inner.state.selected().is_empty() {
                    inner.state.reduce(StateDelta::RequestFailed(VALIDATION_MESSAGE.to_string()));
                    inner.telemetry.record(TelemetryEvent::RequestLifecycle {
                        request_id: None,
                        event: RequestEventKind::Failed { kind: FailureKind::Validation, latency_ms: 0 },
                    });
                    warn!("Recommendation request without a selected mood");
                    return Err(RecommendError::from(ValidationError::NoMoodSelected));
                }

                let id = RequestId::new();
                inner.in_flight += 1;
                inner.state.reduce(StateDelta::RequestStarted(id));
                inner.telemetry.record(TelemetryEvent::RequestLifecycle {
                    request_id: Some(id),
                    event: RequestEventKind::Started,
                });
                Ok((id, inner.state.selected().to_vec(), inner.state.intensity()))
            })
            .await
    }

    async fn run_lookup(
        &self,
        moods: &[Mood],
        intensity: Intensity,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<FoodRecommendation>, LookupError> {
        let call = async {
            match self.timeout {
                Some(limit) => match tokio::time::timeout(limit, self.lookup.lookup(moods, intensity)).await {
                    Ok(result) => result,
                    Err(_) => Err(LookupError::Timeout(limit.as_millis() as u64)),
                },
                None => self.lookup.lookup(moods, intensity).await,
            }
        };

        match cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => Err(LookupError::Cancelled),
                result = call => result,
            },
            None => call.await,
        }
    }
}

/// Writes the outcome of a started request. Prior results are left in
/// place on failure.
fn settle(
    inner: &mut StoreInner,
    id: RequestId,
    outcome: &Result<Vec<FoodRecommendation>, LookupError>,
    latency_ms: u64,
) {
    inner.in_flight = inner.in_flight.saturating_sub(1);
    match outcome {
        Ok(results) => {
            inner.state.reduce(StateDelta::RequestSucceeded(results.clone()));
            inner.telemetry.record(TelemetryEvent::RequestLifecycle {
                request_id: Some(id),
                event: RequestEventKind::Succeeded { count: results.len(), latency_ms },
            });
            info!("Request {:?} succeeded with {} item(s)", id.0, results.len());
        }
        Err(err) => {
            inner.state.reduce(StateDelta::RequestFailed(LOOKUP_FAILED_MESSAGE.to_string()));
            inner.telemetry.record(TelemetryEvent::RequestLifecycle {
                request_id: Some(id),
                event: RequestEventKind::Failed { kind: FailureKind::from(err), latency_ms },
            });
            warn!("Request {:?} failed: {}", id.0, err);
        }
    }
}

/// A started request whose outcome has not been written yet. Dropped
/// unsettled, it records the request as cancelled.
struct PendingRequest {
    store: MoodStore,
    id: RequestId,
    started: Instant,
    settled: bool,
}

impl PendingRequest {
    fn new(store: MoodStore, id: RequestId) -> Self {
        Self {
            store,
            id,
            started: Instant::now(),
            settled: false,
        }
    }

    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

impl Drop for PendingRequest {
    fn drop(&mut self) {
        if self.settled {
            return;
        }

        let id = self.id;
        let latency_ms = self.elapsed_ms();
        info!("Request {:?} dropped before completion", id.0);

        let abandon = move |inner: &mut StoreInner| settle(inner, id, &Err(LookupError::Cancelled), latency_ms);
        if self.store.try_with_inner(abandon).is_some() {
            return;
        }

        // Lock is busy: finish the write on the runtime instead.
        match Handle::try_current() {
            Ok(handle) => {
                let store = self.store.clone();
                handle.spawn(async move { store.with_inner(abandon).await });
            }
            Err(_) => error!("Request {:?} dropped outside a runtime, left in loading", id.0),
        }
    }
}
