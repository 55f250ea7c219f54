use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::intensity::Intensity;
use super::selection::SelectionModel;
use super::state::{MoodState, StateDelta};
use super::telemetry::event::TelemetryEvent;
use super::telemetry::metrics::TelemetrySnapshot;
use super::telemetry::recorder::TelemetryRecorder;
use crate::config::StoreConfig;
use crate::model::{Mood, MoodId, UserPreferences};

#[derive(Debug)]
pub(crate) struct StoreInner {
    pub(crate) state: MoodState,
    pub(crate) telemetry: TelemetryRecorder,
    /// Lookups started and not yet settled. Unlike the request tag this is
    /// never overwritten by another request's outcome.
    pub(crate) in_flight: usize,
}

/// Shared handle over the mood state. Cloning is cheap and every clone
/// sees the same state.
///
/// Each public method takes the lock once and applies its whole
/// read-modify-write under it.
#[derive(Debug, Clone)]
pub struct MoodStore {
    inner: Arc<Mutex<StoreInner>>,
    selection: SelectionModel,
}

impl Default for MoodStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MoodStore {
    pub fn new() -> Self {
        Self::with_config(&StoreConfig::default())
    }

    pub fn with_config(config: &StoreConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                state: MoodState::with_intensity(config.default_intensity),
                telemetry: TelemetryRecorder::with_capacity(config.telemetry_capacity),
                in_flight: 0,
            })),
            selection: SelectionModel::new(config.max_selected),
        }
    }

    /// Returns whether the mood was added.
    pub async fn select_mood(&self, mood: &Mood) -> bool {
        let mut inner = self.inner.lock().await;
        let Some(delta) = self.selection.select(&inner.state, mood) else {
            return false;
        };
        inner.state.reduce(delta);
        let selected = inner.state.selected().len();
        inner.telemetry.record(TelemetryEvent::SelectionChanged { selected });
        debug!("Selected mood '{}' ({} of {})", mood.id, selected, self.selection.max_selected());
        true
    }

    /// Returns whether an entry was removed.
    pub async fn deselect_mood(&self, id: &MoodId) -> bool {
        let mut inner = self.inner.lock().await;
        let Some(delta) = self.selection.deselect(&inner.state, id) else {
            return false;
        };
        inner.state.reduce(delta);
        let selected = inner.state.selected().len();
        inner.telemetry.record(TelemetryEvent::SelectionChanged { selected });
        debug!("Deselected mood '{}'", id);
        true
    }

    /// Out-of-range levels are clamped; the stored value is returned.
    pub async fn set_intensity(&self, level: i64) -> Intensity {
        let mut inner = self.inner.lock().await;
        inner.state.reduce(self.selection.set_intensity(level));
        inner.state.intensity()
    }

    /// Empties the selection and drops any recommendations with it.
    pub async fn clear(&self) {
        let mut inner = self.inner.lock().await;
        inner.state.reduce(self.selection.clear());
        inner.telemetry.record(TelemetryEvent::SelectionCleared);
        info!("Selection cleared");
    }

    pub async fn set_user_preferences(&self, preferences: UserPreferences) {
        let mut inner = self.inner.lock().await;
        inner.state.reduce(StateDelta::PreferencesSet(preferences));
    }

    /// Point-in-time copy for rendering.
    pub async fn snapshot(&self) -> MoodState {
        self.inner.lock().await.state.clone()
    }

    pub async fn telemetry(&self) -> TelemetrySnapshot {
        self.inner.lock().await.telemetry.snapshot()
    }

    /// Runs `f` with the lock held. Must not be used across an await.
    pub(crate) async fn with_inner<R>(&self, f: impl FnOnce(&mut StoreInner) -> R) -> R {
        let mut inner = self.inner.lock().await;
        f(&mut inner)
    }

    /// Like [`Self::with_inner`] but gives up instead of waiting. Usable
    /// from synchronous contexts such as `Drop`.
    pub(crate) fn try_with_inner<R>(&self, f: impl FnOnce(&mut StoreInner) -> R) -> Option<R> {
        let mut inner = self.inner.try_lock().ok()?;
        Some(f(&mut inner))
    }
}
