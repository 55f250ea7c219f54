use tracing::{debug, warn};

use super::intensity::Intensity;
use super::state::{MoodState, StateDelta};
use crate::model::{Mood, MoodId};

pub const MAX_SELECTED: usize = 3;

/// Logic operator over the selection part of [`MoodState`].
/// Holds no state itself; every method turns a request into the delta
/// that should be reduced, or `None` when the request is a no-op.
#[derive(Debug, Clone, Copy)]
pub struct SelectionModel {
    max_selected: usize,
}

impl Default for SelectionModel {
    fn default() -> Self {
        Self {
            max_selected: MAX_SELECTED,
        }
    }
}

impl SelectionModel {
    /// The limit is kept within `1..=MAX_SELECTED`.
    pub fn new(max_selected: usize) -> Self {
        let clamped = max_selected.clamp(1, MAX_SELECTED);
        if clamped != max_selected {
            warn!("Selection limit {} out of range, using {}", max_selected, clamped);
        }
        Self { max_selected: clamped }
    }

    pub fn max_selected(&self) -> usize {
        self.max_selected
    }

    /// Full selection or duplicate id: silent no-op.
    pub fn select(&self, state: &MoodState, mood: &Mood) -> Option<StateDelta> {
        if state.selected().len() >= self.max_selected {
            debug!("Selection full, ignoring '{}'", mood.id);
            return None;
        }
        if state.is_selected(&mood.id) {
            debug!("Mood '{}' already selected", mood.id);
            return None;
        }
        Some(StateDelta::MoodSelected(mood.stamped(state.intensity())))
    }

    pub fn deselect(&self, state: &MoodState, id: &MoodId) -> Option<StateDelta> {
        state
            .is_selected(id)
            .then(|| StateDelta::MoodDeselected(id.clone()))
    }

    pub fn set_intensity(&self, level: i64) -> StateDelta {
        let intensity = Intensity::clamped(level);
        if i64::from(intensity.level()) != level {
            warn!("Intensity {} out of range, clamped to {}", level, intensity.level());
        }
        StateDelta::IntensitySet(intensity)
    }

    pub fn clear(&self) -> StateDelta {
        StateDelta::SelectionCleared
    }
}
