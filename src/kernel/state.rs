use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::intensity::Intensity;
use crate::model::{FoodRecommendation, Mood, MoodId, UserPreferences};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle of the recommendation request. Results are held beside it on
/// [`MoodState`] so they survive `Loading` and `Error`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum RequestState {
    #[default]
    Idle,
    Loading(RequestId),
    Success,
    Error(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Strict state delta. This is the only way [`MoodState`] mutates.
#[derive(Debug, Clone)]
pub enum StateDelta {
    /// Already validated and stamped by the selection model.
    MoodSelected(Mood),
    MoodDeselected(MoodId),
    IntensitySet(Intensity),
    SelectionCleared,
    PreferencesSet(UserPreferences),
    RequestStarted(RequestId),
    RequestSucceeded(Vec<FoodRecommendation>),
    RequestFailed(String),
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MoodState {
    selected: Vec<Mood>,
    intensity: Intensity,
    request: RequestState,
    recommendations: Vec<FoodRecommendation>,
    preferences: Option<UserPreferences>,
    /// Monotonic, bumped on every reduction.
    pub version: u64,
}

impl MoodState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_intensity(intensity: Intensity) -> Self {
        Self {
            intensity,
            ..Self::default()
        }
    }

    /// Pure reduction: State + Delta -> Mutated State
    pub fn reduce(&mut self, delta: StateDelta) {
        self.version += 1;

        match delta {
            StateDelta::MoodSelected(mood) => {
                self.selected.push(mood);
            }
            StateDelta::MoodDeselected(id) => {
                self.selected.retain(|m| m.id != id);
            }
            StateDelta::IntensitySet(intensity) => {
                self.intensity = intensity;
            }
            StateDelta::SelectionCleared => {
                // Stale results must never sit next to an empty selection.
                self.selected.clear();
                self.recommendations.clear();
            }
            StateDelta::PreferencesSet(prefs) => {
                self.preferences = Some(prefs);
            }
            StateDelta::RequestStarted(id) => {
                // Previous results stay until replaced.
                self.request = RequestState::Loading(id);
            }
            StateDelta::RequestSucceeded(results) => {
                self.recommendations = results;
                self.request = RequestState::Success;
            }
            StateDelta::RequestFailed(message) => {
                self.request = RequestState::Error(message);
            }
        }
    }

    pub fn selected(&self) -> &[Mood] {
        &self.selected
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    pub fn recommendations(&self) -> &[FoodRecommendation] {
        &self.recommendations
    }

    pub fn preferences(&self) -> Option<&UserPreferences> {
        self.preferences.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.request.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.request.error()
    }

    pub fn is_selected(&self, id: &MoodId) -> bool {
        self.selected.iter().any(|m| &m.id == id)
    }
}
