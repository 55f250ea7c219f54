use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::model::{Mood, MoodId};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate mood id '{0}'")]
    DuplicateId(MoodId),
    #[error("catalog is empty")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodCategory {
    Positive,
    Negative,
    Neutral,
}

const POSITIVE: [&str; 7] = ["happy", "energetic", "calm", "romantic", "excited", "focused", "creative"];
const NEGATIVE: [&str; 4] = ["sad", "stressed", "anxious", "tired"];

impl MoodCategory {
    pub fn of(id: &MoodId) -> Self {
        if POSITIVE.contains(&id.as_str()) {
            MoodCategory::Positive
        } else if NEGATIVE.contains(&id.as_str()) {
            MoodCategory::Negative
        } else {
            MoodCategory::Neutral
        }
    }
}

/// Ordered, read-only set of selectable moods.
#[derive(Debug, Clone)]
pub struct MoodCatalog {
    moods: Vec<Mood>,
}

impl MoodCatalog {
    /// Ids must be unique and the list non-empty.
    pub fn new(moods: Vec<Mood>) -> Result<Self, CatalogError> {
        if moods.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for mood in &moods {
            if !seen.insert(&mood.id) {
                return Err(CatalogError::DuplicateId(mood.id.clone()));
            }
        }
        // Catalog entries are reference data, never pre-stamped.
        let moods = moods
            .into_iter()
            .map(|m| Mood { intensity: None, ..m })
            .collect();
        Ok(Self { moods })
    }

    pub fn builtin() -> Self {
        Self {
            moods: builtin_moods(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let moods: Vec<Mood> = serde_json::from_str(json)?;
        Self::new(moods)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        info!("Loaded {} moods from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn get(&self, id: &MoodId) -> Option<&Mood> {
        self.moods.iter().find(|m| &m.id == id)
    }

    pub fn by_category(&self, category: MoodCategory) -> Vec<&Mood> {
        self.moods
            .iter()
            .filter(|m| MoodCategory::of(&m.id) == category)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mood> {
        self.moods.iter()
    }

    pub fn len(&self) -> usize {
        self.moods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moods.is_empty()
    }
}

fn builtin_moods() -> Vec<Mood> {
    vec![
        Mood::new("happy", "Happy", "bg-accent-happy", "😊", "Feeling joyful and content"),
        Mood::new("sad", "Sad", "bg-accent-sad", "😢", "Feeling down or melancholic"),
        Mood::new("stressed", "Stressed", "bg-accent-stressed", "😰", "Feeling overwhelmed or anxious"),
        Mood::new("energetic", "Energetic", "bg-accent-energetic", "⚡", "Feeling full of life and vigor"),
        Mood::new("calm", "Calm", "bg-accent-calm", "😌", "Feeling peaceful and relaxed"),
        Mood::new("anxious", "Anxious", "bg-accent-anxious", "😨", "Feeling worried or uneasy"),
        Mood::new("romantic", "Romantic", "bg-accent-romantic", "💕", "Feeling loving and affectionate"),
        Mood::new("nostalgic", "Nostalgic", "bg-accent-nostalgic", "🕰️", "Feeling sentimental about the past"),
        Mood::new("excited", "Excited", "bg-accent-happy", "🎉", "Feeling thrilled and enthusiastic"),
        Mood::new("tired", "Tired", "bg-accent-sad", "😴", "Feeling exhausted or sleepy"),
        Mood::new("focused", "Focused", "bg-accent-energetic", "🎯", "Feeling concentrated and alert"),
        Mood::new("creative", "Creative", "bg-accent-calm", "🎨", "Feeling inspired and imaginative"),
    ]
}
