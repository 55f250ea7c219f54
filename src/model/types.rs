use serde::{Deserialize, Serialize};
use std::fmt;
use crate::kernel::intensity::Intensity;

/// Catalog identifier of a mood (e.g. "happy").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoodId(pub String);

impl MoodId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for MoodId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A selectable emotional-state tag.
/// Catalog entries never carry an intensity; a selected copy carries the
/// global intensity as it was at selection time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mood {
    pub id: MoodId,
    pub name: String,
    pub color: String,
    pub icon: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Intensity>,
}

impl Mood {
    pub fn new(id: &str, name: &str, color: &str, icon: &str, description: &str) -> Self {
        Self {
            id: MoodId::new(id),
            name: name.to_string(),
            color: color.to_string(),
            icon: icon.to_string(),
            description: description.to_string(),
            intensity: None,
        }
    }

    /// Copy of this mood stamped with `intensity`.
    pub fn stamped(&self, intensity: Intensity) -> Self {
        Self {
            intensity: Some(intensity),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Recipe,
    Restaurant,
    Snack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantInfo {
    pub name: String,
    pub address: String,
    pub rating: f32,
    pub price_range: String,
}

/// One recipe, restaurant or snack returned by a lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecommendation {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    /// Minutes. Zero for restaurants.
    pub preparation_time: u32,
    pub difficulty: Difficulty,
    pub dietary_tags: Vec<String>,
    /// Moods the source dataset associates with this item. Not used for filtering.
    pub mood_tags: Vec<String>,
    /// 0.0 - 5.0
    pub rating: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_info: Option<RestaurantInfo>,
}

impl FoodRecommendation {
    /// Bare recipe entry with neutral defaults, handy for stub lookups.
    pub fn simple(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            image: String::new(),
            kind: RecommendationKind::Recipe,
            preparation_time: 0,
            difficulty: Difficulty::Easy,
            dietary_tags: Vec::new(),
            mood_tags: Vec::new(),
            rating: 0.0,
            ingredients: None,
            instructions: None,
            restaurant_info: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CookingSkill {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub dietary_restrictions: Vec<String>,
    pub allergies: Vec<String>,
    pub preferred_cuisines: Vec<String>,
    pub cooking_skill: CookingSkill,
    /// Minutes.
    pub max_preparation_time: u32,
    pub favorite_foods: Vec<String>,
}
