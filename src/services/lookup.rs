use async_trait::async_trait;

use crate::kernel::error::LookupError;
use crate::kernel::intensity::Intensity;
use crate::model::{FoodRecommendation, Mood};

/// Black-box source of recommendations.
///
/// The controller places no constraint on how results are chosen; it only
/// awaits the call and records what comes back.
#[async_trait]
pub trait RecommendationLookup: Send + Sync {
    async fn lookup(
        &self,
        moods: &[Mood],
        intensity: Intensity,
    ) -> Result<Vec<FoodRecommendation>, LookupError>;
}
