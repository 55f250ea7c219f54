use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use super::lookup::RecommendationLookup;
use crate::catalog::recommendations::mock_recommendations;
use crate::kernel::error::LookupError;
use crate::kernel::intensity::Intensity;
use crate::model::{FoodRecommendation, Mood};

pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Stand-in for a real backend: ignores its inputs, waits, then returns
/// the fixed three-item list.
#[derive(Debug, Clone)]
pub struct MockLookup {
    delay: Duration,
    items: Vec<FoodRecommendation>,
}

impl MockLookup {
    pub fn new() -> Self {
        Self::with_delay(Duration::from_millis(DEFAULT_DELAY_MS))
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            items: mock_recommendations(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for MockLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecommendationLookup for MockLookup {
    async fn lookup(
        &self,
        moods: &[Mood],
        intensity: Intensity,
    ) -> Result<Vec<FoodRecommendation>, LookupError> {
        debug!(
            "Mock lookup for {} mood(s) at intensity {}, sleeping {:?}",
            moods.len(),
            intensity.level(),
            self.delay
        );
        tokio::time::sleep(self.delay).await;
        Ok(self.items.clone())
    }
}
