pub mod lookup;
pub mod mock;

pub use lookup::RecommendationLookup;
pub use mock::MockLookup;
