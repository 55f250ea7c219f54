pub mod moods;
pub mod recommendations;

pub use moods::{CatalogError, MoodCatalog, MoodCategory};
pub use recommendations::mock_recommendations;
