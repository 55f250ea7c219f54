pub mod account;
pub mod catalog;
pub mod config;
pub mod kernel;
pub mod model;
pub mod services;

pub use config::{FetchPolicy, StoreConfig};
pub use kernel::controller::RecommendationController;
pub use kernel::error::{LookupError, RecommendError, ValidationError};
pub use kernel::intensity::Intensity;
pub use kernel::state::{MoodState, RequestState};
pub use kernel::store::MoodStore;
