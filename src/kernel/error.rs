use thiserror::Error;

pub const VALIDATION_MESSAGE: &str = "Please select at least one mood";
pub const LOOKUP_FAILED_MESSAGE: &str = "Failed to fetch recommendations";

/// Precondition failure before a request starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", VALIDATION_MESSAGE)]
    NoMoodSelected,
}

/// The lookup collaborator did not produce a list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("lookup failed: {0}")]
    Failed(String),
    #[error("lookup timed out after {0} ms")]
    Timeout(u64),
    #[error("lookup cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
    /// Only raised under `FetchPolicy::SingleFlight`.
    #[error("a recommendation request is already in flight")]
    InFlight,
}

impl RecommendError {
    /// Text shown to the user. Lookup details stay in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            RecommendError::Validation(_) => VALIDATION_MESSAGE,
            RecommendError::Lookup(_) => LOOKUP_FAILED_MESSAGE,
            RecommendError::InFlight => "Recommendations are already loading",
        }
    }
}
