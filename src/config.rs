use serde::Deserialize;
use std::{env, fmt::Display, fs, path::Path, str::FromStr, time::Duration};
use thiserror::Error;
use tracing::{info, warn};

use crate::kernel::intensity::Intensity;
use crate::kernel::selection::MAX_SELECTED;
use crate::services::mock::DEFAULT_DELAY_MS;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// How overlapping `fetch_recommendations` calls are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchPolicy {
    /// Every call runs; whichever finishes last owns the final state.
    #[default]
    Overlap,
    /// A call made while another is loading is rejected untouched.
    SingleFlight,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub max_selected: usize,
    pub default_intensity: Intensity,
    pub fetch_policy: FetchPolicy,
    /// Delay of the built-in mock lookup.
    pub lookup_delay_ms: u64,
    /// No deadline when unset.
    pub lookup_timeout_ms: Option<u64>,
    pub telemetry_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_selected: MAX_SELECTED,
            default_intensity: Intensity::DEFAULT,
            fetch_policy: FetchPolicy::Overlap,
            lookup_delay_ms: DEFAULT_DELAY_MS,
            lookup_timeout_ms: None,
            telemetry_capacity: 10_000,
        }
    }
}

impl StoreConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::from_json_str(&fs::read_to_string(path)?)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// `MOODFOOD_LOOKUP_DELAY_MS` and `MOODFOOD_LOOKUP_TIMEOUT_MS` override
    /// the file values. Unparsable values are ignored with a warning.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(delay) = env_var::<u64>("MOODFOOD_LOOKUP_DELAY_MS") {
            self.lookup_delay_ms = delay;
        }
        if let Some(timeout) = env_var::<u64>("MOODFOOD_LOOKUP_TIMEOUT_MS") {
            self.lookup_timeout_ms = Some(timeout);
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_selected == 0 {
            return Err(ConfigError::Invalid("max_selected must be at least 1".into()));
        }
        if self.max_selected > MAX_SELECTED {
            return Err(ConfigError::Invalid(format!("max_selected must be at most {MAX_SELECTED}")));
        }
        if self.lookup_timeout_ms == Some(0) {
            return Err(ConfigError::Invalid("lookup_timeout_ms must be positive".into()));
        }
        Ok(())
    }

    pub fn lookup_delay(&self) -> Duration {
        Duration::from_millis(self.lookup_delay_ms)
    }

    pub fn lookup_timeout(&self) -> Option<Duration> {
        self.lookup_timeout_ms.map(Duration::from_millis)
    }
}

fn env_var<T: FromStr>(key: &str) -> Option<T>
where
    T::Err: Display,
{
    let raw = env::var(key).ok()?;
    raw.parse()
        .map_err(|e| warn!("Invalid {key} value '{raw}': {e}"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = StoreConfig::from_json_str(r#"{ "fetch_policy": "single_flight", "lookup_timeout_ms": 250 }"#).unwrap();
        assert_eq!(config.fetch_policy, FetchPolicy::SingleFlight);
        assert_eq!(config.lookup_timeout(), Some(Duration::from_millis(250)));
        assert_eq!(config.max_selected, 3);
        assert_eq!(config.default_intensity, Intensity::DEFAULT);
    }

    #[test]
    fn out_of_range_intensity_is_clamped() {
        let config = StoreConfig::from_json_str(r#"{ "default_intensity": 42 }"#).unwrap();
        assert_eq!(config.default_intensity.level(), 10);
    }

    #[test]
    fn rejects_zero_selection() {
        assert!(matches!(
            StoreConfig::from_json_str(r#"{ "max_selected": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_selection_above_three() {
        assert!(matches!(
            StoreConfig::from_json_str(r#"{ "max_selected": 5 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(StoreConfig::from_json_str(r#"{ "max_selected": 2 }"#).is_ok());
    }
}
