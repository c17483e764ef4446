//! Generator settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of schedule options returned.
pub const DEFAULT_MAX_OPTIONS: usize = 5;

/// Settings for a generation run.
///
/// Deserializes from partial input; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Maximum number of valid schedules to return (the cap).
    pub max_options: usize,
    /// Wall-clock budget for the search. `None` = unbounded.
    pub time_limit: Option<Duration>,
}

impl GeneratorConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the result cap.
    pub fn with_max_options(mut self, max_options: usize) -> Self {
        self.max_options = max_options;
        self
    }

    /// Sets the search time limit.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_options: DEFAULT_MAX_OPTIONS,
            time_limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.max_options, 5);
        assert!(config.time_limit.is_none());
    }

    #[test]
    fn test_partial_json() {
        let config: GeneratorConfig = serde_json::from_str(r#"{"max_options": 3}"#).unwrap();
        assert_eq!(config.max_options, 3);
        assert!(config.time_limit.is_none());

        let config: GeneratorConfig =
            serde_json::from_str(r#"{"time_limit": {"secs": 2, "nanos": 0}}"#).unwrap();
        assert_eq!(config.max_options, DEFAULT_MAX_OPTIONS);
        assert_eq!(config.time_limit, Some(Duration::from_secs(2)));
    }

    #[test]
    fn test_builder() {
        let config = GeneratorConfig::new()
            .with_max_options(10)
            .with_time_limit(Duration::from_millis(250));
        assert_eq!(config.max_options, 10);
        assert_eq!(config.time_limit, Some(Duration::from_millis(250)));
    }
}
