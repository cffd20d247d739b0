//! Runtime configuration shared by the GUI and headless modes.

use std::time::Duration;

use thiserror::Error;

use crate::fixtures::APP_TOKEN_PLACEHOLDER;
use crate::plugin::SimulatedConfig;

/// Configuration errors
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Failure rate must be between 0 and 1, got {0}")]
    InvalidFailureRate(f64),
}

/// Bridge demo configuration
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Token passed to `setup`
    pub app_token: String,
    /// Construct the adapter with a plugin at all
    pub plugin_enabled: bool,
    /// Simulated completion latency
    pub latency: Duration,
    /// Simulated failure probability
    pub failure_rate: f64,
    /// Seed for literal selection and failure injection
    pub seed: Option<u64>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            app_token: APP_TOKEN_PLACEHOLDER.to_string(),
            plugin_enabled: true,
            latency: Duration::from_millis(250),
            failure_rate: 0.0,
            seed: None,
        }
    }
}

impl BridgeConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.failure_rate) {
            return Err(ConfigError::InvalidFailureRate(self.failure_rate));
        }
        Ok(())
    }

    /// Settings for the simulated plugin
    pub fn simulated(&self) -> SimulatedConfig {
        SimulatedConfig {
            latency: self.latency,
            failure_rate: self.failure_rate,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = BridgeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.app_token, "APP_TOKEN");
    }

    #[test]
    fn test_failure_rate_bounds() {
        let mut config = BridgeConfig::default();
        config.failure_rate = 1.5;
        assert_eq!(config.validate(), Err(ConfigError::InvalidFailureRate(1.5)));

        config.failure_rate = f64::NAN;
        assert!(config.validate().is_err());

        config.failure_rate = 1.0;
        assert!(config.validate().is_ok());
    }
}
