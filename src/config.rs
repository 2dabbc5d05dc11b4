//! # Configuration Module
//!
//! Runtime configuration for the application, read from the environment
//! after `.env` loading. Only one knob exists today: the upstream API base
//! URL, overridable for testing against a local stub or a keyed endpoint.

use std::env;

use crate::api::DEFAULT_BASE_URL;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL for TheCocktailDB API, without a trailing slash.
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Build the configuration from environment variables.
    ///
    /// Recognized variables:
    /// - `COCKTAILDB_BASE_URL` - override the upstream base URL
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = env::var("COCKTAILDB_BASE_URL") {
            let base_url = base_url.trim_end_matches('/').to_string();
            if !base_url.is_empty() {
                config.base_url = base_url;
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_the_public_api() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    // Single test for every from_env case: the variable is process-global,
    // so splitting these up would race under the parallel test runner.
    #[test]
    fn test_from_env_override_trims_slashes_and_ignores_empty() {
        env::set_var("COCKTAILDB_BASE_URL", "http://localhost:8080/api/");
        assert_eq!(
            AppConfig::from_env().base_url,
            "http://localhost:8080/api"
        );

        env::set_var("COCKTAILDB_BASE_URL", "");
        assert_eq!(AppConfig::from_env().base_url, DEFAULT_BASE_URL);

        env::remove_var("COCKTAILDB_BASE_URL");
        assert_eq!(AppConfig::from_env().base_url, DEFAULT_BASE_URL);
    }
}
