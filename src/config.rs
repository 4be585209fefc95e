use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::generator::DEFAULT_GENERATION_DELAY;

pub const DATA_DIR_ENV_VAR: &str = "RECIPE_FINDER_DATA_DIR";
pub const DELAY_MS_ENV_VAR: &str = "RECIPE_FINDER_DELAY_MS";
pub const DEFAULT_DATA_DIR: &str = ".recipe_finder";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the saved-recipes file.
    pub data_dir: PathBuf,
    pub generation_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            generation_delay: DEFAULT_GENERATION_DELAY,
        }
    }
}

impl AppConfig {
    /// Reads settings from the process environment, after loading `.env`
    /// if one is present.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(dir) = lookup(DATA_DIR_ENV_VAR).filter(|d| !d.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup(DELAY_MS_ENV_VAR) {
            let millis: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{} must be a whole number of milliseconds, got '{}'", DELAY_MS_ENV_VAR, raw))?;
            config.generation_delay = Duration::from_millis(millis);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.generation_delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (DATA_DIR_ENV_VAR, "/tmp/recipes"),
            (DELAY_MS_ENV_VAR, " 250 "),
        ]))
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/recipes"));
        assert_eq!(config.generation_delay, Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_delay_is_an_error() {
        let err = AppConfig::from_lookup(lookup_from(&[(DELAY_MS_ENV_VAR, "soon")])).unwrap_err();
        assert!(err.to_string().contains(DELAY_MS_ENV_VAR));
    }
}
