// src-tauri/src/config.rs
use crate::db::default_db_path;
use crate::error::ConfigError;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "RECIPE_BOX_DB";
pub const SEED_SAMPLES_ENV: &str = "RECIPE_BOX_SEED_SAMPLES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    /// Install the sample recipes when the catalog starts out empty.
    pub seed_samples: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let db_path = match lookup(DB_PATH_ENV).filter(|v| !v.trim().is_empty()) {
            Some(path) => PathBuf::from(path.trim()),
            None => default_db_path()?,
        };

        let seed_samples = lookup(SEED_SAMPLES_ENV)
            .map(|v| parse_flag(&v))
            .unwrap_or(true);

        Ok(AppConfig {
            db_path,
            seed_samples,
        })
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn env_override_wins_over_default_path() {
        let config = AppConfig::from_lookup(lookup_from(&[(DB_PATH_ENV, "/tmp/box.db")])).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/box.db"));
        assert!(config.seed_samples);
    }

    #[test]
    fn blank_override_falls_back_to_default() {
        let config = AppConfig::from_lookup(lookup_from(&[(DB_PATH_ENV, "  ")])).unwrap();
        assert_eq!(config.db_path, default_db_path().unwrap());
    }

    #[test]
    fn seeding_can_be_switched_off() {
        for off in ["0", "false", "No", " off "] {
            let config = AppConfig::from_lookup(lookup_from(&[(SEED_SAMPLES_ENV, off)])).unwrap();
            assert!(!config.seed_samples, "{off:?} should disable seeding");
        }
        let config = AppConfig::from_lookup(lookup_from(&[(SEED_SAMPLES_ENV, "yes")])).unwrap();
        assert!(config.seed_samples);
    }
}
