//! Configuration handling for the site

use crate::backend::{DEFAULT_MAX_INCREMENT, DEFAULT_TICK};
use crate::state::{CONTACT_RESET_DELAY, MAX_UPLOAD_BYTES};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User overrides for timings and limits. Missing keys fall back to the
/// built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SiteConfig {
    /// How long the contact confirmation stays up, in milliseconds
    pub contact_reset_delay_ms: Option<u64>,
    /// Interval between simulated upload progress ticks, in milliseconds
    pub upload_tick_ms: Option<u64>,
    /// Upper bound of one simulated progress step, in percent
    pub upload_max_increment: Option<f64>,
    /// Largest video accepted by the upload form
    pub max_upload_bytes: Option<u64>,
}

impl SiteConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "sciencehelp", "tutor-site")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn contact_reset_delay(&self) -> Duration {
        self.contact_reset_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(CONTACT_RESET_DELAY)
    }

    pub fn upload_tick(&self) -> Duration {
        self.upload_tick_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TICK)
    }

    pub fn upload_max_increment(&self) -> f64 {
        self.upload_max_increment
            .filter(|inc| inc.is_finite() && *inc > 0.0)
            .unwrap_or(DEFAULT_MAX_INCREMENT)
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_bytes.unwrap_or(MAX_UPLOAD_BYTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("tutor-site-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert!(config.contact_reset_delay_ms.is_none());
        assert!(config.upload_tick_ms.is_none());
        assert!(config.upload_max_increment.is_none());
        assert!(config.max_upload_bytes.is_none());
    }

    #[test]
    fn test_accessor_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.contact_reset_delay(), Duration::from_millis(3000));
        assert_eq!(config.upload_tick(), Duration::from_millis(500));
        assert_eq!(config.upload_max_increment(), 15.0);
        assert_eq!(config.max_upload_bytes(), 104_857_600);
    }

    #[test]
    fn test_accessor_overrides() {
        let config = SiteConfig {
            contact_reset_delay_ms: Some(1000),
            upload_tick_ms: Some(50),
            upload_max_increment: Some(40.0),
            max_upload_bytes: Some(1024),
        };
        assert_eq!(config.contact_reset_delay(), Duration::from_millis(1000));
        assert_eq!(config.upload_tick(), Duration::from_millis(50));
        assert_eq!(config.upload_max_increment(), 40.0);
        assert_eq!(config.max_upload_bytes(), 1024);
    }

    #[test]
    fn test_nonsense_upload_timings_fall_back() {
        let config = SiteConfig {
            upload_tick_ms: Some(0),
            upload_max_increment: Some(-5.0),
            ..Default::default()
        };
        assert_eq!(config.upload_tick(), DEFAULT_TICK);
        assert_eq!(config.upload_max_increment(), DEFAULT_MAX_INCREMENT);
    }

    #[test]
    fn test_partial_serialization() {
        let config = SiteConfig {
            upload_tick_ms: Some(250),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: SiteConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.upload_tick_ms, Some(250));
        assert!(parsed.contact_reset_delay_ms.is_none());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: SiteConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, SiteConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        let json = r#"{"max_upload_bytes": 2048, "theme": "dark"}"#;
        let parsed: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.max_upload_bytes, Some(2048));
    }

    #[test]
    fn test_save_and_load_file() {
        let path = scratch_path("roundtrip/config.json");
        let config = SiteConfig {
            contact_reset_delay_ms: Some(1500),
            ..Default::default()
        };

        config.save_to(&path).unwrap();
        let loaded = SiteConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_reports_bad_json() {
        let path = scratch_path("broken/config.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let err = SiteConfig::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid config"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_config_path_returns_option() {
        let _path = SiteConfig::config_path();
    }
}
