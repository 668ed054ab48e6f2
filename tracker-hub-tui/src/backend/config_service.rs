//! Config file service

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use tracker_hub_backend::DEFAULT_BASE_URL;

use crate::view::theme::Theme;

const APP_DIR: &str = "tracker-hub";
const CONFIG_FILE: &str = "config.json";

/// Application config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Backend origin
    pub backend_url: String,
    /// Language code, `es-ES` or `en-US`
    pub language: String,
    pub theme: Theme,
    /// `tracing` filter directive for the log file
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BASE_URL.to_string(),
            language: "es-ES".to_string(),
            theme: Theme::Dark,
            log_level: "info".to_string(),
        }
    }
}

/// Config service trait
pub trait ConfigService: Send + Sync {
    /// Loads the config; defaults when nothing is stored yet.
    fn load(&self) -> Result<AppConfig>;

    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// JSON config file under the user's config directory.
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// `<config_dir>/tracker-hub/config.json`
    pub fn new() -> Result<Self> {
        let base = dirs::config_dir().context("no config directory for this platform")?;
        Ok(Self::with_path(base.join(APP_DIR).join(CONFIG_FILE)))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the config file (and the log file).
    pub fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("invalid config file {}", self.path.display()))
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        let raw = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_in(dir: &tempfile::TempDir) -> LocalConfigService {
        LocalConfigService::with_path(dir.path().join(APP_DIR).join(CONFIG_FILE))
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = service_in(&dir).load().unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.backend_url, "http://localhost:8080");
        assert_eq!(config.language, "es-ES");
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(&dir);
        let config = AppConfig {
            backend_url: "http://tracker.internal:9000".into(),
            language: "en-US".into(),
            theme: Theme::Light,
            log_level: "debug".into(),
        };

        service.save(&config).unwrap();

        assert!(service.path().exists());
        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(&dir);
        fs::create_dir_all(service.dir().unwrap()).unwrap();
        fs::write(service.path(), r#"{"backendUrl": "http://10.0.0.5:8080"}"#).unwrap();

        let config = service.load().unwrap();

        assert_eq!(config.backend_url, "http://10.0.0.5:8080");
        assert_eq!(config.language, "es-ES");
        assert_eq!(config.theme, Theme::Dark);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(&dir);
        fs::create_dir_all(service.dir().unwrap()).unwrap();
        fs::write(service.path(), "not json").unwrap();

        let err = service.load().unwrap_err();
        assert!(err.to_string().contains("invalid config file"));
    }
}
