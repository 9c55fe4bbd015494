//! Configuration handling for the TUI

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the log filter
pub const LOG_ENV: &str = "REGISTRATION_TUI_LOG";

/// Filter used when neither the environment nor the config file sets one
pub const DEFAULT_LOG_FILTER: &str = "registration_tui=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// tracing filter directive
    pub log_filter: Option<String>,
    /// Pretty-print submissions written by the log sink
    pub pretty_submissions: Option<bool>,
    /// Require a second Esc before quitting with unsent input
    pub confirm_quit: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "registration", "registration-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory the log file is written to: the platform data dir, or the
    /// system temp dir when no home directory can be resolved
    pub fn log_dir() -> PathBuf {
        ProjectDirs::from("io", "registration", "registration-tui")
            .map(|dirs| dirs.data_dir().join("logs"))
            .unwrap_or_else(|| std::env::temp_dir().join("registration-tui"))
    }

    /// Load configuration from the platform config dir
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file, defaulting when it is absent
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, content).map_err(io_err)
    }

    /// Log filter, with the environment taking precedence over the file
    pub fn log_filter(&self, env_override: Option<String>) -> String {
        env_override
            .filter(|f| !f.trim().is_empty())
            .or_else(|| self.log_filter.clone())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    }

    pub fn pretty_submissions(&self) -> bool {
        self.pretty_submissions.unwrap_or(false)
    }

    pub fn confirm_quit(&self) -> bool {
        self.confirm_quit.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("registration-tui-test-{}-{name}", std::process::id()))
            .join("config.json")
    }

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.log_filter.is_none());
        assert!(!config.pretty_submissions());
        assert!(config.confirm_quit());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.pretty_submissions.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"pretty_submissions": true, "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.pretty_submissions());
    }

    #[test]
    fn test_log_filter_precedence() {
        let config = TuiConfig {
            log_filter: Some("registration_tui=debug".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.log_filter(Some("warn".to_string())),
            "warn".to_string()
        );
        assert_eq!(config.log_filter(None), "registration_tui=debug");
        assert_eq!(config.log_filter(Some("  ".to_string())), "registration_tui=debug");
        assert_eq!(TuiConfig::default().log_filter(None), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let path = temp_config_path("missing");
        let config = TuiConfig::load_from(&path).unwrap();
        assert!(config.confirm_quit.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_config_path("roundtrip");
        let config = TuiConfig {
            log_filter: Some("trace".to_string()),
            pretty_submissions: Some(true),
            confirm_quit: Some(false),
        };
        config.save_to(&path).unwrap();

        let loaded = TuiConfig::load_from(&path).unwrap();
        assert_eq!(loaded.log_filter.as_deref(), Some("trace"));
        assert!(loaded.pretty_submissions());
        assert!(!loaded.confirm_quit());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let path = temp_config_path("invalid");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let err = TuiConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = TuiConfig::config_path();
    }

    #[test]
    fn test_log_dir_differs_from_config_dir() {
        let dir = TuiConfig::log_dir();
        assert!(dir.is_absolute());
        if let Some(config_path) = TuiConfig::config_path() {
            assert_ne!(Some(dir.as_path()), config_path.parent());
        }
    }
}
