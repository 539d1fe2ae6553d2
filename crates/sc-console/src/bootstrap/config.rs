//! # Configuration loading
//!
//! Two stages, kept apart:
//!
//! 1. [`load_config`] reads `config.toml` into the [`AppConfig`] DTO and
//!    accepts whatever the file says.
//! 2. [`resolve_config`] applies environment overrides and defaults, and
//!    resolves platform directories.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use sc_core::config::AppConfig;
use tracing::debug;

pub const APP_DIR_NAME: &str = "surplus-portal";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_API_BASE_URL: &str = "SC_API_BASE_URL";
pub const ENV_DATA_DIR: &str = "SC_DATA_DIR";

/// Load configuration from a TOML file.
///
/// Empty strings and missing sections are kept as they are; deciding what
/// they mean is [`resolve_config`]'s job.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Like [`load_config`], but a file that does not exist yields an empty
/// config instead of an error.
pub fn load_config_or_empty(config_path: &Path) -> anyhow::Result<AppConfig> {
    if !config_path.exists() {
        debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(AppConfig::empty());
    }
    load_config(config_path)
}

/// `<config_dir>/surplus-portal/config.toml`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join("config.toml"))
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(format!(".{APP_DIR_NAME}")))
}

/// Settings the rest of the program runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub api_timeout: Duration,
    pub data_dir: PathBuf,
    pub persist_drafts: bool,
}

impl ResolvedConfig {
    pub fn logs_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}

/// Applies environment overrides and defaults to a loaded config.
///
/// `env` looks up a variable by name; blank values count as unset.
/// Precedence: environment, then file, then built-in default.
pub fn resolve_config<F>(config: &AppConfig, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| env(key).filter(|value| !value.trim().is_empty());

    let api_base_url = lookup(ENV_API_BASE_URL)
        .or_else(|| Some(config.api_base_url.clone()).filter(|url| !url.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

    let data_dir = lookup(ENV_DATA_DIR)
        .map(PathBuf::from)
        .or_else(|| config.data_dir.clone())
        .unwrap_or_else(default_data_dir);

    let timeout_secs = config
        .api_timeout_secs
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    ResolvedConfig {
        api_base_url,
        api_timeout: Duration::from_secs(timeout_secs),
        data_dir,
        persist_drafts: config.persist_drafts,
    }
}

/// Loads `.env`, reads the config file and resolves it against the process
/// environment.
pub fn load_resolved(config_path: Option<&Path>) -> anyhow::Result<ResolvedConfig> {
    // A missing .env is normal.
    let _ = dotenvy::dotenv();

    let config = match config_path {
        Some(path) => load_config(path)?,
        None => match default_config_path() {
            Some(path) => load_config_or_empty(&path)?,
            None => AppConfig::empty(),
        },
    };
    Ok(resolve_config(&config, |key| std::env::var(key).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn load_config_reads_all_sections() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [api]
            base_url = "https://portal.example.com"
            timeout_secs = 10

            [storage]
            data_dir = "/tmp/portal"

            [wizard]
            persist_drafts = true
            "#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();

        assert_eq!(config.api_base_url, "https://portal.example.com");
        assert_eq!(config.api_timeout_secs, Some(10));
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/portal")));
        assert!(config.persist_drafts);
    }

    #[test]
    fn load_config_rejects_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[api\nbase_url = ").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn missing_file_is_an_error_for_explicit_path_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(load_config(&path).is_err());
        assert_eq!(load_config_or_empty(&path).unwrap(), AppConfig::empty());
    }

    #[test]
    fn empty_config_resolves_to_defaults() {
        let resolved = resolve_config(&AppConfig::empty(), no_env);

        assert_eq!(resolved.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(resolved.api_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(resolved.data_dir, default_data_dir());
        assert!(!resolved.persist_drafts);
    }

    #[test]
    fn environment_overrides_file_values() {
        let config = AppConfig {
            api_base_url: "http://from-file".into(),
            api_timeout_secs: Some(5),
            data_dir: Some(PathBuf::from("/from/file")),
            persist_drafts: true,
        };
        let env = |key: &str| match key {
            ENV_API_BASE_URL => Some("http://from-env".to_string()),
            ENV_DATA_DIR => Some("/from/env".to_string()),
            _ => None,
        };

        let resolved = resolve_config(&config, env);

        assert_eq!(resolved.api_base_url, "http://from-env");
        assert_eq!(resolved.data_dir, PathBuf::from("/from/env"));
        assert_eq!(resolved.api_timeout, Duration::from_secs(5));
        assert!(resolved.persist_drafts);
        assert_eq!(resolved.logs_dir(), PathBuf::from("/from/env/logs"));
    }

    #[test]
    fn blank_values_fall_through() {
        let config = AppConfig {
            api_base_url: "  ".into(),
            api_timeout_secs: Some(0),
            ..AppConfig::empty()
        };
        let env = |_: &str| Some(String::new());

        let resolved = resolve_config(&config, env);

        assert_eq!(resolved.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(resolved.api_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
