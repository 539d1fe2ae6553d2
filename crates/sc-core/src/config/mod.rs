//! # Configuration DTO
//!
//! Maps `config.toml` onto plain data. Defaults, environment overrides and
//! directory resolution belong to the bootstrap layer; nothing here decides
//! what a missing value means.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `[api] base_url`; empty when absent
    pub api_base_url: String,

    /// `[api] timeout_secs`; `None` when absent
    pub api_timeout_secs: Option<u64>,

    /// `[storage] data_dir`; `None` when absent
    pub data_dir: Option<PathBuf>,

    /// `[wizard] persist_drafts`
    pub persist_drafts: bool,
}

impl AppConfig {
    /// Create AppConfig from a parsed TOML document.
    ///
    /// Must not validate or compute defaults. A negative timeout is kept out
    /// because it cannot be represented, not because it is judged.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let section = |name: &str, key: &str| toml_value.get(name).and_then(|s| s.get(key));

        Ok(Self {
            api_base_url: section("api", "base_url")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            api_timeout_secs: section("api", "timeout_secs")
                .and_then(|v| v.as_integer())
                .and_then(|secs| u64::try_from(secs).ok()),
            data_dir: section("storage", "data_dir")
                .and_then(|v| v.as_str())
                .map(PathBuf::from),
            persist_drafts: section("wizard", "persist_drafts")
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }

    /// Create an empty AppConfig; every field is "not configured".
    pub fn empty() -> Self {
        Self {
            api_base_url: String::new(),
            api_timeout_secs: None,
            data_dir: None,
            persist_drafts: false,
        }
    }
}
