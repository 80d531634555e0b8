use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use dex_search::SearchTiming;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://api.pokefarm.com";
pub const PREFERENCES_DIR_NAME: &str = "pokedex";

/// Runtime configuration for the collaborator client and the search driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DexConfig {
    /// Base URL of the catalog/ownership API
    pub api_base_url: String,

    /// Per-request timeout
    pub request_timeout_ms: u64,

    /// Delay between region expansion and scroll/highlight
    pub search_settle_ms: u64,

    /// How long a search hit stays highlighted
    pub highlight_window_ms: u64,

    /// Lifetime of the stored preference blob
    pub preference_ttl_days: u64,

    /// Where the preference blob lives (defaults to the user config dir)
    pub preferences_dir: Option<PathBuf>,
}

impl Default for DexConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_ms: 10_000,
            search_settle_ms: 350,
            highlight_window_ms: 3_000,
            preference_ttl_days: 365,
            preferences_dir: None,
        }
    }
}

impl DexConfig {
    /// Defaults plus environment overrides.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Reads a TOML config file, then applies environment overrides.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::from_toml_str(&raw)
            .with_context(|| format!("Invalid {}", path.display()))?
            .with_overrides(|key| std::env::var(key).ok());
        config
            .validate()
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("Invalid {}", path.display()))?;
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw).context("Failed to parse config TOML")?;
        Ok(config)
    }

    /// Applies `POKEDEX_*` overrides looked up through `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let millis = |key: &str| {
            non_empty(key)
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|ms| *ms > 0)
        };

        if let Some(url) = non_empty("POKEDEX_API_URL").or_else(|| non_empty("API_URL")) {
            self.api_base_url = url;
        }
        if let Some(ms) = millis("POKEDEX_SEARCH_SETTLE_MS") {
            self.search_settle_ms = ms;
        }
        if let Some(ms) = millis("POKEDEX_HIGHLIGHT_MS") {
            self.highlight_window_ms = ms;
        }
        if let Some(dir) = non_empty("POKEDEX_PREFERENCES_DIR") {
            self.preferences_dir = Some(PathBuf::from(dir));
        }
        self
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        let base = self.api_base_url.trim();
        if base.is_empty() {
            return Err("api_base_url must not be empty".to_string());
        }
        if reqwest::Url::parse(base).is_err() {
            return Err(format!("api_base_url is not a valid URL: {base}"));
        }
        if self.request_timeout_ms == 0 {
            return Err("request_timeout_ms must be > 0".to_string());
        }
        if self.search_settle_ms == 0 || self.highlight_window_ms == 0 {
            return Err("search timings must be > 0".to_string());
        }
        if self.preference_ttl_days == 0 {
            return Err("preference_ttl_days must be > 0".to_string());
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn preference_ttl(&self) -> Duration {
        Duration::from_secs(self.preference_ttl_days * 24 * 60 * 60)
    }

    pub fn search_timing(&self) -> SearchTiming {
        SearchTiming {
            settle_delay: Duration::from_millis(self.search_settle_ms),
            highlight_window: Duration::from_millis(self.highlight_window_ms),
        }
    }

    pub fn resolve_preferences_dir(&self) -> PathBuf {
        if let Some(dir) = &self.preferences_dir {
            return dir.clone();
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(PREFERENCES_DIR_NAME)
    }
}
