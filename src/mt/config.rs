//! Service configuration
//!
//! Resolution order: built-in defaults, then an optional TOML file, then environment
//! variables. Unknown TOML keys are rejected so typos surface at startup.
//!
//! ```toml
//! provider = "google"
//! cache_size = 1000
//! provider_timeout_ms = 10000
//! max_batch_concurrency = 16
//! bind_addr = "0.0.0.0:3000"
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::mt::cache::MAX_CACHE_SIZE;
use crate::mt::error::{MtError, MtResult};
use crate::mt::service::DEFAULT_PROVIDER_TIMEOUT;

pub const ENV_PROVIDER: &str = "TRANSLATE_PROVIDER";
pub const ENV_API_KEY: &str = "GOOGLE_TRANSLATE_API_KEY";
pub const ENV_BASE_URL: &str = "GOOGLE_TRANSLATE_BASE_URL";
pub const ENV_CACHE_SIZE: &str = "TRANSLATE_CACHE_SIZE";
pub const ENV_PROVIDER_TIMEOUT_MS: &str = "TRANSLATE_PROVIDER_TIMEOUT_MS";
pub const ENV_MAX_BATCH_CONCURRENCY: &str = "TRANSLATE_MAX_BATCH_CONCURRENCY";
pub const ENV_BIND_ADDR: &str = "TRANSLATE_BIND_ADDR";

/// Which backend performs translations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Google,
    Mock,
}

impl std::str::FromStr for ProviderKind {
    type Err = MtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(ProviderKind::Google),
            "mock" => Ok(ProviderKind::Mock),
            other => Err(MtError::ConfigError(format!(
                "Unknown provider '{}', expected 'google' or 'mock'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TranslateConfig {
    pub provider: ProviderKind,
    pub google_api_key: Option<String>,
    pub google_base_url: Option<String>,
    pub cache_size: usize,
    pub provider_timeout_ms: u64,
    /// Unbounded when absent
    pub max_batch_concurrency: Option<usize>,
    pub bind_addr: String,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Google,
            google_api_key: None,
            google_base_url: None,
            cache_size: MAX_CACHE_SIZE,
            provider_timeout_ms: DEFAULT_PROVIDER_TIMEOUT.as_millis() as u64,
            max_batch_concurrency: None,
            bind_addr: "127.0.0.1:3000".to_string(),
        }
    }
}

impl TranslateConfig {
    /// Parse a TOML document; missing keys take their defaults
    pub fn from_toml_str(content: &str) -> MtResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| MtError::ConfigError(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> MtResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MtError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Defaults overridden by the environment
    pub fn from_env() -> MtResult<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Optional file, then environment overrides
    pub fn load(path: Option<&Path>) -> MtResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    pub fn apply_env(&mut self) -> MtResult<()> {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) -> MtResult<()> {
        if let Some(provider) = var(ENV_PROVIDER) {
            self.provider = provider.parse()?;
        }
        if let Some(key) = var(ENV_API_KEY).filter(|k| !k.trim().is_empty()) {
            self.google_api_key = Some(key);
        }
        if let Some(url) = var(ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
            self.google_base_url = Some(url);
        }
        if let Some(size) = var(ENV_CACHE_SIZE) {
            self.cache_size = parse_number(ENV_CACHE_SIZE, &size)?;
        }
        if let Some(ms) = var(ENV_PROVIDER_TIMEOUT_MS) {
            self.provider_timeout_ms = parse_number(ENV_PROVIDER_TIMEOUT_MS, &ms)?;
        }
        if let Some(limit) = var(ENV_MAX_BATCH_CONCURRENCY) {
            let limit: usize = parse_number(ENV_MAX_BATCH_CONCURRENCY, &limit)?;
            self.max_batch_concurrency = (limit > 0).then_some(limit);
        }
        if let Some(addr) = var(ENV_BIND_ADDR).filter(|a| !a.trim().is_empty()) {
            self.bind_addr = addr;
        }
        self.validate()
    }

    /// A zero timeout would fail, and negatively cache, every provider call
    fn validate(&self) -> MtResult<()> {
        if self.provider_timeout_ms == 0 {
            return Err(MtError::ConfigError(
                "provider_timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_millis(self.provider_timeout_ms)
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> MtResult<T> {
    value.trim().parse().map_err(|_| {
        MtError::ConfigError(format!("{} must be a non-negative integer, got '{}'", name, value))
    })
}
