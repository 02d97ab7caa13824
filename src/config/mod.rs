#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_bounds, validate_endpoint, Validate};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://20.244.56.144/evaluation-service/logs";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_RETRIES: u32 = 3;

const MAX_TIMEOUT_MS: u64 = 300_000;

/// Configuration owned by a single dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
    pub api_url: String,
    pub timeout_ms: u64,
    pub retries: u32,
    pub enable_console_logging: bool,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            retries: DEFAULT_RETRIES,
            enable_console_logging: true,
        }
    }
}

/// Partial configuration; `None` fields keep the current value on merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub api_url: Option<String>,
    pub timeout_ms: Option<u64>,
    pub retries: Option<u32>,
    pub enable_console_logging: Option<bool>,
}

impl ConfigOverrides {
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = Some(retries);
        self
    }

    pub fn enable_console_logging(mut self, enabled: bool) -> Self {
        self.enable_console_logging = Some(enabled);
        self
    }

    /// Later overrides win field by field.
    pub fn or(self, other: ConfigOverrides) -> ConfigOverrides {
        ConfigOverrides {
            api_url: other.api_url.or(self.api_url),
            timeout_ms: other.timeout_ms.or(self.timeout_ms),
            retries: other.retries.or(self.retries),
            enable_console_logging: other.enable_console_logging.or(self.enable_console_logging),
        }
    }

    /// Reads LOG_API_URL, LOG_TIMEOUT_MS, LOG_RETRIES and LOG_CONSOLE.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as `from_env`, with variables resolved through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_url: lookup("LOG_API_URL").filter(|v| !v.is_empty()),
            timeout_ms: parse_var(&lookup, "LOG_TIMEOUT_MS", |v| v.parse().ok()),
            retries: parse_var(&lookup, "LOG_RETRIES", |v| v.parse().ok()),
            enable_console_logging: parse_var(&lookup, "LOG_CONSOLE", parse_bool),
        }
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = lookup(name)?;
    let parsed = parse(raw.trim());
    if parsed.is_none() {
        tracing::warn!("Ignoring unparsable {}={:?}, keeping default", name, raw);
    }
    parsed
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl DispatcherConfig {
    pub fn from_env() -> Self {
        Self::default().merged(ConfigOverrides::from_env())
    }

    pub fn merge(&mut self, overrides: ConfigOverrides) {
        if let Some(api_url) = overrides.api_url {
            self.api_url = api_url;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.timeout_ms = timeout_ms;
        }
        if let Some(retries) = overrides.retries {
            self.retries = retries;
        }
        if let Some(enabled) = overrides.enable_console_logging {
            self.enable_console_logging = enabled;
        }
    }

    pub fn merged(mut self, overrides: ConfigOverrides) -> Self {
        self.merge(overrides);
        self
    }

    /// Per-attempt deadline, never shorter than 1 ms.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.max(1))
    }

    /// At least one delivery attempt is always made.
    pub fn max_attempts(&self) -> u32 {
        self.retries.max(1)
    }
}

impl Validate for DispatcherConfig {
    fn validate(&self) -> Result<()> {
        validate_endpoint("api_url", &self.api_url)?;
        validate_bounds("timeout_ms", self.timeout_ms, 1, MAX_TIMEOUT_MS)?;
        validate_bounds("retries", u64::from(self.retries), 1, u64::from(u32::MAX))?;
        Ok(())
    }
}
