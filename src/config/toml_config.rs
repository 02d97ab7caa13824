use crate::config::{ConfigOverrides, DispatcherConfig};
use crate::utils::error::{MiddlewareError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file layout:
///
/// ```toml
/// [logger]
/// api_url = "${LOG_API_URL}"
/// timeout_ms = 2000
/// retries = 5
/// enable_console_logging = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub logger: ConfigOverrides,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with its value; undefined variables are left as is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MiddlewareError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn overrides(&self) -> ConfigOverrides {
        self.logger.clone()
    }

    pub fn to_dispatcher_config(&self) -> DispatcherConfig {
        DispatcherConfig::default().merged(self.overrides())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.to_dispatcher_config().validate()
    }
}
