use crate::config::toml_config::TomlConfig;
use crate::config::{ConfigOverrides, DispatcherConfig};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "logging-middleware")]
#[command(about = "Validate a log record and ship it to the collection endpoint")]
pub struct CliConfig {
    #[arg(long, help = "Deployment tier: backend or frontend")]
    pub stack: String,

    #[arg(long, default_value = "info")]
    pub level: String,

    #[arg(long, help = "Package name permitted for the stack")]
    pub package: String,

    #[arg(long)]
    pub message: String,

    #[arg(long, help = "TOML file with a [logger] table")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub api_url: Option<String>,

    #[arg(long)]
    pub timeout_ms: Option<u64>,

    #[arg(long)]
    pub retries: Option<u32>,

    #[arg(long, help = "Disable the console echo of delivery results")]
    pub quiet: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit console output as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            api_url: self.api_url.clone(),
            timeout_ms: self.timeout_ms,
            retries: self.retries,
            enable_console_logging: self.quiet.then_some(false),
        }
    }

    /// Precedence: defaults < environment < config file < flags.
    pub fn resolve_config(&self) -> Result<DispatcherConfig> {
        let mut overrides = ConfigOverrides::from_env();

        if let Some(path) = &self.config {
            tracing::debug!("Loading logger config from: {}", path.display());
            overrides = overrides.or(TomlConfig::from_file(path)?.overrides());
        }

        Ok(DispatcherConfig::default().merged(overrides.or(self.overrides())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_minimal_arguments() {
        let cli = CliConfig::parse_from([
            "logging-middleware",
            "--stack",
            "backend",
            "--package",
            "db",
            "--message",
            "query slow",
        ]);

        assert_eq!(cli.level, "info");
        assert!(!cli.quiet);
        assert_eq!(cli.overrides(), ConfigOverrides::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[logger]\napi_url = \"https://file.example.com/logs\"\nretries = 4\n")
            .unwrap();

        let path = temp_file.path().to_str().unwrap().to_string();
        let cli = CliConfig::parse_from([
            "logging-middleware",
            "--stack",
            "frontend",
            "--level",
            "warn",
            "--package",
            "page",
            "--message",
            "slow render",
            "--config",
            path.as_str(),
            "--retries",
            "2",
            "--quiet",
        ]);

        let config = cli.resolve_config().unwrap();
        assert_eq!(config.api_url, "https://file.example.com/logs");
        assert_eq!(config.retries, 2);
        assert!(!config.enable_console_logging);
    }
}
