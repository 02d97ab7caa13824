//! Log dispatcher: validation, delivery and the bounded retry loop.
//!
//! Each `log` call walks the same path:
//!
//! ```text
//! Validating ─┬─> Rejected
//!             └─> Attempting(1) ─┬─> Succeeded
//!                                ├─> Attempting(n + 1)   (after 2^(n-1) s backoff)
//!                                └─> Exhausted           (n == max attempts,
//!                                                         or a non-retryable error)
//! ```
//!
//! `Rejected` and `Exhausted` both resolve to `None`; only the console echo
//! tells them apart.

use crate::config::{ConfigOverrides, DispatcherConfig};
use crate::core::retry::BackoffPolicy;
use crate::core::transport::HttpTransport;
use crate::core::validator;
use crate::domain::model::{DeliveryOutcome, Level, LogRecord, LogResponse};
use crate::domain::ports::Transport;
use crate::utils::error::{MiddlewareError, Result};
use std::sync::{Arc, OnceLock, RwLock};

pub struct LogDispatcher {
    config: RwLock<DispatcherConfig>,
    transport: Arc<dyn Transport>,
    backoff: BackoffPolicy,
}

impl LogDispatcher {
    pub fn new(config: DispatcherConfig) -> Self {
        Self::with_transport(config, Arc::new(HttpTransport::new()))
    }

    pub fn with_transport(config: DispatcherConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: RwLock::new(config),
            transport,
            backoff: BackoffPolicy::default(),
        }
    }

    /// Copy of the current configuration.
    pub fn config(&self) -> DispatcherConfig {
        match self.config.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Merges `overrides` into the configuration. Calls already in flight keep
    /// the snapshot they started with.
    pub fn update_config(&self, overrides: ConfigOverrides) {
        let mut guard = match self.config.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.merge(overrides);
    }

    pub async fn log(
        &self,
        stack: &str,
        level: &str,
        package: &str,
        message: &str,
    ) -> DeliveryOutcome {
        let config = self.config();

        let record = match validator::validate(stack, level, package, message) {
            Ok(record) => record,
            Err(e) => {
                if config.enable_console_logging {
                    tracing::error!("{}", MiddlewareError::from(e));
                }
                return None;
            }
        };

        match self.deliver(&record, &config).await {
            Ok(response) => Some(response),
            Err(e) => {
                if config.enable_console_logging {
                    tracing::error!("All log attempts failed: {}", e);
                }
                None
            }
        }
    }

    pub async fn debug(&self, stack: &str, package: &str, message: &str) -> DeliveryOutcome {
        self.log(stack, Level::Debug.as_str(), package, message).await
    }

    pub async fn info(&self, stack: &str, package: &str, message: &str) -> DeliveryOutcome {
        self.log(stack, Level::Info.as_str(), package, message).await
    }

    pub async fn warn(&self, stack: &str, package: &str, message: &str) -> DeliveryOutcome {
        self.log(stack, Level::Warn.as_str(), package, message).await
    }

    pub async fn error(&self, stack: &str, package: &str, message: &str) -> DeliveryOutcome {
        self.log(stack, Level::Error.as_str(), package, message).await
    }

    pub async fn fatal(&self, stack: &str, package: &str, message: &str) -> DeliveryOutcome {
        self.log(stack, Level::Fatal.as_str(), package, message).await
    }

    /// Runs the retry loop and returns the last transport error on exhaustion.
    /// Errors that another attempt cannot fix end the loop immediately.
    async fn deliver(&self, record: &LogRecord, config: &DispatcherConfig) -> Result<LogResponse> {
        let max_attempts = config.max_attempts();
        let mut attempt: u32 = 0;

        loop {
            match self.attempt(record, config).await {
                Ok(response) => {
                    if config.enable_console_logging {
                        tracing::info!("Log sent successfully: {}", response.log_id);
                    }
                    return Ok(response);
                }
                Err(e) => {
                    if config.enable_console_logging {
                        tracing::warn!("Log attempt {} failed: {}", attempt + 1, e);
                    }
                    if !e.is_retryable() || attempt + 1 >= max_attempts {
                        return Err(e);
                    }
                    tokio::time::sleep(self.backoff.delay_for(attempt)).await;
                    attempt += 1;
                }
            }
        }
    }

    /// One request bounded by `timeout_ms`. On expiry the request future is
    /// dropped, which aborts the in-flight call and releases its timer.
    async fn attempt(&self, record: &LogRecord, config: &DispatcherConfig) -> Result<LogResponse> {
        let send = self.transport.send(&config.api_url, record);
        match tokio::time::timeout(config.timeout(), send).await {
            Ok(result) => result,
            Err(_) => Err(MiddlewareError::Timeout {
                timeout_ms: config.timeout_ms,
            }),
        }
    }
}

impl Default for LogDispatcher {
    fn default() -> Self {
        Self::new(DispatcherConfig::default())
    }
}

static DEFAULT_DISPATCHER: OnceLock<LogDispatcher> = OnceLock::new();

/// Process-wide dispatcher, built with the default configuration on first use.
pub fn default_dispatcher() -> &'static LogDispatcher {
    DEFAULT_DISPATCHER.get_or_init(LogDispatcher::default)
}

/// Builds an independent dispatcher; its configuration is not shared with
/// the default instance.
pub fn create_dispatcher(overrides: ConfigOverrides) -> LogDispatcher {
    LogDispatcher::new(DispatcherConfig::default().merged(overrides))
}

pub fn update_dispatcher_config(overrides: ConfigOverrides) {
    default_dispatcher().update_config(overrides);
}

pub async fn log(stack: &str, level: &str, package: &str, message: &str) -> DeliveryOutcome {
    default_dispatcher().log(stack, level, package, message).await
}

pub async fn log_debug(stack: &str, package: &str, message: &str) -> DeliveryOutcome {
    default_dispatcher().debug(stack, package, message).await
}

pub async fn log_info(stack: &str, package: &str, message: &str) -> DeliveryOutcome {
    default_dispatcher().info(stack, package, message).await
}

pub async fn log_warn(stack: &str, package: &str, message: &str) -> DeliveryOutcome {
    default_dispatcher().warn(stack, package, message).await
}

pub async fn log_error(stack: &str, package: &str, message: &str) -> DeliveryOutcome {
    default_dispatcher().error(stack, package, message).await
}

pub async fn log_fatal(stack: &str, package: &str, message: &str) -> DeliveryOutcome {
    default_dispatcher().fatal(stack, package, message).await
}
