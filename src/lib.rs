pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::{ConfigOverrides, DispatcherConfig};
pub use crate::core::dispatcher::{
    create_dispatcher, default_dispatcher, log, log_debug, log_error, log_fatal, log_info,
    log_warn, update_dispatcher_config, LogDispatcher,
};
pub use crate::core::transport::HttpTransport;
pub use crate::core::validator::{
    validate, validate_level, validate_log_parameters, validate_package, validate_stack,
    ValidationError, ValidationReport,
};
pub use crate::domain::model::{DeliveryOutcome, Level, LogRecord, LogResponse, Stack};
pub use crate::domain::ports::Transport;
pub use crate::domain::taxonomy::{
    allowed_packages, BACKEND_PACKAGES, FRONTEND_PACKAGES, SHARED_PACKAGES, VALID_LEVELS,
    VALID_STACKS,
};
pub use crate::utils::error::{MiddlewareError, Result};
