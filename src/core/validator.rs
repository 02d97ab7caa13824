//! Parameter validation for log records.
//!
//! Every function here is pure: no I/O, no shared state, so it can be called
//! from any number of tasks at once. Inputs are compared case-insensitively
//! and the accepted record is returned lowercased.

use crate::domain::model::{Level, LogRecord, Stack};
use crate::domain::taxonomy::{
    allowed_packages, BACKEND_PACKAGES, FRONTEND_PACKAGES, SHARED_PACKAGES, VALID_LEVELS,
    VALID_STACKS,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing parameter: all parameters (stack, level, package, message) are required")]
    MissingParameter,

    #[error("invalid stack \"{stack}\": must be one of {}", VALID_STACKS.join(", "))]
    InvalidStack { stack: String },

    #[error("invalid level \"{level}\": must be one of {}", VALID_LEVELS.join(", "))]
    InvalidLevel { level: String },

    #[error(
        "invalid package for stack: \"{package}\" is not permitted for stack \"{stack}\". Allowed packages: {}",
        .allowed.join(", ")
    )]
    InvalidPackage {
        package: String,
        stack: String,
        allowed: Vec<&'static str>,
    },
}

/// Boolean-style verdict with an optional human readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub reason: Option<String>,
}

pub fn validate_stack(stack: &str) -> bool {
    stack.parse::<Stack>().is_ok()
}

pub fn validate_level(level: &str) -> bool {
    level.parse::<Level>().is_ok()
}

pub fn validate_package(package: &str, stack: &str) -> bool {
    let package = package.to_lowercase();
    let package = package.as_str();

    if SHARED_PACKAGES.contains(&package) {
        return true;
    }

    match stack.parse::<Stack>() {
        Ok(Stack::Backend) => BACKEND_PACKAGES.contains(&package),
        Ok(Stack::Frontend) => FRONTEND_PACKAGES.contains(&package),
        Err(()) => false,
    }
}

/// Checks the four parameters in order and builds the normalized record.
///
/// The first violated rule wins: missing parameter, then stack, level and
/// package.
pub fn validate(
    stack: &str,
    level: &str,
    package: &str,
    message: &str,
) -> Result<LogRecord, ValidationError> {
    if stack.is_empty() || level.is_empty() || package.is_empty() || message.is_empty() {
        return Err(ValidationError::MissingParameter);
    }

    let stack_name = stack.to_lowercase();
    let level_name = level.to_lowercase();
    let package_name = package.to_lowercase();

    let parsed_stack = stack_name
        .parse::<Stack>()
        .map_err(|_| ValidationError::InvalidStack {
            stack: stack_name.clone(),
        })?;

    let parsed_level = level_name
        .parse::<Level>()
        .map_err(|_| ValidationError::InvalidLevel {
            level: level_name.clone(),
        })?;

    if !validate_package(&package_name, &stack_name) {
        return Err(ValidationError::InvalidPackage {
            allowed: allowed_packages(&stack_name),
            package: package_name,
            stack: stack_name,
        });
    }

    Ok(LogRecord {
        stack: parsed_stack,
        level: parsed_level,
        package: package_name,
        message: message.to_lowercase(),
    })
}

pub fn validate_log_parameters(
    stack: &str,
    level: &str,
    package: &str,
    message: &str,
) -> ValidationReport {
    match validate(stack, level, package, message) {
        Ok(_) => ValidationReport {
            valid: true,
            reason: None,
        },
        Err(e) => ValidationReport {
            valid: false,
            reason: Some(e.to_string()),
        },
    }
}
