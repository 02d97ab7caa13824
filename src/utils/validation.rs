use crate::utils::error::{MiddlewareError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: String) -> MiddlewareError {
    MiddlewareError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason,
    }
}

/// Accepts absolute `http`/`https` endpoints only.
pub fn validate_endpoint(field: &str, endpoint: &str) -> Result<()> {
    if endpoint.is_empty() {
        return Err(invalid(field, endpoint, "endpoint cannot be empty".to_string()));
    }
    let url = Url::parse(endpoint)
        .map_err(|e| invalid(field, endpoint, format!("not an absolute URL: {}", e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(field, endpoint, format!("scheme {} is not http(s)", scheme))),
    }
}

pub fn validate_bounds(field: &str, value: u64, min: u64, max: u64) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(invalid(field, value, format!("expected {}..={}", min, max)));
    }
    Ok(())
}
