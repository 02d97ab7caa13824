use crate::domain::model::{LogRecord, LogResponse};
use crate::domain::ports::Transport;
use crate::utils::error::{MiddlewareError, Result};
use crate::utils::validation::validate_endpoint;
use async_trait::async_trait;
use reqwest::Client;

/// POSTs one record as JSON to the collection endpoint.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, endpoint: &str, record: &LogRecord) -> Result<LogResponse> {
        validate_endpoint("api_url", endpoint)?;
        tracing::debug!("Sending log record to: {}", endpoint);

        // json() sets Content-Type: application/json
        let response = self.client.post(endpoint).json(record).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(MiddlewareError::StatusError {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.bytes().await?;
        let parsed: LogResponse = serde_json::from_slice(&body)?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Level, Stack};

    fn record() -> LogRecord {
        LogRecord {
            stack: Stack::Backend,
            level: Level::Info,
            package: "db".to_string(),
            message: "x".to_string(),
        }
    }

    #[tokio::test]
    async fn test_relative_endpoint_is_rejected_before_sending() {
        let transport = HttpTransport::new();
        let err = transport
            .send("/evaluation-service/logs", &record())
            .await
            .unwrap_err();

        assert!(matches!(err, MiddlewareError::InvalidConfigValueError { .. }));
        assert!(!err.is_retryable());
    }
}
