use crate::domain::model::{LogRecord, LogResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

/// One network round-trip for a single log record.
///
/// Implementations only send; the per-attempt deadline and the retry loop
/// belong to the dispatcher, which drops the returned future on timeout.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, endpoint: &str, record: &LogRecord) -> Result<LogResponse>;
}
