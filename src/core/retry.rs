use std::time::Duration;

/// Exponential backoff between delivery attempts: 1s, 2s, 4s, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffPolicy {
    pub base_delay: Duration,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            base_delay: Duration::from_secs(1),
        }
    }
}

impl BackoffPolicy {
    /// Delay to wait after the failed attempt with zero-based `attempt_index`.
    pub fn delay_for(&self, attempt_index: u32) -> Duration {
        let multiplier = 2_u32.saturating_pow(attempt_index);
        self.base_delay.saturating_mul(multiplier)
    }
}
