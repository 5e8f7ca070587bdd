use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tracing::{info, warn};

/// Exponential backoff policy for startup operations (connecting to the database)
///
/// Delays start at `initial_delay`, double after every failed retry and never
/// exceed `max_delay`. With jitter each delay is scaled into 50-100%.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub use_jitter: bool,
}

impl Default for RetryConfig {
    /// 3 retries, 100ms first delay, 5s cap, jittered
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(5),
            use_jitter: true,
        }
    }
}

impl RetryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.use_jitter = false;
        self
    }

    /// Nominal delay before retry number `retry` (1-based)
    pub fn delay_for(&self, retry: u32) -> Duration {
        let doublings = retry.saturating_sub(1).min(31);
        self.initial_delay
            .checked_mul(1 << doublings)
            .map_or(self.max_delay, |delay| delay.min(self.max_delay))
    }

    fn sleep_before(&self, retry: u32) -> Duration {
        let delay = self.delay_for(retry);
        if self.use_jitter {
            delay.mul_f64(jitter_factor())
        } else {
            delay
        }
    }
}

/// Pseudo-random factor in [0.5, 1.0]
fn jitter_factor() -> f64 {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let sample = RandomState::new().hash_one(std::time::SystemTime::now()) % 51;
    0.5 + sample as f64 / 100.0
}

/// Run `operation` until it succeeds or `config.max_retries` retries are spent
///
/// Returns the last error when every attempt fails.
///
/// # Example
/// ```ignore
/// use database::common::{RetryConfig, retry_with_backoff};
///
/// let db = retry_with_backoff(
///     || database::postgres::connect(config.clone()),
///     RetryConfig::new().with_max_retries(5),
/// )
/// .await?;
/// ```
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut retry = 0;

    loop {
        let error = match operation().await {
            Ok(value) => {
                if retry > 0 {
                    info!(retries = retry, "Operation succeeded after retrying");
                }
                return Ok(value);
            }
            Err(error) => error,
        };

        if retry == config.max_retries {
            warn!(attempts = retry + 1, %error, "Giving up");
            return Err(error);
        }

        retry += 1;
        let delay = config.sleep_before(retry);
        warn!(retry, max_retries = config.max_retries, ?delay, %error, "Operation failed, retrying");
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn quick(max_retries: u32) -> RetryConfig {
        RetryConfig::new()
            .with_max_retries(max_retries)
            .with_initial_delay(Duration::from_millis(2))
            .without_jitter()
    }

    /// Fails with "refused N" for the first `failures` calls
    fn flaky(
        calls: Arc<AtomicU32>,
        failures: u32,
    ) -> impl FnMut() -> std::future::Ready<Result<&'static str, String>> {
        move || {
            let call = calls.fetch_add(1, Ordering::SeqCst) + 1;
            std::future::ready(if call <= failures {
                Err(format!("refused {}", call))
            } else {
                Ok("connected")
            })
        }
    }

    #[tokio::test]
    async fn test_first_success_runs_once() {
        let calls = Arc::new(AtomicU32::new(0));
        let result = retry_with_backoff(flaky(calls.clone(), 0), quick(3)).await;

        assert_eq!(result.unwrap(), "connected");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_recovers_within_budget() {
        let calls = Arc::new(AtomicU32::new(0));
        let result = retry_with_backoff(flaky(calls.clone(), 2), quick(3)).await;

        assert_eq!(result.unwrap(), "connected");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_exhausted_budget_returns_last_error() {
        let calls = Arc::new(AtomicU32::new(0));
        let result = retry_with_backoff(flaky(calls.clone(), u32::MAX), quick(2)).await;

        assert_eq!(result.unwrap_err(), "refused 3");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_delay_doubles_up_to_cap() {
        let config = RetryConfig::new()
            .with_initial_delay(Duration::from_millis(100))
            .with_max_delay(Duration::from_millis(300));

        let delays: Vec<_> = (1..=4).map(|retry| config.delay_for(retry)).collect();
        assert_eq!(
            delays,
            [100, 200, 300, 300].map(Duration::from_millis).to_vec()
        );
        assert_eq!(config.delay_for(u32::MAX), Duration::from_millis(300));
    }

    #[test]
    fn test_jitter_stays_within_half_to_full() {
        let config = RetryConfig::new().with_initial_delay(Duration::from_secs(1));
        for _ in 0..20 {
            let delay = config.sleep_before(1);
            assert!(delay >= Duration::from_millis(500) && delay <= Duration::from_secs(1));
        }
    }
}
