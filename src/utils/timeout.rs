use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;
use tracing::error;

use crate::errors::{Result, SwapError};

/// Execute a future, failing with `SwapError::Timeout` once `duration` elapses
pub async fn with_timeout<F, T>(
    future: F,
    duration: Duration,
    operation_name: &str,
) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match timeout(duration, future).await {
        Ok(result) => result,
        Err(_) => {
            error!("Operation '{}' timed out after {:?}", operation_name, duration);
            Err(SwapError::Timeout {
                operation: operation_name.to_string(),
                seconds: duration.as_secs(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_with_timeout_expires() {
        let slow = async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok(1)
        };
        let result = with_timeout(slow, Duration::from_secs(2), "slow op").await;
        assert!(matches!(result, Err(SwapError::Timeout { seconds: 2, .. })));
    }

    #[tokio::test]
    async fn test_with_timeout_passes_result_through() {
        let result = with_timeout(async { Ok(7) }, Duration::from_secs(1), "fast op").await;
        assert_eq!(result.unwrap(), 7);
    }
}
