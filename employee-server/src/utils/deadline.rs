//! Per-request deadlines
//!
//! Every service call from a handler runs under a deadline. When it elapses
//! the in-flight store future is dropped and the request fails.

use std::future::Future;
use std::time::Duration;

use crate::utils::{AppError, AppResult};

/// Run `fut` with a deadline of `limit`.
pub async fn with_deadline<T, F>(limit: Duration, operation: &str, fut: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(AppError::timeout(format!(
            "{operation} exceeded {}ms",
            limit.as_millis()
        ))),
    }
}
