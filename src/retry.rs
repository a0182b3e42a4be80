//! Retry predicate and linear backoff schedule.

use std::time::Duration;

use reqwest::{Method, StatusCode};

use crate::{error::ErrorClass, ClientOptions, MusicApiError};

/// Retry settings derived from [`ClientOptions`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct RetryPolicy {
    pub max_retries: usize,
    pub delay_unit_ms: u64,
}

impl RetryPolicy {
    pub fn from_options(opts: &ClientOptions) -> Self {
        Self {
            max_retries: opts.max_retries,
            delay_unit_ms: opts.retry_delay_ms,
        }
    }

    /// Delay before the `retry`-th re-send (1-indexed): `retry * unit`.
    pub fn delay(&self, retry: usize) -> Duration {
        let retry = u64::try_from(retry).unwrap_or(u64::MAX);
        Duration::from_millis(self.delay_unit_ms.saturating_mul(retry))
    }

    /// Whether a failed attempt that already used `retries_done` retries
    /// may be sent again.
    pub fn should_retry(&self, method: &Method, err: &MusicApiError, retries_done: usize) -> bool {
        retries_done < self.max_retries && is_retryable(method, err)
    }
}

pub(crate) fn is_idempotent(method: &Method) -> bool {
    matches!(
        *method,
        Method::GET | Method::HEAD | Method::OPTIONS | Method::PUT | Method::DELETE
    )
}

/// Network errors retry for any method, timeouts always retry, and
/// idempotent methods additionally retry on 5xx and 429 responses.
pub(crate) fn is_retryable(method: &Method, err: &MusicApiError) -> bool {
    is_retryable_class(method, err.class())
}

fn is_retryable_class(method: &Method, class: ErrorClass) -> bool {
    match class {
        ErrorClass::Network | ErrorClass::Timeout => true,
        ErrorClass::Status(status) => is_idempotent(method) && is_retryable_status(status),
        ErrorClass::Other => false,
    }
}

fn is_retryable_status(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}
