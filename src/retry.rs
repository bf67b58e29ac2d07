//! Retry configuration for the fetch loop.
//!
//! A failed response item (error indication, status or index set) is
//! re-requested from the same response source until it succeeds or its
//! failure count reaches the limit.

use std::time::Duration;

/// Default failure limit per response item.
pub const RETRY_LIMIT: u32 = 3;

/// Retry configuration for response items.
///
/// # Examples
///
/// ```rust
/// use quicksnmp::RetryPolicy;
/// use std::time::Duration;
///
/// // Three failures per item, no delay (the default)
/// let retry = RetryPolicy::default();
/// assert_eq!(retry.limit, 3);
///
/// // First failure is fatal
/// let retry = RetryPolicy::once();
///
/// // Five failures, 200ms pause before each re-request
/// let retry = RetryPolicy::fixed(5, Duration::from_millis(200));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Failures per item before the call fails. 0 is treated as 1.
    pub limit: u32,
    /// Pause before each re-request.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    /// Default: 3 failures per item, no delay between attempts.
    fn default() -> Self {
        Self {
            limit: RETRY_LIMIT,
            delay: Duration::ZERO,
        }
    }
}

impl RetryPolicy {
    /// No retries: the first failure of any item fails the call.
    pub fn once() -> Self {
        Self {
            limit: 1,
            delay: Duration::ZERO,
        }
    }

    /// Fixed delay between attempts.
    ///
    /// # Arguments
    ///
    /// * `limit` - Failures per item before giving up
    /// * `delay` - Pause before each re-request
    pub fn fixed(limit: u32, delay: Duration) -> Self {
        Self { limit, delay }
    }

    /// The limit actually applied.
    pub fn effective_limit(&self) -> u32 {
        self.limit.max(1)
    }

    /// Whether `failures` recorded failures exhaust the budget.
    pub fn is_exhausted(&self, failures: u32) -> bool {
        failures >= self.effective_limit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_default() {
        let retry = RetryPolicy::default();
        assert_eq!(retry.limit, RETRY_LIMIT);
        assert_eq!(retry.delay, Duration::ZERO);
    }

    #[test]
    fn test_retry_once() {
        let retry = RetryPolicy::once();
        assert!(retry.is_exhausted(1));
        assert!(!retry.is_exhausted(0));
    }

    #[test]
    fn test_retry_fixed() {
        let retry = RetryPolicy::fixed(5, Duration::from_millis(200));
        assert_eq!(retry.limit, 5);
        assert_eq!(retry.delay, Duration::from_millis(200));
    }

    #[test]
    fn test_is_exhausted_at_limit() {
        let retry = RetryPolicy::default();
        assert!(!retry.is_exhausted(1));
        assert!(!retry.is_exhausted(2));
        assert!(retry.is_exhausted(3));
    }

    #[test]
    fn test_zero_limit_treated_as_one() {
        let retry = RetryPolicy::fixed(0, Duration::ZERO);
        assert_eq!(retry.effective_limit(), 1);
        assert!(retry.is_exhausted(1));
    }
}
