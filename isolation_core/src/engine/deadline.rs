use std::fmt;
use std::time::Duration;

/// Raised when the turn clock drops below the configured threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTimeout;

impl fmt::Display for SearchTimeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "search deadline reached")
    }
}

impl std::error::Error for SearchTimeout {}

/// Polled cancellation point.
///
/// The search owns no clock. `time_left` comes from whoever enforces the turn
/// limit and is queried once per [`Deadline::check`].
pub struct Deadline<F> {
    time_left: F,
    threshold: Duration,
    checks: u64,
}

impl<F: Fn() -> Duration> Deadline<F> {
    pub const fn new(time_left: F, threshold: Duration) -> Self {
        Self {
            time_left,
            threshold,
            checks: 0,
        }
    }

    pub fn check(&mut self) -> Result<(), SearchTimeout> {
        self.checks += 1;
        if (self.time_left)() < self.threshold {
            return Err(SearchTimeout);
        }
        Ok(())
    }

    pub fn remaining(&self) -> Duration {
        (self.time_left)()
    }

    pub const fn threshold(&self) -> Duration {
        self.threshold
    }

    /// Number of checks performed so far, including a failing one.
    pub const fn checks(&self) -> u64 {
        self.checks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_unlimited_clock_never_fails() {
        let mut deadline = Deadline::new(|| Duration::MAX, Duration::from_millis(10));
        for _ in 0..100 {
            assert!(deadline.check().is_ok());
        }
        assert_eq!(deadline.checks(), 100);
    }

    #[test]
    fn test_fails_below_threshold() {
        let remaining = Cell::new(Duration::from_millis(12));
        let mut deadline = Deadline::new(|| remaining.get(), Duration::from_millis(10));

        assert_eq!(deadline.check(), Ok(()));
        remaining.set(Duration::from_millis(10));
        // Equal to the threshold is still fine
        assert_eq!(deadline.check(), Ok(()));
        remaining.set(Duration::from_millis(9));
        assert_eq!(deadline.check(), Err(SearchTimeout));
        assert_eq!(deadline.checks(), 3);
    }

    #[test]
    fn test_zero_threshold_never_fails() {
        let mut deadline = Deadline::new(|| Duration::ZERO, Duration::ZERO);
        assert!(deadline.check().is_ok());
        assert_eq!(deadline.remaining(), Duration::ZERO);
        assert_eq!(deadline.threshold(), Duration::ZERO);
    }
}
