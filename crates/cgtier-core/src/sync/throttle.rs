//! Request pacing.
//!
//! The web UI is only ever sent one request at a time; a throttle decides how
//! long to wait after each request completes, whatever its outcome.

use std::time::Duration;

use crate::config::sync as sync_config;

pub trait RequestThrottle {
    /// Pause after a completed request, `None` for no pause
    fn delay(&self) -> Option<Duration>;

    /// Block for the configured delay
    fn wait(&self) {
        if let Some(delay) = self.delay() {
            std::thread::sleep(delay);
        }
    }
}

/// Constant pause after every request
#[derive(Debug, Clone)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::new(Duration::from_millis(sync_config::REQUEST_DELAY_MS))
    }
}

impl RequestThrottle for FixedDelay {
    fn delay(&self) -> Option<Duration> {
        Some(self.delay)
    }
}

/// No pause; used by tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct NoDelay;

impl RequestThrottle for NoDelay {
    fn delay(&self) -> Option<Duration> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_delay_default() {
        let throttle = FixedDelay::default();
        assert_eq!(throttle.delay(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_fixed_delay_custom() {
        let throttle = FixedDelay::new(Duration::from_millis(5));
        assert_eq!(throttle.delay(), Some(Duration::from_millis(5)));
    }

    #[test]
    fn test_no_delay() {
        assert_eq!(NoDelay.delay(), None);
        NoDelay.wait();
    }
}
