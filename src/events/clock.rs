// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Time source for event stamping

use chrono::Utc;

/// Zero-argument "now" provider, in epoch milliseconds
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock that always reports the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> i64 + Send + Sync,
{
    fn now_millis(&self) -> i64 {
        self()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicI64, Ordering};

    use super::*;

    #[test]
    fn test_system_clock_is_recent() {
        // 2025-01-01T00:00:00Z
        assert!(SystemClock.now_millis() > 1_735_689_600_000);
    }

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock(42).now_millis(), 42);
    }

    #[test]
    fn test_closure_clock() {
        let ticks = AtomicI64::new(10);
        let clock = || ticks.fetch_add(1, Ordering::SeqCst);

        assert_eq!(clock.now_millis(), 10);
        assert_eq!(clock.now_millis(), 11);
    }
}
