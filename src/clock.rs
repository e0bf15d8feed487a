//! Time source abstraction
//!
//! All `exp` / `iat` checks read the current time through [`Clock`] so that
//! tests can freeze time and replay the same token deterministically.

use std::time::{SystemTime, UNIX_EPOCH};

/// A source of the current Unix timestamp in seconds
pub trait Clock: Send + Sync {
    /// Current Unix timestamp in seconds
    fn unix_now(&self) -> i64;
}

/// Wall-clock time from the operating system
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_now(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_secs() as i64,
            // Pre-epoch system time: treat as epoch, every exp check fails closed
            Err(_) => 0,
        }
    }
}

/// A frozen clock for deterministic tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn unix_now(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_past_2020() {
        assert!(SystemClock.unix_now() > 1_577_836_800);
    }

    #[test]
    fn fixed_clock_returns_its_value() {
        let clock = FixedClock(1_700_000_000);
        assert_eq!(clock.unix_now(), 1_700_000_000);
        assert_eq!(clock.unix_now(), 1_700_000_000);
    }
}
