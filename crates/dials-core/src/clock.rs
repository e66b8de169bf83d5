//! Injectable time source.
//!
//! The store stamps every successful write with the current time. Taking the
//! clock as a constructor-supplied capability instead of reading the wall
//! clock directly keeps store operations deterministic under test: a test
//! injects a fixed clock and asserts the exact stored timestamp.

use chrono::{DateTime, Utc};

/// Abstract source of the current UTC time.
///
/// # Invariants
///
/// - Monotonicity: successive `now()` calls must not go backwards within a
///   single execution context.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock reading the system wall clock.
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_advances() {
        let clock = SystemClock::new();

        let t1 = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let t2 = clock.now();

        assert!(t2 > t1, "time should advance");
    }
}
