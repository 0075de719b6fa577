//! Time abstraction traits for platform-agnostic timing.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

#[cfg(feature = "std")]
mod std_impls {
    use super::{TimeDuration, TimeInstant, TimeSource};

    impl TimeDuration for std::time::Duration {
        fn as_millis(&self) -> u64 {
            u64::try_from(std::time::Duration::as_millis(self)).unwrap_or(u64::MAX)
        }
    }

    impl TimeInstant for std::time::Instant {
        type Duration = std::time::Duration;

        fn duration_since(&self, earlier: Self) -> Self::Duration {
            self.saturating_duration_since(earlier)
        }
    }

    /// Monotonic wall clock backed by [`std::time::Instant`].
    #[derive(Debug, Default, Clone, Copy)]
    pub struct SystemClock;

    impl TimeSource<std::time::Instant> for SystemClock {
        fn now(&self) -> std::time::Instant {
            std::time::Instant::now()
        }
    }
}

#[cfg(feature = "std")]
pub use std_impls::SystemClock;
