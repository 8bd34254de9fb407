//! Sources of wall-clock time.

use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::{SystemTime, UNIX_EPOCH},
};

use nor_primitives::types::Timestamp;

/// A monotonic source of the current time, in seconds since the unix epoch.
pub trait Clock {
    /// Returns the current time.
    fn now(&self) -> Timestamp;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Reads the operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a handle kept outside the registry can move the registry's
/// clock.
#[derive(Debug, Clone, Default)]
pub struct ManualClock(Arc<AtomicU64>);

impl ManualClock {
    /// Creates a clock frozen at `now`.
    pub fn new(now: Timestamp) -> Self {
        Self(Arc::new(AtomicU64::new(now)))
    }

    /// Sets the current time.
    pub fn set(&self, now: Timestamp) {
        self.0.store(now, Ordering::SeqCst);
    }

    /// Moves the clock forward by `secs` and returns the new time. Saturates at [`u64::MAX`].
    pub fn advance(&self, secs: u64) -> Timestamp {
        let advance = |now: u64| Some(now.saturating_add(secs));
        match self.0.fetch_update(Ordering::SeqCst, Ordering::SeqCst, advance) {
            Ok(prev) | Err(prev) => prev.saturating_add(secs),
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_is_shared_between_clones() {
        let clock = ManualClock::new(1_000);
        let handle = clock.clone();

        assert_eq!(handle.advance(500), 1_500);
        assert_eq!(clock.now(), 1_500);

        clock.set(10);
        assert_eq!(handle.now(), 10);
    }

    #[test]
    fn manual_clock_saturates_instead_of_wrapping() {
        let clock = ManualClock::new(u64::MAX - 10);

        assert_eq!(clock.advance(100), u64::MAX);
        assert_eq!(clock.now(), u64::MAX);
        assert_eq!(clock.advance(1), u64::MAX);
    }

    #[test]
    fn system_clock_is_past_epoch() {
        assert!(SystemClock.now() > 0);
    }
}
