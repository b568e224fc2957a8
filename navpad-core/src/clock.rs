//! Monotonic millisecond clock trait.

/// A monotonic millisecond clock supplied by the host environment.
///
/// All elapsed-time math in this crate uses `wrapping_sub` on the
/// returned values, so implementations may wrap at `u32::MAX`
/// (roughly every 49.7 days) without producing bogus intervals.
pub trait Clock {
    /// Current monotonic time in milliseconds.
    fn now_ms(&self) -> u32;
}

/// [`Clock`] backed by `std::time::Instant`, for host use.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    epoch: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Clock starting at 0 ms now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            epoch: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now_ms(&self) -> u32 {
        self.epoch.elapsed().as_millis() as u32
    }
}
