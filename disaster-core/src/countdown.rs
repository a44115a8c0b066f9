//! Bag-packing countdown.
//!
//! The countdown is driven by an external one-second tick. It reports
//! expiry exactly once and ignores every tick after that.

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Still counting; carries the remaining seconds.
    Running(u32),
    /// Reached zero on this tick. The owner should stop its timer.
    Expired,
    /// Already expired earlier; nothing changes.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    expired: bool,
}

impl Countdown {
    #[must_use]
    pub const fn new(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            expired: false,
        }
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.expired
    }

    pub const fn tick(&mut self) -> Tick {
        if self.expired {
            return Tick::Finished;
        }
        if self.remaining <= 1 {
            self.remaining = 0;
            self.expired = true;
            return Tick::Expired;
        }
        self.remaining -= 1;
        Tick::Running(self.remaining)
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(crate::constants::BAG_TIMER_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_once_per_tick() {
        let mut countdown = Countdown::new(3);
        assert_eq!(countdown.tick(), Tick::Running(2));
        assert_eq!(countdown.tick(), Tick::Running(1));
        assert_eq!(countdown.tick(), Tick::Expired);
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn expiry_is_signalled_exactly_once() {
        let mut countdown = Countdown::default();
        assert_eq!(countdown.remaining(), 150);
        let expiries = (0..200)
            .map(|_| countdown.tick())
            .filter(|tick| *tick == Tick::Expired)
            .count();
        assert_eq!(expiries, 1);
        assert!(countdown.is_expired());
        assert_eq!(countdown.tick(), Tick::Finished);
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn default_countdown_expires_on_the_hundred_fiftieth_tick() {
        let mut countdown = Countdown::default();
        for expected in (1..150).rev() {
            assert_eq!(countdown.tick(), Tick::Running(expected));
        }
        assert_eq!(countdown.tick(), Tick::Expired);
    }

    #[test]
    fn zero_start_expires_immediately() {
        let mut countdown = Countdown::new(0);
        assert_eq!(countdown.tick(), Tick::Expired);
    }
}
