// SPDX-License-Identifier: MPL-2.0
//! Autoplay timing for the slideshow.
//!
//! The timer itself is an `iced::time::every` subscription that is torn down
//! and recreated whenever playback or the slide count changes. A tick that
//! was already in flight when its timer was torn down may still be
//! delivered afterwards; [`AutoplayClock`] filters those out so a re-arm
//! never produces a double advance.

use crate::config::{
    DEFAULT_AUTOPLAY_INTERVAL_MS, MAX_AUTOPLAY_INTERVAL_MS, MIN_AUTOPLAY_INTERVAL_MS,
};
use std::time::{Duration, Instant};

/// Delay between two automatic advances, in milliseconds.
///
/// Always within the supported range (1–60 seconds).
///
/// # Example
///
/// ```
/// use iced_slideshow::ui::state::AutoplayInterval;
///
/// let interval = AutoplayInterval::new(2500);
/// assert_eq!(interval.millis(), 2500);
///
/// // Values outside range are clamped
/// assert_eq!(AutoplayInterval::new(5).millis(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AutoplayInterval(u64);

impl AutoplayInterval {
    /// Creates an interval, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_AUTOPLAY_INTERVAL_MS, MAX_AUTOPLAY_INTERVAL_MS))
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for AutoplayInterval {
    fn default() -> Self {
        Self(DEFAULT_AUTOPLAY_INTERVAL_MS)
    }
}

impl From<Duration> for AutoplayInterval {
    fn from(duration: Duration) -> Self {
        Self::new(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }
}

/// Tracks when the current autoplay timer was started.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoplayClock {
    armed_at: Option<Instant>,
}

impl AutoplayClock {
    /// Records that a fresh timer starts at `now`.
    pub fn arm(&mut self, now: Instant) {
        self.armed_at = Some(now);
    }

    /// No timer is running.
    pub fn disarm(&mut self) {
        self.armed_at = None;
    }

    /// Whether a tick scheduled for `tick_at` belongs to the current timer.
    ///
    /// A fresh timer never fires before one full `interval` has elapsed
    /// since it was armed, so anything earlier is a leftover.
    #[must_use]
    pub fn accepts(&self, tick_at: Instant, interval: AutoplayInterval) -> bool {
        match self.armed_at {
            Some(armed_at) => tick_at >= armed_at + interval.as_duration(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(AutoplayInterval::new(0).millis(), MIN_AUTOPLAY_INTERVAL_MS);
        assert_eq!(
            AutoplayInterval::new(u64::MAX).millis(),
            MAX_AUTOPLAY_INTERVAL_MS
        );
    }

    #[test]
    fn default_is_four_seconds() {
        assert_eq!(
            AutoplayInterval::default().as_duration(),
            Duration::from_secs(4)
        );
    }

    #[test]
    fn from_duration_clamps_too() {
        let interval = AutoplayInterval::from(Duration::from_secs(3600));
        assert_eq!(interval.millis(), MAX_AUTOPLAY_INTERVAL_MS);
    }

    #[test]
    fn disarmed_clock_rejects_every_tick() {
        let clock = AutoplayClock::default();
        let late = Instant::now() + Duration::from_secs(3600);
        assert!(!clock.accepts(late, AutoplayInterval::default()));
    }

    #[test]
    fn tick_one_interval_after_arming_is_accepted() {
        let mut clock = AutoplayClock::default();
        let t0 = Instant::now();
        let interval = AutoplayInterval::default();
        clock.arm(t0);

        assert!(clock.accepts(t0 + interval.as_duration(), interval));
        assert!(clock.accepts(t0 + interval.as_duration() * 3, interval));
    }

    #[test]
    fn leftover_tick_right_after_rearm_is_rejected() {
        let mut clock = AutoplayClock::default();
        let t0 = Instant::now();
        let interval = AutoplayInterval::default();
        clock.arm(t0 + Duration::from_millis(3990));

        // Scheduled by the previous timer at t0 + 4000ms.
        assert!(!clock.accepts(t0 + interval.as_duration(), interval));
    }

    #[test]
    fn disarm_clears_the_clock() {
        let mut clock = AutoplayClock::default();
        let t0 = Instant::now();
        clock.arm(t0);
        clock.disarm();
        assert!(!clock.accepts(t0 + Duration::from_secs(3600), AutoplayInterval::default()));
    }
}
