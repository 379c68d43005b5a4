// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Stopwatch for measuring spans of caller code.
//!
//! Backed by the monotonic `Instant` clock. A stopwatch can be re-armed
//! any number of times; every `start` overwrites the previous start point.

use std::time::{Duration, Instant};

/// A unit that a [`Duration`] can be truncated into.
pub trait TimeUnit {
    /// Short suffix used when printing values of this unit.
    const SUFFIX: &'static str;

    /// Convert `duration` into whole units, truncating any remainder.
    fn truncate(duration: Duration) -> u128;
}

/// Whole nanoseconds.
#[derive(Debug, Clone, Copy)]
pub struct Nanoseconds;

/// Whole microseconds.
#[derive(Debug, Clone, Copy)]
pub struct Microseconds;

/// Whole milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct Milliseconds;

/// Whole seconds.
#[derive(Debug, Clone, Copy)]
pub struct Seconds;

impl TimeUnit for Nanoseconds {
    const SUFFIX: &'static str = "ns";

    fn truncate(duration: Duration) -> u128 {
        duration.as_nanos()
    }
}

impl TimeUnit for Microseconds {
    const SUFFIX: &'static str = "us";

    fn truncate(duration: Duration) -> u128 {
        duration.as_micros()
    }
}

impl TimeUnit for Milliseconds {
    const SUFFIX: &'static str = "ms";

    fn truncate(duration: Duration) -> u128 {
        duration.as_millis()
    }
}

impl TimeUnit for Seconds {
    const SUFFIX: &'static str = "s";

    fn truncate(duration: Duration) -> u128 {
        u128::from(duration.as_secs())
    }
}

/// Start/stop timer over the monotonic clock.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
    stop: Instant,
}

impl Stopwatch {
    /// Create a stopwatch whose start and stop points are both "now".
    ///
    /// `elapsed()` on a fresh stopwatch is therefore zero.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            stop: now,
        }
    }

    /// Record the start point, replacing any earlier one.
    #[inline]
    pub fn start(&mut self) {
        self.start = Instant::now();
    }

    /// Record the stop point.
    #[inline]
    pub fn stop(&mut self) {
        self.stop = Instant::now();
    }

    /// Time between the last start and the last stop.
    ///
    /// Zero if the stopwatch was re-armed without being stopped again.
    pub fn elapsed(&self) -> Duration {
        self.stop.saturating_duration_since(self.start)
    }

    /// Elapsed time truncated to whole `U`s.
    pub fn to_unit<U: TimeUnit>(&self) -> u128 {
        U::truncate(self.elapsed())
    }

    /// Elapsed time in whole milliseconds.
    pub fn to_ms(&self) -> u128 {
        self.to_unit::<Milliseconds>()
    }

    /// Elapsed time in whole `U`s with the unit suffix, e.g. `12ms`.
    pub fn display_in<U: TimeUnit>(&self) -> String {
        format!("{}{}", self.to_unit::<U>(), U::SUFFIX)
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_fresh_stopwatch_is_zero() {
        let sw = Stopwatch::new();
        assert_eq!(sw.elapsed(), Duration::ZERO);
        assert_eq!(sw.to_unit::<Nanoseconds>(), 0);
    }

    #[test]
    fn test_start_stop() {
        let mut sw = Stopwatch::new();
        sw.start();
        thread::sleep(Duration::from_millis(10));
        sw.stop();

        // Should be at least 10ms
        assert!(sw.elapsed() >= Duration::from_millis(10));
        assert!(sw.to_ms() >= 10);
    }

    #[test]
    fn test_rearm_without_stop_is_zero() {
        let mut sw = Stopwatch::new();
        sw.start();
        sw.stop();
        thread::sleep(Duration::from_millis(1));
        sw.start();
        assert_eq!(sw.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_reuse_across_spans() {
        let mut sw = Stopwatch::new();

        sw.start();
        thread::sleep(Duration::from_millis(20));
        sw.stop();
        let first = sw.elapsed();

        sw.start();
        sw.stop();
        let second = sw.elapsed();

        assert!(first >= Duration::from_millis(20));
        assert!(second < first);
    }

    #[test]
    fn test_display_in_appends_suffix() {
        let sw = Stopwatch::new();
        assert_eq!(sw.display_in::<Nanoseconds>(), "0ns");
        assert_eq!(sw.display_in::<Microseconds>(), "0us");
        assert_eq!(sw.display_in::<Milliseconds>(), "0ms");
        assert_eq!(sw.display_in::<Seconds>(), "0s");
    }

    #[test]
    fn test_units_truncate() {
        let d = Duration::new(2, 999_999_999);
        assert_eq!(Nanoseconds::truncate(d), 2_999_999_999);
        assert_eq!(Microseconds::truncate(d), 2_999_999);
        assert_eq!(Milliseconds::truncate(d), 2_999);
        assert_eq!(Seconds::truncate(d), 2);
    }
}
