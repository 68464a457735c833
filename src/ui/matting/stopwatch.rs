// SPDX-License-Identifier: MPL-2.0
//! Elapsed-time stopwatch shown while processing.
//!
//! The counter advances by a fixed step on every tick of a periodic
//! subscription. The subscription only exists while the context reports
//! `is_processing`, so the timer is cancelled on every exit path (completion,
//! failure, teardown) without any manual cleanup.

use std::time::Duration;

/// Interval between stopwatch ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Seconds added per tick.
const TICK_STEP: f32 = 0.01;

/// Locally-owned elapsed-time counter.
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    elapsed: f32,
}

impl Stopwatch {
    /// Advances the counter by one tick.
    pub fn tick(&mut self) {
        self.elapsed += TICK_STEP;
    }

    /// Resets the counter to zero.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Elapsed seconds accumulated so far.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Formats the elapsed time, appending the estimate when one is known.
    ///
    /// `"1.23s"` without an estimate, `"1.23s/4.56s"` with one. An estimate
    /// of zero means "unknown" and is omitted.
    #[must_use]
    pub fn display(&self, estimated_secs: f32) -> String {
        if estimated_secs == 0.0 {
            format!("{:.2}s", self.elapsed)
        } else {
            format!("{:.2}s/{:.2}s", self.elapsed, estimated_secs)
        }
    }
}

// One tick per 10ms at 0.01s per tick keeps the counter in real seconds.
const _: () = {
    assert!(TICK_INTERVAL.as_millis() == 10);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let watch = Stopwatch::default();
        assert_eq!(watch.elapsed(), 0.0);
        assert_eq!(watch.display(0.0), "0.00s");
    }

    #[test]
    fn ticks_advance_in_hundredths() {
        let mut watch = Stopwatch::default();
        for _ in 0..3 {
            watch.tick();
        }
        assert!((watch.elapsed() - 0.03).abs() < 1e-6);
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut watch = Stopwatch::default();
        for _ in 0..250 {
            watch.tick();
        }
        watch.reset();
        assert_eq!(watch.elapsed(), 0.0);
        assert_eq!(watch.display(0.0), "0.00s");
    }

    #[test]
    fn display_without_estimate_shows_elapsed_only() {
        let mut watch = Stopwatch::default();
        for _ in 0..123 {
            watch.tick();
        }
        assert_eq!(watch.display(0.0), "1.23s");
    }

    #[test]
    fn display_with_estimate_appends_it() {
        let mut watch = Stopwatch::default();
        for _ in 0..50 {
            watch.tick();
        }
        assert_eq!(watch.display(4.5), "0.50s/4.50s");
    }

    #[test]
    fn step_matches_tick_interval() {
        // 0.01s per 10ms tick means the display tracks wall-clock seconds.
        assert!((TICK_STEP - TICK_INTERVAL.as_secs_f32()).abs() < f32::EPSILON);
    }
}
