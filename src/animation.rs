// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

//! Timed color cycle.
//!
//! AnimationClock advances a tick counter on wall-clock time, not on frames:
//! each loop iteration calls advance once, and the counter moves by
//! tick_increment only if more than 1/ticks_per_second seconds passed since
//! the last advance. The counter wraps at CYCLE_TICKS.
//!
//! The tick is mapped to a color by cycle_color, six linear ramps of 255
//! ticks each sweeping the hue at full saturation:
//!
//! ```text
//! phase   R       G       B
//!   0     255     m       0
//!   1     255-m   255     0
//!   2     0       255     m
//!   3     0       255-m   255
//!   4     m       0       255
//!   5     255     0       255-m      (phase = t / 255, m = t % 255)
//! ```

use crate::render::style::Color;
use std::time::{Duration, Instant};

/// Length of one ramp
pub const PHASE_TICKS: u32 = 0xFF;
/// Wraparound period of the counter
pub const CYCLE_TICKS: u32 = 6 * PHASE_TICKS;

/// Color of tick t, t is taken modulo CYCLE_TICKS
pub fn cycle_color(t: u32) -> Color {
    let t = t % CYCLE_TICKS;
    let m = (t % PHASE_TICKS) as u8;
    match t / PHASE_TICKS {
        0 => Color::rgb(0xFF, m, 0),
        1 => Color::rgb(0xFF - m, 0xFF, 0),
        2 => Color::rgb(0, 0xFF, m),
        3 => Color::rgb(0, 0xFF - m, 0xFF),
        4 => Color::rgb(m, 0, 0xFF),
        _ => Color::rgb(0xFF, 0, 0xFF - m),
    }
}

#[derive(Debug, Clone)]
pub struct AnimationClock {
    ticks: u32,
    last_sample: Instant,
    ticks_per_second: u32,
    tick_increment: u32,
}

impl AnimationClock {
    pub fn new(ticks_per_second: u32, tick_increment: u32) -> Self {
        Self::started_at(Instant::now(), ticks_per_second, tick_increment)
    }

    /// A clock whose first sample time is start
    pub fn started_at(start: Instant, ticks_per_second: u32, tick_increment: u32) -> Self {
        Self {
            ticks: 0,
            last_sample: start,
            ticks_per_second: ticks_per_second.max(1),
            tick_increment,
        }
    }

    /// Minimum time between two advances
    pub fn period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.ticks_per_second as f64)
    }

    pub fn advance(&mut self) -> bool {
        self.advance_at(Instant::now())
    }

    /// Moves the counter if more than one period passed since the last
    /// advance. Never waits. Returns true if the counter moved.
    pub fn advance_at(&mut self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.last_sample);
        if elapsed <= self.period() {
            return false;
        }
        self.ticks = (self.ticks + self.tick_increment % CYCLE_TICKS) % CYCLE_TICKS;
        self.last_sample = now;
        true
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn color(&self) -> Color {
        cycle_color(self.ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(c: Color) -> (u8, u8, u8) {
        c.rgb_tuple()
    }

    #[test]
    fn phase_boundaries() {
        assert_eq!(rgb(cycle_color(0)), (255, 0, 0));
        assert_eq!(rgb(cycle_color(254)), (255, 254, 0));
        assert_eq!(rgb(cycle_color(255)), (255, 255, 0));
        assert_eq!(rgb(cycle_color(256)), (254, 255, 0));
        assert_eq!(rgb(cycle_color(509)), (1, 255, 0));
        assert_eq!(rgb(cycle_color(510)), (0, 255, 0));
        assert_eq!(rgb(cycle_color(765)), (0, 255, 255));
        assert_eq!(rgb(cycle_color(1020)), (0, 0, 255));
        assert_eq!(rgb(cycle_color(1275)), (255, 0, 255));
        assert_eq!(rgb(cycle_color(1529)), (255, 0, 1));
        assert_eq!(rgb(cycle_color(1530)), (255, 0, 0));
    }

    #[test]
    fn one_channel_ramps_within_each_phase() {
        for phase in 0..6u32 {
            for m in 1..PHASE_TICKS {
                let a = cycle_color(phase * PHASE_TICKS + m - 1);
                let b = cycle_color(phase * PHASE_TICKS + m);
                let diff = [
                    (a.r as i32 - b.r as i32).abs(),
                    (a.g as i32 - b.g as i32).abs(),
                    (a.b as i32 - b.b as i32).abs(),
                ];
                assert_eq!(diff.iter().sum::<i32>(), 1, "phase {} m {}", phase, m);
            }
        }
    }

    #[test]
    fn advance_waits_for_a_full_period() {
        let t0 = Instant::now();
        let mut clock = AnimationClock::started_at(t0, 10, 1);
        assert!(!clock.advance_at(t0));
        assert!(!clock.advance_at(t0 + Duration::from_millis(100)));
        assert!(clock.advance_at(t0 + Duration::from_millis(101)));
        assert_eq!(clock.ticks(), 1);
        // one step per check, however long the gap
        assert!(clock.advance_at(t0 + Duration::from_secs(10)));
        assert_eq!(clock.ticks(), 2);
        assert!(!clock.advance_at(t0 + Duration::from_millis(10_050)));
    }

    #[test]
    fn counter_wraps() {
        let t0 = Instant::now();
        let mut clock = AnimationClock::started_at(t0, 1000, 700);
        for i in 1..=3u64 {
            clock.advance_at(t0 + Duration::from_millis(2 * i));
        }
        assert_eq!(clock.ticks(), 2100 % CYCLE_TICKS);
        assert_eq!(clock.color(), cycle_color(570));
    }
}
