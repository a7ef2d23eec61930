// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Eased numeric counters shown while a widget animates in.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Frame rate used when sampling counter keyframes.
pub const COUNTER_FPS: u32 = 60;

/// Ease-out quadratic curve. `t` is clamped to `[0, 1]`.
pub fn ease_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// A count animating from `start` to `end` over `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAnimation {
    pub start: u32,
    pub end: u32,
    pub duration_ms: u32,
}

impl CounterAnimation {
    pub fn new(start: u32, end: u32, duration_ms: u32) -> Self {
        Self {
            start,
            end,
            duration_ms,
        }
    }

    /// Displayed value at normalized progress `t` (elapsed / duration).
    ///
    /// The interpolated offset is truncated toward `start`, so the value only
    /// reaches `end` at `t = 1`.
    pub fn value_at_progress(&self, t: f64) -> u32 {
        let start = i64::from(self.start);
        let span = i64::from(self.end) - start;
        let offset = (ease_out_quad(t) * span as f64).trunc() as i64;
        (start + offset).clamp(0, i64::from(u32::MAX)) as u32
    }

    /// Displayed value after `elapsed_ms` milliseconds.
    pub fn value_at(&self, elapsed_ms: u32) -> u32 {
        if self.duration_ms == 0 {
            return self.end;
        }
        self.value_at_progress(f64::from(elapsed_ms) / f64::from(self.duration_ms))
    }

    /// Values sampled at `fps`, including both endpoints.
    pub fn frames(&self, fps: u32) -> Vec<u32> {
        let steps = (u64::from(self.duration_ms) * u64::from(fps)).div_ceil(1000);
        if steps == 0 {
            return vec![self.end];
        }
        (0..=steps)
            .map(|i| self.value_at_progress(i as f64 / steps as f64))
            .collect()
    }

    /// Serializable form with keyframes precomputed for the render layer.
    pub fn to_view(&self) -> CounterView {
        CounterView {
            start: self.start,
            end: self.end,
            duration_ms: self.duration_ms,
            frames: self.frames(COUNTER_FPS),
        }
    }
}

/// Counter payload: endpoints, duration and sampled keyframes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CounterView {
    pub start: u32,
    pub end: u32,
    pub duration_ms: u32,
    pub frames: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_quad_endpoints() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
        assert_eq!(ease_out_quad(0.5), 0.75);
        assert_eq!(ease_out_quad(2.0), 1.0);
    }

    #[test]
    fn test_counter_hits_start_and_end_exactly() {
        let counter = CounterAnimation::new(0, 437, 1400);
        assert_eq!(counter.value_at(0), 0);
        assert_eq!(counter.value_at(1400), 437);
        assert_eq!(counter.value_at(5000), 437);
    }

    #[test]
    fn test_counter_truncates_toward_start() {
        // eased(0.5) = 0.75 -> 0.75 * 3 = 2.25
        let up = CounterAnimation::new(0, 3, 1000);
        assert_eq!(up.value_at(500), 2);

        // Counting down truncates upward, still toward the start value.
        let down = CounterAnimation::new(3, 0, 1000);
        assert_eq!(down.value_at(500), 1);
    }

    #[test]
    fn test_counter_is_monotonic() {
        let counter = CounterAnimation::new(10, 3837, 1400);
        let frames = counter.frames(COUNTER_FPS);
        assert_eq!(frames.first(), Some(&10));
        assert_eq!(frames.last(), Some(&3837));
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_frame_count_for_default_duration() {
        let counter = CounterAnimation::new(0, 100, 1400);
        // 1400ms at 60fps is 84 steps, plus the starting frame.
        assert_eq!(counter.frames(60).len(), 85);
    }

    #[test]
    fn test_zero_to_zero_counter() {
        let counter = CounterAnimation::new(0, 0, 1400);
        assert!(counter.frames(60).iter().all(|&v| v == 0));
        assert_eq!(counter.value_at(700), 0);
    }

    #[test]
    fn test_zero_duration_jumps_to_end() {
        let counter = CounterAnimation::new(5, 9, 0);
        assert_eq!(counter.value_at(0), 9);
        assert_eq!(counter.to_view().frames, vec![9]);
    }
}
