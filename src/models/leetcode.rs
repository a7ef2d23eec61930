// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! LeetCode solve statistics and the progress ring derived from them.

use serde::Serialize;
use std::f64::consts::PI;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::counter::{CounterAnimation, CounterView};

/// Fallback totals used when the stats proxy omits them.
pub const FALLBACK_TOTAL_QUESTIONS: u32 = 3837;
pub const FALLBACK_TOTAL_EASY: u32 = 925;
pub const FALLBACK_TOTAL_MEDIUM: u32 = 2005;
pub const FALLBACK_TOTAL_HARD: u32 = 907;

/// Smallest arc (in percentage points) drawn for a non-empty ring.
pub const MIN_VISIBLE_PERCENT: f64 = 18.0;

/// Radius of the ring in SVG user units.
pub const RING_RADIUS: f64 = 42.0;

/// Duration of the solved/total ratio animation.
pub const RATIO_ANIMATION_MS: u32 = 1400;

/// Problem difficulty, in ring drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

/// Solved vs available problems for one difficulty. `solved <= total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DifficultyBreakdown {
    pub solved: u32,
    pub total: u32,
}

impl DifficultyBreakdown {
    /// Build a breakdown, clamping `solved` to `total`.
    pub fn new(solved: u32, total: u32) -> Self {
        Self {
            solved: solved.min(total),
            total,
        }
    }

    /// Share of this difficulty solved, in percent (for the breakdown bars).
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.solved) / f64::from(self.total) * 100.0
    }
}

/// Normalized stats for one LeetCode user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeetCodeStats {
    pub total_questions: u32,
    pub total_solved: u32,
    pub easy: DifficultyBreakdown,
    pub medium: DifficultyBreakdown,
    pub hard: DifficultyBreakdown,
}

/// Raw stats fields as reported upstream, any of which may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsParts {
    pub total_questions: Option<u32>,
    pub total_solved: Option<u32>,
    pub easy_solved: Option<u32>,
    pub medium_solved: Option<u32>,
    pub hard_solved: Option<u32>,
    pub total_easy: Option<u32>,
    pub total_medium: Option<u32>,
    pub total_hard: Option<u32>,
}

impl From<StatsParts> for LeetCodeStats {
    /// Missing or zero totals take the fallback constants, missing solve
    /// counts are 0. `total_solved` is raised to at least the sum of the
    /// per-difficulty counts, which are trimmed hard-first so the sum fits
    /// in a `u32`.
    fn from(parts: StatsParts) -> Self {
        let or_fallback = |v: Option<u32>, fallback| v.filter(|&n| n > 0).unwrap_or(fallback);

        let easy = DifficultyBreakdown::new(
            parts.easy_solved.unwrap_or(0),
            or_fallback(parts.total_easy, FALLBACK_TOTAL_EASY),
        );
        let mut medium = DifficultyBreakdown::new(
            parts.medium_solved.unwrap_or(0),
            or_fallback(parts.total_medium, FALLBACK_TOTAL_MEDIUM),
        );
        let mut hard = DifficultyBreakdown::new(
            parts.hard_solved.unwrap_or(0),
            or_fallback(parts.total_hard, FALLBACK_TOTAL_HARD),
        );
        medium.solved = medium.solved.min(u32::MAX - easy.solved);
        hard.solved = hard.solved.min(u32::MAX - easy.solved - medium.solved);
        let category_sum = easy.solved + medium.solved + hard.solved;

        Self {
            total_questions: or_fallback(parts.total_questions, FALLBACK_TOTAL_QUESTIONS),
            total_solved: parts.total_solved.unwrap_or(0).max(category_sum),
            easy,
            medium,
            hard,
        }
    }
}

impl LeetCodeStats {
    pub fn breakdown(&self, difficulty: Difficulty) -> DifficultyBreakdown {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    /// Ring percentages for the three difficulties.
    pub fn ring(&self) -> RingBreakdown {
        RingBreakdown::compute(self)
    }

    /// Per-difficulty progress bars.
    pub fn bars(&self) -> Vec<DifficultyBar> {
        Difficulty::ALL
            .into_iter()
            .map(|difficulty| {
                let b = self.breakdown(difficulty);
                DifficultyBar {
                    difficulty,
                    solved: b.solved,
                    total: b.total,
                    percentage: b.percentage(),
                }
            })
            .collect()
    }

    /// Counters animating the "solved / total" ratio up from zero.
    pub fn ratio_counters(&self) -> RatioCounters {
        RatioCounters {
            solved: CounterAnimation::new(0, self.total_solved, RATIO_ANIMATION_MS).to_view(),
            total: CounterAnimation::new(0, self.total_questions, RATIO_ANIMATION_MS).to_view(),
        }
    }
}

/// Ring percentages: the floored total and its split by difficulty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingBreakdown {
    /// Completion percentage after the minimum-arc floor; 0 or in `[18, 100]`
    pub scaled_total: f64,
    /// Easy, medium, hard; sums to `scaled_total`
    pub percentages: [f64; 3],
}

impl RingBreakdown {
    /// Split the completion percentage across difficulties.
    ///
    /// An empty ring stays empty: the visibility floor only applies once
    /// something has been solved. Each difficulty gets a share proportional
    /// to its solve count; the last non-empty one takes the remainder so the
    /// parts add up to `scaled_total`.
    pub fn compute(stats: &LeetCodeStats) -> Self {
        let solved = Difficulty::ALL.map(|d| f64::from(stats.breakdown(d).solved));
        let category_sum: f64 = solved.iter().sum();

        if stats.total_solved == 0 || category_sum == 0.0 || stats.total_questions == 0 {
            return Self {
                scaled_total: 0.0,
                percentages: [0.0; 3],
            };
        }

        let raw = f64::from(stats.total_solved) / f64::from(stats.total_questions) * 100.0;
        let scaled_total = raw.clamp(MIN_VISIBLE_PERCENT, 100.0);

        let mut percentages = solved.map(|s| scaled_total * s / category_sum);
        if let Some(last) = solved.iter().rposition(|&s| s > 0.0) {
            let others: f64 = percentages
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != last)
                .map(|(_, p)| p)
                .sum();
            percentages[last] = scaled_total - others;
        }

        Self {
            scaled_total,
            percentages,
        }
    }

    /// Lay the segments out on a ring of circumference `circumference`.
    ///
    /// Segments are contiguous in easy, medium, hard order; empty ones are
    /// marked hidden.
    pub fn segments(&self, circumference: f64) -> Vec<RingSegment> {
        let mut offset = 0.0;
        Difficulty::ALL
            .into_iter()
            .zip(self.percentages)
            .map(|(difficulty, percentage)| {
                let arc_length = (percentage / 100.0 * circumference).max(0.0);
                let segment = RingSegment {
                    difficulty,
                    percentage,
                    arc_length,
                    arc_offset: offset,
                    visible: arc_length > 0.0,
                };
                offset += arc_length;
                segment
            })
            .collect()
    }
}

/// Circumference of the default ring.
pub fn ring_circumference() -> f64 {
    2.0 * PI * RING_RADIUS
}

/// One drawn arc of the progress ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RingSegment {
    pub difficulty: Difficulty,
    pub percentage: f64,
    pub arc_length: f64,
    /// Sum of the arc lengths drawn before this one
    pub arc_offset: f64,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DifficultyBar {
    pub difficulty: Difficulty,
    pub solved: u32,
    pub total: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RatioCounters {
    pub solved: CounterView,
    pub total: CounterView,
}
