// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod counter;
pub mod event;
pub mod heatmap;
pub mod leetcode;

pub use counter::{CounterAnimation, CounterView};
pub use event::{ActivityEvent, EventKind};
pub use heatmap::{intensity_level, ActivityMap, DayBucket, HeatmapDay, RepoActivity};
pub use leetcode::{
    Difficulty, DifficultyBreakdown, LeetCodeStats, RingBreakdown, RingSegment, StatsParts,
};
