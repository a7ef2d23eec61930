// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Day-bucketed activity aggregation for the GitHub heatmap.
//!
//! Events are folded into one [`DayBucket`] per UTC calendar day. Rendering
//! walks a fixed window of trailing days, so days without a bucket still
//! show up with zero weight.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::ActivityEvent;
use crate::time_utils::{trailing_days, utc_day};

/// Weight thresholds for levels 1 through 4.
const LEVEL_THRESHOLDS: [u32; 4] = [1, 2, 4, 7];

/// Quantize a day's weight into a 0–4 intensity level.
///
/// Zero weight is always level 0, and a higher weight never yields a lower
/// level.
pub fn intensity_level(weight_sum: u32) -> u8 {
    LEVEL_THRESHOLDS
        .iter()
        .take_while(|&&threshold| weight_sum >= threshold)
        .count() as u8
}

/// Accumulated activity for a single calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub weight_sum: u32,
    pub distinct_repos: BTreeSet<String>,
    /// Retained events in the order they were recorded
    pub raw_events: Vec<ActivityEvent>,
}

impl DayBucket {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            weight_sum: 0,
            distinct_repos: BTreeSet::new(),
            raw_events: Vec::new(),
        }
    }

    /// Per-repository event counts for this day, ordered by repository name.
    pub fn repo_activity(&self) -> Vec<RepoActivity> {
        let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
        for event in &self.raw_events {
            *counts.entry(event.repo_name.as_str()).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .map(|(repo_name, action_count)| RepoActivity {
                repo_name: repo_name.to_string(),
                action_count,
            })
            .collect()
    }
}

/// All day buckets built from one fetch cycle.
#[derive(Debug, Clone, Default)]
pub struct ActivityMap {
    buckets: BTreeMap<NaiveDate, DayBucket>,
}

impl ActivityMap {
    /// Aggregate a flat event list. Input order does not matter.
    pub fn from_events<I>(events: I) -> Self
    where
        I: IntoIterator<Item = ActivityEvent>,
    {
        let mut map = Self::default();
        for event in events {
            map.record(event);
        }
        map
    }

    /// Fold a single event into its day bucket.
    ///
    /// Returns `false` (and leaves the map untouched) for event kinds the
    /// heatmap does not track.
    pub fn record(&mut self, event: ActivityEvent) -> bool {
        if !event.kind.is_tracked() {
            return false;
        }

        let date = utc_day(event.timestamp);
        let bucket = self
            .buckets
            .entry(date)
            .or_insert_with(|| DayBucket::new(date));

        bucket.weight_sum = bucket.weight_sum.saturating_add(event.weight());
        bucket.distinct_repos.insert(event.repo_name.clone());
        bucket.raw_events.push(event);
        true
    }

    /// Bucket for a day, if any tracked event fell on it.
    pub fn bucket(&self, date: NaiveDate) -> Option<&DayBucket> {
        self.buckets.get(&date)
    }

    /// Number of days that have at least one tracked event.
    pub fn active_days(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of retained events across all days.
    pub fn event_count(&self) -> usize {
        self.buckets.values().map(|b| b.raw_events.len()).sum()
    }

    /// Repositories and action counts for one day. Empty for inactive days.
    pub fn drill_down(&self, date: NaiveDate) -> Vec<RepoActivity> {
        self.bucket(date)
            .map(DayBucket::repo_activity)
            .unwrap_or_default()
    }

    /// Summary for a single day, zero-filled when the day had no activity.
    pub fn day(&self, date: NaiveDate) -> HeatmapDay {
        match self.bucket(date) {
            Some(bucket) => HeatmapDay {
                date,
                level: intensity_level(bucket.weight_sum),
                weight_sum: bucket.weight_sum,
                distinct_repo_count: bucket.distinct_repos.len() as u32,
                repos: bucket.repo_activity(),
            },
            None => HeatmapDay {
                date,
                level: 0,
                weight_sum: 0,
                distinct_repo_count: 0,
                repos: Vec::new(),
            },
        }
    }

    /// The `window_days` days ending at `today`, oldest first.
    pub fn render_window(&self, today: NaiveDate, window_days: u32) -> Vec<HeatmapDay> {
        trailing_days(today, window_days)
            .map(|date| self.day(date))
            .collect()
    }
}

/// One heatmap cell as consumed by the render layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HeatmapDay {
    pub date: NaiveDate,
    pub level: u8,
    pub weight_sum: u32,
    pub distinct_repo_count: u32,
    /// Drill-down for this day
    pub repos: Vec<RepoActivity>,
}

/// Drill-down entry: how many tracked events a repository had on a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RepoActivity {
    pub repo_name: String,
    pub action_count: u32,
}
