// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Public GitHub activity event, reduced to what the heatmap needs.

use chrono::{DateTime, Utc};

/// Event kinds the heatmap distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Push,
    Create,
    PullRequest,
    Other,
}

impl EventKind {
    /// Map a GitHub event `type` string ("PushEvent", ...) to a kind.
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "PushEvent" => EventKind::Push,
            "CreateEvent" => EventKind::Create,
            "PullRequestEvent" => EventKind::PullRequest,
            _ => EventKind::Other,
        }
    }

    /// Whether events of this kind count towards daily activity.
    pub fn is_tracked(self) -> bool {
        !matches!(self, EventKind::Other)
    }
}

/// One upstream event. Immutable once fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEvent {
    pub kind: EventKind,
    pub timestamp: DateTime<Utc>,
    pub repo_name: String,
    /// Number of commits listed in a push payload, if the list was present
    pub commit_count: Option<u32>,
    /// Declared push size, if numeric
    pub push_size: Option<u32>,
}

impl ActivityEvent {
    /// Contribution of this event to its day's activity score. Never 0.
    ///
    /// Pushes count their commits, falling back to the declared size and
    /// then to 1. Every other tracked kind counts 1.
    pub fn weight(&self) -> u32 {
        match self.kind {
            EventKind::Push => self
                .commit_count
                .filter(|&n| n > 0)
                .or(self.push_size.filter(|&n| n > 0))
                .unwrap_or(1),
            _ => 1,
        }
    }
}
