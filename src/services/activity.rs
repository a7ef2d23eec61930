// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity widget service.
//!
//! Runs one fetch cycle per widget:
//! 1. GitHub: profile, then up to three event pages folded into day buckets
//! 2. LeetCode: one stats response normalized into ring inputs
//!
//! Each widget fails on its own. Any upstream failure becomes
//! [`DataUnavailable`](crate::error::AppError::DataUnavailable) for that
//! widget and nothing partial is kept.

use crate::config::Config;
use crate::error::{Result, Widget};
use crate::models::{ActivityMap, LeetCodeStats};
use crate::services::github::GitHubProfile;
use crate::services::{GitHubClient, LeetCodeClient};

/// Everything one GitHub fetch cycle produced.
#[derive(Debug, Clone)]
pub struct GitHubSnapshot {
    pub profile: GitHubProfile,
    pub activity: ActivityMap,
}

/// Fetches and aggregates data for both activity widgets.
#[derive(Clone)]
pub struct ActivityService {
    github: GitHubClient,
    leetcode: LeetCodeClient,
}

impl ActivityService {
    pub fn new(github: GitHubClient, leetcode: LeetCodeClient) -> Self {
        Self { github, leetcode }
    }

    /// Build both clients from config over a shared HTTP client.
    pub fn from_config(config: &Config, http: reqwest::Client) -> Self {
        Self::new(
            GitHubClient::new(http.clone(), &config.github_api_url, &config.github_user),
            LeetCodeClient::new(http, &config.leetcode_api_url, &config.leetcode_user),
        )
    }

    pub fn github_user(&self) -> &str {
        self.github.user()
    }

    pub fn leetcode_user(&self) -> &str {
        self.leetcode.user()
    }

    /// Fetch the GitHub profile and aggregate recent public events.
    pub async fn github_snapshot(&self) -> Result<GitHubSnapshot> {
        tracing::info!(user = %self.github.user(), "Fetching GitHub activity");

        let profile = self
            .github
            .get_profile()
            .await
            .map_err(|e| e.into_unavailable(Widget::GitHub))?;

        let activity = self
            .github
            .fetch_activity()
            .await
            .map_err(|e| e.into_unavailable(Widget::GitHub))?;

        Ok(GitHubSnapshot { profile, activity })
    }

    /// Fetch LeetCode solve statistics.
    pub async fn leetcode_stats(&self) -> Result<LeetCodeStats> {
        tracing::info!(user = %self.leetcode.user(), "Fetching LeetCode stats");

        let stats = self
            .leetcode
            .get_stats()
            .await
            .map_err(|e| e.into_unavailable(Widget::LeetCode))?;

        tracing::info!(
            total_solved = stats.total_solved,
            total_questions = stats.total_questions,
            "LeetCode stats fetched"
        );
        Ok(stats)
    }
}
