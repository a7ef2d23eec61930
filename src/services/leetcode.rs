// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client for the LeetCode stats proxy.

use crate::error::SourceError;
use crate::models::{LeetCodeStats, StatsParts};
use crate::services::read_json;
use serde::Deserialize;

/// LeetCode stats proxy client bound to one user.
#[derive(Clone)]
pub struct LeetCodeClient {
    http: reqwest::Client,
    base_url: String,
    user: String,
}

impl LeetCodeClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            user: user.into(),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// Fetch and normalize the user's solve statistics.
    ///
    /// A response carrying `status: "error"` is treated as a failure even
    /// when the HTTP status was a success.
    pub async fn get_stats(&self) -> Result<LeetCodeStats, SourceError> {
        let url = format!("{}/{}", self.base_url, urlencoding::encode(&self.user));

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Unreachable(e.to_string()))?;

        let body: LeetCodeStatsResponse = read_json(response).await?;
        body.into_stats()
    }
}

/// Raw stats proxy response. Every numeric field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeetCodeStatsResponse {
    pub status: Option<String>,
    pub message: Option<String>,
    pub total_questions: Option<u32>,
    pub total_solved: Option<u32>,
    pub easy_solved: Option<u32>,
    pub medium_solved: Option<u32>,
    pub hard_solved: Option<u32>,
    pub total_easy: Option<u32>,
    pub total_medium: Option<u32>,
    pub total_hard: Option<u32>,
}

impl LeetCodeStatsResponse {
    /// Reject upstream-reported errors, then normalize into [`LeetCodeStats`].
    pub fn into_stats(self) -> Result<LeetCodeStats, SourceError> {
        if self.status.as_deref() == Some("error") {
            return Err(SourceError::UpstreamReported(
                self.message
                    .unwrap_or_else(|| "stats proxy returned an error".to_string()),
            ));
        }

        Ok(StatsParts {
            total_questions: self.total_questions,
            total_solved: self.total_solved,
            easy_solved: self.easy_solved,
            medium_solved: self.medium_solved,
            hard_solved: self.hard_solved,
            total_easy: self.total_easy,
            total_medium: self.total_medium,
            total_hard: self.total_hard,
        }
        .into())
    }
}
