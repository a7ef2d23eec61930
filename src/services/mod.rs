// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - upstream clients and widget orchestration.

pub mod activity;
pub mod github;
pub mod leetcode;

pub use activity::{ActivityService, GitHubSnapshot};
pub use github::GitHubClient;
pub use leetcode::LeetCodeClient;

use crate::config::Config;
use crate::error::SourceError;
use serde::de::DeserializeOwned;

/// Build the HTTP client shared by all upstream clients.
///
/// GitHub rejects requests without a `User-Agent`, so one is always set.
pub fn build_http_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(config.upstream_timeout)
        .build()
}

/// Check response status and parse the JSON body.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, SourceError> {
    let status = response.status();
    if !status.is_success() {
        if status.as_u16() == 403 || status.as_u16() == 429 {
            tracing::warn!(status = status.as_u16(), "Upstream rate limit hit");
        }
        return Err(SourceError::Rejected {
            status: status.as_u16(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| SourceError::Unreachable(e.to_string()))?;

    serde_json::from_slice(&body).map_err(|e| SourceError::Malformed(e.to_string()))
}
