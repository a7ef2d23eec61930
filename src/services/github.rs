// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GitHub REST client for the public profile and events feed.
//!
//! Handles:
//! - Profile lookup (public repos, followers)
//! - Lazy, sequential pagination of the public events feed
//! - Folding event pages into an [`ActivityMap`]

use crate::error::SourceError;
use crate::models::{ActivityEvent, ActivityMap, EventKind};
use crate::services::read_json;
use chrono::{DateTime, Utc};
use futures_util::{stream, Stream, TryStreamExt};
use serde::Deserialize;

/// Events requested per page.
pub const EVENTS_PER_PAGE: u32 = 100;
/// Upper bound on pages fetched per cycle (300 events).
pub const MAX_EVENT_PAGES: u32 = 3;

/// GitHub API client bound to one user.
#[derive(Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
    user: String,
}

impl GitHubClient {
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

    /// Get the user's public profile counters.
    pub async fn get_profile(&self) -> Result<GitHubProfile, SourceError> {
        let url = format!("{}/users/{}", self.base_url, urlencoding::encode(&self.user));
        self.get_json(&url, &[]).await
    }

    /// Get one page of the user's public events (1-indexed).
    pub async fn get_events_page(&self, page: u32) -> Result<Vec<GitHubEvent>, SourceError> {
        let url = format!(
            "{}/users/{}/events",
            self.base_url,
            urlencoding::encode(&self.user)
        );
        let events: Vec<GitHubEvent> = self
            .get_json(
                &url,
                &[
                    ("per_page", EVENTS_PER_PAGE.to_string()),
                    ("page", page.to_string()),
                ],
            )
            .await?;

        tracing::debug!(page, count = events.len(), "Fetched GitHub events page");
        Ok(events)
    }

    /// Event pages in increasing page order, requested one at a time.
    ///
    /// The stream ends after [`MAX_EVENT_PAGES`] pages, at an empty page, or
    /// after the first page shorter than [`EVENTS_PER_PAGE`]. Empty pages are
    /// never yielded.
    pub fn event_pages(&self) -> impl Stream<Item = Result<Vec<GitHubEvent>, SourceError>> + '_ {
        stream::try_unfold(Some(1u32), move |next| async move {
            let Some(page) = next else {
                return Ok::<_, SourceError>(None);
            };

            let events = self.get_events_page(page).await?;
            if events.is_empty() {
                return Ok(None);
            }

            let exhausted = events.len() < EVENTS_PER_PAGE as usize || page >= MAX_EVENT_PAGES;
            let next = (!exhausted).then_some(page + 1);
            Ok(Some((events, next)))
        })
    }

    /// Fetch every event page and fold it into a fresh activity map.
    ///
    /// A failure on any page discards everything fetched so far.
    pub async fn fetch_activity(&self) -> Result<ActivityMap, SourceError> {
        let map = self
            .event_pages()
            .try_fold(ActivityMap::default(), |mut map, page| async move {
                for event in page {
                    map.record(event.into());
                }
                Ok(map)
            })
            .await?;

        tracing::info!(
            user = %self.user,
            active_days = map.active_days(),
            events = map.event_count(),
            "GitHub activity aggregated"
        );
        Ok(map)
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, SourceError> {
        let response = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .query(query)
            .send()
            .await
            .map_err(|e| SourceError::Unreachable(e.to_string()))?;

        read_json(response).await
    }
}

/// Public profile fields shown next to the heatmap.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubProfile {
    pub public_repos: u32,
    pub followers: u32,
}

/// Event object from the public events feed.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub created_at: DateTime<Utc>,
    pub repo: GitHubRepoRef,
    #[serde(default)]
    pub payload: GitHubEventPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepoRef {
    pub name: String,
}

/// The payload fields the weighting rule reads. Everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitHubEventPayload {
    #[serde(default)]
    pub commits: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub size: Option<serde_json::Value>,
}

impl From<GitHubEvent> for ActivityEvent {
    fn from(event: GitHubEvent) -> Self {
        let commit_count = event
            .payload
            .commits
            .as_ref()
            .map(|commits| u32::try_from(commits.len()).unwrap_or(u32::MAX));
        let push_size = event
            .payload
            .size
            .as_ref()
            .and_then(serde_json::Value::as_u64)
            .map(|n| u32::try_from(n).unwrap_or(u32::MAX));

        ActivityEvent {
            kind: EventKind::from_type_name(&event.event_type),
            timestamp: event.created_at,
            repo_name: event.repo.name,
            commit_count,
            push_size,
        }
    }
}
