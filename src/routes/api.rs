// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity widget API routes.
//!
//! Every payload here is render-ready: the page only draws what it gets and
//! never recomputes weights, levels or percentages.

use crate::error::{AppError, Result, Widget};
use crate::models::leetcode::{ring_circumference, DifficultyBar, RatioCounters};
use crate::models::{HeatmapDay, LeetCodeStats, RingSegment};
use crate::services::GitHubSnapshot;
use crate::time_utils::{local_today, parse_day, trailing_days};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Widget routes (public, read-only).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/github", get(get_github))
        .route("/api/github/days/{date}", get(get_github_day))
        .route("/api/leetcode", get(get_leetcode))
        .route("/api/activity", get(get_activity))
}

// ─── GitHub Heatmap ──────────────────────────────────────────

/// GitHub widget payload.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GitHubResponse {
    pub user: String,
    pub public_repos: u32,
    pub followers: u32,
    pub window_days: u32,
    /// Oldest first, exactly `window_days` entries
    pub days: Vec<HeatmapDay>,
}

fn github_response(
    state: &AppState,
    snapshot: &GitHubSnapshot,
    today: NaiveDate,
) -> GitHubResponse {
    GitHubResponse {
        user: state.activity.github_user().to_string(),
        public_repos: snapshot.profile.public_repos,
        followers: snapshot.profile.followers,
        window_days: state.config.window_days,
        days: snapshot
            .activity
            .render_window(today, state.config.window_days),
    }
}

/// Get the heatmap for the trailing window.
async fn get_github(State(state): State<Arc<AppState>>) -> Result<Json<GitHubResponse>> {
    let snapshot = state.activity.github_snapshot().await?;
    Ok(Json(github_response(&state, &snapshot, local_today())))
}

/// Get the drill-down for a single day inside the window.
async fn get_github_day(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Result<Json<HeatmapDay>> {
    let date = parse_day(&date).ok_or_else(|| {
        AppError::BadRequest("Invalid date: expected YYYY-MM-DD".to_string())
    })?;

    let today = local_today();
    if !trailing_days(today, state.config.window_days).any(|d| d == date) {
        return Err(AppError::BadRequest(format!(
            "Date {} is outside the {}-day activity window",
            date, state.config.window_days
        )));
    }

    tracing::debug!(%date, "Fetching GitHub day drill-down");

    let snapshot = state.activity.github_snapshot().await?;
    Ok(Json(snapshot.activity.day(date)))
}

// ─── LeetCode Ring ───────────────────────────────────────────

/// LeetCode widget payload.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LeetCodeResponse {
    pub user: String,
    pub total_solved: u32,
    pub total_questions: u32,
    /// Ring completion after the minimum-arc floor
    pub scaled_total: f64,
    pub segments: Vec<RingSegment>,
    pub bars: Vec<DifficultyBar>,
    pub ratio: RatioCounters,
}

fn leetcode_response(state: &AppState, stats: &LeetCodeStats) -> LeetCodeResponse {
    let ring = stats.ring();
    LeetCodeResponse {
        user: state.activity.leetcode_user().to_string(),
        total_solved: stats.total_solved,
        total_questions: stats.total_questions,
        scaled_total: ring.scaled_total,
        segments: ring.segments(ring_circumference()),
        bars: stats.bars(),
        ratio: stats.ratio_counters(),
    }
}

/// Get ring segments, difficulty bars and ratio counters.
async fn get_leetcode(State(state): State<Arc<AppState>>) -> Result<Json<LeetCodeResponse>> {
    let stats = state.activity.leetcode_stats().await?;
    Ok(Json(leetcode_response(&state, &stats)))
}

// ─── Combined ────────────────────────────────────────────────

/// One widget's slot in the combined payload.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WidgetSection<T> {
    Ok(T),
    Unavailable { fallback: String },
}

impl<T> WidgetSection<T> {
    fn from_result(result: Result<T>, widget: Widget) -> Self {
        match result {
            Ok(payload) => WidgetSection::Ok(payload),
            Err(err) => {
                if !matches!(err, AppError::DataUnavailable(_)) {
                    tracing::error!(widget = %widget, error = %err, "Widget failed");
                }
                WidgetSection::Unavailable {
                    fallback: widget.fallback_text().to_string(),
                }
            }
        }
    }
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityResponse {
    pub github: WidgetSection<GitHubResponse>,
    pub leetcode: WidgetSection<LeetCodeResponse>,
}

/// Get both widgets at once. A failing widget never blocks the other.
async fn get_activity(State(state): State<Arc<AppState>>) -> Json<ActivityResponse> {
    let today = local_today();

    let (github, leetcode) = tokio::join!(
        state.activity.github_snapshot(),
        state.activity.leetcode_stats()
    );

    let github = github.map(|snapshot| github_response(&state, &snapshot, today));
    let leetcode = leetcode.map(|stats| leetcode_response(&state, &stats));

    Json(ActivityResponse {
        github: WidgetSection::from_result(github, Widget::GitHub),
        leetcode: WidgetSection::from_result(leetcode, Widget::LeetCode),
    })
}
