// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Duration, Utc};
use portfolio_activity::config::Config;
use portfolio_activity::routes::create_router;
use portfolio_activity::services::{build_http_client, ActivityService};
use portfolio_activity::AppState;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Canned responses served by the fake GitHub / LeetCode upstream.
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct Upstream {
    /// Profile body; `None` answers 404
    pub profile: Option<Value>,
    /// Event pages by index (page 1 first); pages past the end are empty
    pub event_pages: Vec<Vec<Value>>,
    /// Page number that answers 500
    pub failing_page: Option<u32>,
    /// Stats proxy body; `None` answers 503
    pub leetcode: Option<Value>,
    /// Every events page requested, in order
    pub requested_pages: Arc<Mutex<Vec<u32>>>,
}

#[allow(dead_code)]
impl Upstream {
    pub fn pages_requested(&self) -> Vec<u32> {
        self.requested_pages.lock().unwrap().clone()
    }
}

async fn profile(State(up): State<Upstream>) -> Response {
    match up.profile {
        Some(body) => Json(body).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn events(
    State(up): State<Upstream>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let page: u32 = params
        .get("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(1);
    assert_eq!(params.get("per_page").map(String::as_str), Some("100"));
    up.requested_pages.lock().unwrap().push(page);

    if up.failing_page == Some(page) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    let body = up
        .event_pages
        .get(page as usize - 1)
        .cloned()
        .unwrap_or_default();
    Json(Value::Array(body)).into_response()
}

async fn leetcode(State(up): State<Upstream>) -> Response {
    match up.leetcode {
        Some(body) => Json(body).into_response(),
        None => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}

/// Serve `upstream` on an ephemeral local port and return its base URL.
pub async fn spawn_upstream(upstream: Upstream) -> String {
    let router = Router::new()
        .route("/users/{user}", get(profile))
        .route("/users/{user}/events", get(events))
        .route("/leetcode/{user}", get(leetcode))
        .with_state(upstream);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind upstream listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Create a test app whose upstream clients point at `base_url`.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(base_url: &str) -> (Router, Arc<AppState>) {
    let mut config = Config::test_default();
    config.github_api_url = base_url.to_string();
    config.leetcode_api_url = format!("{}/leetcode", base_url);

    let http = build_http_client(&config).expect("Failed to build HTTP client");
    let activity = ActivityService::from_config(&config, http);

    let state = Arc::new(AppState { config, activity });
    (create_router(state.clone()), state)
}

/// Timestamp `days_ago` days before now, at the current time of day.
#[allow(dead_code)]
pub fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(days)
}

#[allow(dead_code)]
pub fn push_event(at: DateTime<Utc>, repo: &str, commits: usize) -> Value {
    json!({
        "type": "PushEvent",
        "created_at": at.to_rfc3339(),
        "repo": { "name": repo },
        "payload": { "commits": vec![json!({}); commits], "size": commits }
    })
}

#[allow(dead_code)]
pub fn simple_event(kind: &str, at: DateTime<Utc>, repo: &str) -> Value {
    json!({
        "type": kind,
        "created_at": at.to_rfc3339(),
        "repo": { "name": repo },
        "payload": {}
    })
}

/// A full page of single-commit pushes on one day.
#[allow(dead_code)]
pub fn full_page(at: DateTime<Utc>, repo: &str) -> Vec<Value> {
    (0..100).map(|_| push_event(at, repo, 1)).collect()
}

#[allow(dead_code)]
pub fn default_profile() -> Value {
    json!({ "public_repos": 12, "followers": 34, "login": "octocat" })
}
