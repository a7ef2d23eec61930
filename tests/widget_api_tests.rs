// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Widget API integration tests against a fake upstream.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;
use common::{
    create_test_app, days_ago, default_profile, push_event, simple_event, spawn_upstream,
    Upstream,
};

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn leetcode_body(total_solved: u32, easy: u32, medium: u32, hard: u32) -> Value {
    json!({
        "status": "success",
        "message": "retrieved",
        "totalSolved": total_solved,
        "totalQuestions": 100,
        "easySolved": easy,
        "totalEasy": 30,
        "mediumSolved": medium,
        "totalMedium": 50,
        "hardSolved": hard,
        "totalHard": 20
    })
}

#[tokio::test]
async fn test_github_heatmap_payload() {
    let at = days_ago(4);
    let upstream = Upstream {
        profile: Some(default_profile()),
        event_pages: vec![vec![
            push_event(at, "me/site", 2),
            simple_event("CreateEvent", at, "me/site"),
            simple_event("WatchEvent", at, "other/repo"),
        ]],
        ..Default::default()
    };
    let base = spawn_upstream(upstream).await;
    let (app, _) = create_test_app(&base);

    let (status, body) = get_json(app, "/api/github").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["public_repos"], 12);
    assert_eq!(body["followers"], 34);
    assert_eq!(body["window_days"], 60);

    let days = body["days"].as_array().unwrap();
    assert_eq!(days.len(), 60);

    let dates: Vec<&str> = days.iter().map(|d| d["date"].as_str().unwrap()).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(dates, sorted, "days must be strictly increasing");

    let key = at.date_naive().format("%Y-%m-%d").to_string();
    let day = days.iter().find(|d| d["date"] == key.as_str()).unwrap();
    assert_eq!(day["weight_sum"], 3);
    assert_eq!(day["level"], 2);
    assert_eq!(day["distinct_repo_count"], 1);
    assert_eq!(
        day["repos"],
        json!([{ "repo_name": "me/site", "action_count": 2 }])
    );

    let active = days.iter().filter(|d| d["weight_sum"] != 0).count();
    assert_eq!(active, 1);
}

#[tokio::test]
async fn test_github_profile_failure_shows_fallback() {
    let upstream = Upstream::default(); // profile answers 404
    let base = spawn_upstream(upstream.clone()).await;
    let (app, _) = create_test_app(&base);

    let (status, body) = get_json(app, "/api/github").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "data_unavailable");
    assert_eq!(body["widget"], "github");
    assert_eq!(body["fallback"], "Failed to load GitHub activity.");
    assert!(upstream.pages_requested().is_empty());
}

#[tokio::test]
async fn test_github_malformed_events_show_fallback() {
    let upstream = Upstream {
        profile: Some(default_profile()),
        event_pages: vec![vec![json!({ "type": "PushEvent" })]],
        ..Default::default()
    };
    let base = spawn_upstream(upstream).await;
    let (app, _) = create_test_app(&base);

    let (status, body) = get_json(app, "/api/github").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "data_unavailable");
}

#[tokio::test]
async fn test_github_day_drill_down() {
    let at = days_ago(10);
    let upstream = Upstream {
        profile: Some(default_profile()),
        event_pages: vec![vec![
            push_event(at, "me/api", 6),
            simple_event("PullRequestEvent", at, "me/api"),
            simple_event("CreateEvent", at, "me/web"),
        ]],
        ..Default::default()
    };
    let base = spawn_upstream(upstream).await;
    let (app, _) = create_test_app(&base);

    let key = at.date_naive().format("%Y-%m-%d").to_string();
    let (status, body) = get_json(app, &format!("/api/github/days/{}", key)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["weight_sum"], 8);
    assert_eq!(body["level"], 4);
    assert_eq!(
        body["repos"],
        json!([
            { "repo_name": "me/api", "action_count": 2 },
            { "repo_name": "me/web", "action_count": 1 }
        ])
    );
}

#[tokio::test]
async fn test_github_day_rejects_bad_dates() {
    let base = spawn_upstream(Upstream::default()).await;
    let (app, _) = create_test_app(&base);

    let (status, _) = get_json(app.clone(), "/api/github/days/not-a-date").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get_json(app, "/api/github/days/1999-01-01").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_leetcode_ring_payload() {
    let upstream = Upstream {
        leetcode: Some(leetcode_body(10, 6, 3, 1)),
        ..Default::default()
    };
    let base = spawn_upstream(upstream).await;
    let (app, _) = create_test_app(&base);

    let (status, body) = get_json(app, "/api/leetcode").await;

    assert_eq!(status, StatusCode::OK);
    // 10% solved is below the 18-point floor.
    assert_eq!(body["scaled_total"], 18.0);

    let segments = body["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0]["difficulty"], "easy");
    assert_eq!(segments[2]["difficulty"], "hard");
    let sum: f64 = segments
        .iter()
        .map(|s| s["percentage"].as_f64().unwrap())
        .sum();
    assert!((sum - 18.0).abs() < 1e-9);
    assert!(segments.iter().all(|s| s["visible"] == true));
    assert_eq!(segments[0]["arc_offset"], 0.0);

    let bars = body["bars"].as_array().unwrap();
    assert_eq!(bars[0]["solved"], 6);
    assert_eq!(bars[0]["total"], 30);
    assert_eq!(bars[0]["percentage"], 20.0);

    let solved = &body["ratio"]["solved"];
    assert_eq!(solved["start"], 0);
    assert_eq!(solved["end"], 10);
    assert_eq!(solved["duration_ms"], 1400);
    assert_eq!(solved["frames"].as_array().unwrap().last().unwrap(), 10);
}

#[tokio::test]
async fn test_leetcode_zero_solved_has_empty_ring() {
    let upstream = Upstream {
        leetcode: Some(json!({ "totalSolved": 0, "totalQuestions": 100 })),
        ..Default::default()
    };
    let base = spawn_upstream(upstream).await;
    let (app, _) = create_test_app(&base);

    let (status, body) = get_json(app, "/api/leetcode").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["scaled_total"], 0.0);
    for segment in body["segments"].as_array().unwrap() {
        assert_eq!(segment["percentage"], 0.0);
        assert_eq!(segment["visible"], false);
    }
    let frames = body["ratio"]["solved"]["frames"].as_array().unwrap();
    assert!(frames.iter().all(|v| v == 0));
}

#[tokio::test]
async fn test_leetcode_upstream_error_shows_fallback() {
    let upstream = Upstream {
        leetcode: Some(json!({ "status": "error", "message": "user does not exist" })),
        ..Default::default()
    };
    let base = spawn_upstream(upstream).await;
    let (app, _) = create_test_app(&base);

    let (status, body) = get_json(app, "/api/leetcode").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["widget"], "leetcode");
    assert_eq!(body["fallback"], "Failed to load LeetCode stats.");
}

#[tokio::test]
async fn test_combined_widgets_degrade_independently() {
    let upstream = Upstream {
        profile: Some(default_profile()),
        event_pages: vec![vec![push_event(days_ago(1), "me/site", 1)]],
        failing_page: Some(1),
        leetcode: Some(leetcode_body(50, 30, 15, 5)),
        ..Default::default()
    };
    let base = spawn_upstream(upstream).await;
    let (app, _) = create_test_app(&base);

    let (status, body) = get_json(app, "/api/activity").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["github"]["status"], "unavailable");
    assert_eq!(body["github"]["fallback"], "Failed to load GitHub activity.");
    assert_eq!(body["leetcode"]["status"], "ok");
    assert_eq!(body["leetcode"]["scaled_total"], 50.0);
}

#[tokio::test]
async fn test_combined_widgets_both_ok() {
    let upstream = Upstream {
        profile: Some(default_profile()),
        leetcode: Some(leetcode_body(0, 0, 0, 0)),
        ..Default::default()
    };
    let base = spawn_upstream(upstream).await;
    let (app, _) = create_test_app(&base);

    let (_, body) = get_json(app, "/api/activity").await;

    assert_eq!(body["github"]["status"], "ok");
    assert_eq!(body["github"]["days"].as_array().unwrap().len(), 60);
    assert_eq!(body["leetcode"]["status"], "ok");
}

#[tokio::test]
async fn test_health_and_headers() {
    let base = spawn_upstream(Upstream::default()).await;
    let (app, _) = create_test_app(&base);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("Cache-Control").unwrap(), "no-store");
}

#[tokio::test]
async fn test_cors_matches_origin_host_not_prefix() {
    let base = spawn_upstream(Upstream::default()).await;
    let (app, _) = create_test_app(&base);

    let allow_origin = |app: Router, origin: &'static str| async move {
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("Origin", origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        response
            .headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().unwrap().to_string())
    };

    assert_eq!(
        allow_origin(app.clone(), "http://localhost:5173").await.as_deref(),
        Some("http://localhost:5173")
    );
    assert_eq!(allow_origin(app, "http://localhost.evil.example").await, None);
}
