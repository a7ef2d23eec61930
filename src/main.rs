// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Portfolio Activity API Server
//!
//! Serves the GitHub heatmap and LeetCode ring widgets for the portfolio
//! page.

use portfolio_activity::{
    config::Config,
    services::{build_http_client, ActivityService},
    AppState,
};
use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().context("Invalid configuration")?;
    tracing::info!(port = config.port, "Starting Portfolio Activity API");

    let http = build_http_client(&config).context("Failed to build upstream HTTP client")?;
    let activity = ActivityService::from_config(&config, http);
    tracing::info!(
        github_user = %config.github_user,
        leetcode_user = %config.leetcode_user,
        window_days = config.window_days,
        "Activity sources configured"
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        activity,
    });

    // Build router
    let app = portfolio_activity::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("portfolio_activity=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}
