// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Portfolio activity: live GitHub and LeetCode widgets for a portfolio page
//!
//! This crate fetches public activity from GitHub and a LeetCode stats proxy,
//! aggregates it into a day-bucketed heatmap and a progress ring, and serves
//! render-ready JSON to the page.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::ActivityService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub activity: ActivityService,
}
