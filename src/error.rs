// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

/// Which activity widget a payload or failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Widget {
    GitHub,
    LeetCode,
}

impl Widget {
    /// User-facing text shown in place of the widget when its data is unavailable.
    pub fn fallback_text(self) -> &'static str {
        match self {
            Widget::GitHub => "Failed to load GitHub activity.",
            Widget::LeetCode => "Failed to load LeetCode stats.",
        }
    }
}

impl fmt::Display for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Widget::GitHub => f.write_str("github"),
            Widget::LeetCode => f.write_str("leetcode"),
        }
    }
}

/// Failure talking to an upstream data source.
///
/// The kinds are kept apart for logging only; every one of them collapses
/// into [`AppError::DataUnavailable`] at the widget boundary.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("source unreachable: {0}")]
    Unreachable(String),

    #[error("source rejected request with HTTP {status}")]
    Rejected { status: u16 },

    #[error("malformed payload: {0}")]
    Malformed(String),

    #[error("upstream reported error: {0}")]
    UpstreamReported(String),
}

impl SourceError {
    /// Short machine-readable kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            SourceError::Unreachable(_) => "source_unreachable",
            SourceError::Rejected { .. } => "source_rejected",
            SourceError::Malformed(_) => "source_malformed",
            SourceError::UpstreamReported(_) => "upstream_reported_error",
        }
    }

    /// Collapse into the single widget-level outcome, logging the detail.
    pub fn into_unavailable(self, widget: Widget) -> AppError {
        tracing::warn!(
            widget = %widget,
            kind = self.kind(),
            error = %self,
            "Activity data unavailable"
        );
        AppError::DataUnavailable(widget)
    }
}

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Data unavailable for {0} widget")]
    DataUnavailable(Widget),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    widget: Option<Widget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback: Option<&'static str>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details, widget) = match &self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()), None)
            }
            AppError::DataUnavailable(widget) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "data_unavailable",
                None,
                Some(*widget),
            ),
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
            widget,
            fallback: widget.map(Widget::fallback_text),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
