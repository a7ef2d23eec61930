//! Application configuration loaded from environment variables.
//!
//! Every value has a default so the service runs with no environment at all;
//! a `.env` file is honoured for local development.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Default GitHub account shown in the heatmap widget.
const DEFAULT_GITHUB_USER: &str = "MYNKCHOMIYA";
/// Default LeetCode account shown in the ring widget.
const DEFAULT_LEETCODE_USER: &str = "MYNK_CHOMIYA";
/// Number of calendar days rendered in the heatmap.
pub const DEFAULT_WINDOW_DAYS: u32 = 60;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub login whose public activity is aggregated
    pub github_user: String,
    /// LeetCode username looked up on the stats proxy
    pub leetcode_user: String,
    /// GitHub REST API base URL (overridable for tests)
    pub github_api_url: String,
    /// LeetCode stats proxy base URL
    pub leetcode_api_url: String,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Heatmap lookback window in calendar days
    pub window_days: u32,
    /// Per-request timeout for upstream calls
    pub upstream_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let window_days = parse_var("HEATMAP_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;
        if window_days == 0 {
            return Err(ConfigError::Invalid {
                name: "HEATMAP_WINDOW_DAYS",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            github_user: env::var("GITHUB_USER")
                .unwrap_or_else(|_| DEFAULT_GITHUB_USER.to_string()),
            leetcode_user: env::var("LEETCODE_USER")
                .unwrap_or_else(|_| DEFAULT_LEETCODE_USER.to_string()),
            github_api_url: env::var("GITHUB_API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "https://api.github.com".to_string()),
            leetcode_api_url: env::var("LEETCODE_API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "https://leetcode-stats-api.herokuapp.com".to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: parse_var("PORT", 8080)?,
            window_days,
            upstream_timeout: Duration::from_secs(parse_var("UPSTREAM_TIMEOUT_SECS", 10)?),
        })
    }

    /// Offline config for tests; upstream URLs point nowhere until overridden.
    pub fn test_default() -> Self {
        Self {
            github_user: "octocat".to_string(),
            leetcode_user: "octocat".to_string(),
            github_api_url: "http://127.0.0.1:9".to_string(),
            leetcode_api_url: "http://127.0.0.1:9".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            window_days: DEFAULT_WINDOW_DAYS,
            upstream_timeout: Duration::from_secs(2),
        }
    }
}

/// Parse an optional numeric variable, falling back to `default` when unset.
fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
