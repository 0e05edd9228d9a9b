//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Build-time override for the log service base URL, e.g.
/// `LOGDASH_API_BASE=https://logs.example.com/api trunk build`.
const API_BASE_OVERRIDE: Option<&str> = option_env!("LOGDASH_API_BASE");

/// Port the log service listens on when no override is given
const DEFAULT_API_PORT: u16 = 8080;

/// Get the base URL for API requests
///
/// Uses `LOGDASH_API_BASE` when it was set at build time, otherwise
/// constructs the URL from the current window location on port 8080.
///
/// # Returns
/// - API base URL like "http://localhost:8080/api"
/// - Empty string if window is not available and no override is set
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE.filter(|b| !b.trim().is_empty()) {
        return trim_base(base);
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}/api", protocol, hostname, DEFAULT_API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/logs/abc123");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// Append an encoded query string built from `(name, value)` pairs
pub fn with_query(url: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return url.to_string();
    }
    let query = pairs
        .iter()
        .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", url, query)
}

fn trim_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

fn join_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return trim_base(base);
    }
    format!("{}/{}", trim_base(base), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_handles_slashes() {
        assert_eq!(join_url("http://h:8080/api/", "/logs"), "http://h:8080/api/logs");
        assert_eq!(join_url("http://h:8080/api", "logs/1"), "http://h:8080/api/logs/1");
        assert_eq!(join_url("/api", ""), "/api");
    }

    #[test]
    fn test_with_query_encodes_values() {
        let url = with_query(
            "/api/logs",
            &[
                ("serverId", "srv 1".to_string()),
                ("from", "2024-01-01T00:00:00.000Z".to_string()),
                ("page", "1".to_string()),
            ],
        );
        assert_eq!(
            url,
            "/api/logs?serverId=srv%201&from=2024-01-01T00%3A00%3A00.000Z&page=1"
        );
    }

    #[test]
    fn test_with_query_without_pairs() {
        assert_eq!(with_query("/api/logs", &[]), "/api/logs");
    }
}
