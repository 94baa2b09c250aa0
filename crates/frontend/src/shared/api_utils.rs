//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing catalog API URLs.

/// Port the catalog backend listens on, relative to the page host
pub const API_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using [`API_PORT`] for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available (relative URLs are used then)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a fixed prefix and dynamic path segments
///
/// Segments are percent-encoded, so ids with `/` or spaces stay one segment.
///
/// # Example
/// ```ignore
/// let url = api_url("http://localhost:3000", "/api/products", &["p1", "skus"]);
/// assert_eq!(url, "http://localhost:3000/api/products/p1/skus");
/// ```
pub fn api_url(base: &str, prefix: &str, segments: &[&str]) -> String {
    let mut url = format!("{}{}", base.trim_end_matches('/'), prefix);
    for segment in segments {
        url.push('/');
        url.push_str(&urlencoding::encode(segment));
    }
    url
}
