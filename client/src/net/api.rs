//! REST helpers for the admin API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native target: stubs returning `None` since these endpoints are only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so a missing or
//! unreachable server degrades the page to its fallback content.

#![allow(clippy::unused_async)]

use super::types::{TestCaseSummary, TestStatistics};

/// Fetch the Citrus project home directory from `/api/config/projecthome`.
pub async fn fetch_project_home() -> Option<String> {
    fetch_text("/api/config/projecthome").await
}

/// Fetch the console root directory from `/api/config/root`.
pub async fn fetch_root_directory() -> Option<String> {
    fetch_text("/api/config/root").await
}

/// Fetch the discovered test cases from `/api/testcases`.
pub async fn fetch_test_cases() -> Option<Vec<TestCaseSummary>> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/api/testcases")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<TestCaseSummary>>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Fetch the test statistics from `/api/stats`.
pub async fn fetch_statistics() -> Option<TestStatistics> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/api/stats").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<TestStatistics>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// GET a plain-text endpoint, treating any failure as `None`.
async fn fetch_text(url: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        let body = resp.text().await.ok()?;
        if body.is_empty() { None } else { Some(body) }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        None
    }
}
