//! Test-case discovery routes.

#[cfg(test)]
#[path = "testcases_test.rs"]
mod testcases_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use crate::services::testcases::{self, ScanError, TestCase, TestStatistics};
use crate::state::AppState;

/// `GET /api/testcases` — discovered test cases, sorted by name.
pub async fn list_test_cases(
    State(state): State<AppState>,
) -> Result<Json<Vec<TestCase>>, StatusCode> {
    let cases = testcases::scan_test_cases(state.config.project_home())
        .map_err(scan_error_to_status)?;
    Ok(Json(cases))
}

/// `GET /api/stats` — counts over the discovered test cases.
pub async fn statistics(
    State(state): State<AppState>,
) -> Result<Json<TestStatistics>, StatusCode> {
    let cases = testcases::scan_test_cases(state.config.project_home())
        .map_err(scan_error_to_status)?;
    Ok(Json(testcases::statistics(&cases)))
}

fn scan_error_to_status(err: ScanError) -> StatusCode {
    tracing::warn!(error = %err, "test case scan failed");
    match err {
        ScanError::NotADirectory(_) => StatusCode::NOT_FOUND,
        ScanError::Read { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
