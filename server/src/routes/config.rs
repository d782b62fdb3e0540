//! Project configuration routes.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::Path;

use axum::extract::State;

use crate::state::AppState;

/// `GET /api/config/projecthome` — the Citrus project home directory.
pub async fn project_home(State(state): State<AppState>) -> String {
    display_path(state.config.project_home())
}

/// `GET /api/config/root` — the directory the console was started in.
pub async fn root_directory(State(state): State<AppState>) -> String {
    display_path(state.config.root_directory())
}

/// Lossy display form of a filesystem path for the plain-text API.
fn display_path(path: &Path) -> String {
    path.display().to_string()
}
