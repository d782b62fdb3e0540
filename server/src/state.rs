//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the resolved project configuration. The console is
//! read-only over the project tree, so there is no mutable shared
//! state to guard; test cases are rescanned per request.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use crate::services::project::ProjectConfig;

/// Shared application state. Clone is required by Axum; the config is
/// Arc-wrapped so clones stay cheap.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ProjectConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ProjectConfig) -> Self {
        Self { config: Arc::new(config) }
    }
}
