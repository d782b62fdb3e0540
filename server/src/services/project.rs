//! Project configuration service.
//!
//! Resolves the directories the console reports and serves from:
//! the Citrus project home (the tree scanned for test cases), the root
//! directory the server was started in, and the static directory the
//! compiled client bundle is served from.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use std::env;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable naming the Citrus project home.
pub const PROJECT_HOME_VAR: &str = "CITRUS_ADMIN_PROJECT_HOME";
/// Environment variable naming the client bundle directory.
pub const STATIC_DIR_VAR: &str = "CITRUS_ADMIN_STATIC_DIR";

const DEFAULT_STATIC_DIR: &str = "client/dist";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to resolve the working directory")]
    WorkingDirectory(#[source] std::io::Error),
    #[error("project home {0:?} is not a directory")]
    NotADirectory(PathBuf),
    #[error("failed to canonicalize project home {path:?}")]
    Canonicalize {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolved project directories, immutable after startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectConfig {
    project_home: PathBuf,
    root_directory: PathBuf,
    static_dir: PathBuf,
}

impl ProjectConfig {
    #[must_use]
    pub fn new(project_home: PathBuf, root_directory: PathBuf, static_dir: PathBuf) -> Self {
        Self { project_home, root_directory, static_dir }
    }

    /// Resolve from the environment.
    ///
    /// The project home comes from `CITRUS_ADMIN_PROJECT_HOME`, falling
    /// back to the working directory, and must exist; it is
    /// canonicalized so the API reports stable absolute paths. The
    /// static directory defaults to `client/dist`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let root = env::current_dir().map_err(ConfigError::WorkingDirectory)?;
        let home = env::var(PROJECT_HOME_VAR).map_or_else(|_| root.clone(), PathBuf::from);
        if !home.is_dir() {
            return Err(ConfigError::NotADirectory(home));
        }
        let home = home
            .canonicalize()
            .map_err(|source| ConfigError::Canonicalize { path: home.clone(), source })?;
        let static_dir =
            env::var(STATIC_DIR_VAR).map_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from);

        Ok(Self::new(home, root, static_dir))
    }

    /// The Citrus project home, the tree scanned for test cases.
    #[must_use]
    pub fn project_home(&self) -> &Path {
        &self.project_home
    }

    /// The directory the console was started in.
    #[must_use]
    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    /// Where the compiled client bundle is served from.
    #[must_use]
    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }
}
