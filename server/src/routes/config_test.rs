use std::path::PathBuf;

use super::*;
use crate::services::project::ProjectConfig;

#[test]
fn display_path_round_trips_plain_paths() {
    assert_eq!(display_path(Path::new("/opt/citrus-project")), "/opt/citrus-project");
}

#[tokio::test]
async fn project_home_reports_the_configured_directory() {
    let state = AppState::new(ProjectConfig::new(
        PathBuf::from("/opt/citrus-project"),
        PathBuf::from("/opt"),
        PathBuf::from("client/dist"),
    ));
    let body = project_home(State(state)).await;
    assert_eq!(body, "/opt/citrus-project");
}

#[tokio::test]
async fn root_directory_reports_the_startup_directory() {
    let state = AppState::new(ProjectConfig::new(
        PathBuf::from("/opt/citrus-project"),
        PathBuf::from("/opt"),
        PathBuf::from("client/dist"),
    ));
    let body = root_directory(State(state)).await;
    assert_eq!(body, "/opt");
}
