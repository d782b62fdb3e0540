#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

/// Project configuration fetched once at startup.
///
/// `loading` stays set until both directory fetches settle, so pages can
/// distinguish "still fetching" from "the server had no answer".
#[derive(Clone, Debug)]
pub struct ProjectState {
    pub project_home: Option<String>,
    pub root_directory: Option<String>,
    pub loading: bool,
}

impl Default for ProjectState {
    fn default() -> Self {
        Self { project_home: None, root_directory: None, loading: true }
    }
}

impl ProjectState {
    /// Record the directories returned by the config API.
    pub fn resolve(&mut self, project_home: Option<String>, root_directory: Option<String>) {
        self.project_home = project_home;
        self.root_directory = root_directory;
        self.loading = false;
    }

    /// Display string for the project home, with a placeholder while
    /// loading or when the server had no answer.
    #[must_use]
    pub fn project_home_label(&self) -> String {
        if self.loading {
            return "loading...".to_owned();
        }
        self.project_home.clone().unwrap_or_else(|| "unavailable".to_owned())
    }
}
