#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::collections::HashMap;

use crate::router::View;

/// Navigation state written by the route listeners.
///
/// Tracks the active view and how many times each view has been
/// activated this session.
#[derive(Clone, Debug, Default)]
pub struct NavState {
    pub active: Option<View>,
    activations: HashMap<View, u32>,
}

impl NavState {
    /// Record an activation of `view`, making it the active view.
    pub fn activate(&mut self, view: View) {
        self.active = Some(view);
        *self.activations.entry(view).or_insert(0) += 1;
    }

    /// How many times `view` has been activated.
    #[must_use]
    pub fn activation_count(&self, view: View) -> u32 {
        self.activations.get(&view).copied().unwrap_or(0)
    }

    /// Total activations across every view this session.
    #[must_use]
    pub fn total_activations(&self) -> u32 {
        self.activations.values().sum()
    }

    /// Window title for the current view.
    #[must_use]
    pub fn title(&self) -> String {
        match self.active {
            Some(view) => format!("Citrus Admin: {}", view.title()),
            None => "Citrus Admin".to_owned(),
        }
    }
}
