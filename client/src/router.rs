//! Route table and navigation model for the admin console.
//!
//! DESIGN
//! ======
//! The console is a fixed set of five views selected by a static route
//! table. `AppRouter` owns that table plus the listeners bound to
//! `route:<view>` events, and dispatches synchronously on triggered
//! navigation. The UI shell feeds every URL change through `navigate`,
//! so the model sees link clicks and history traversal alike; nothing
//! here touches the browser, which keeps the whole module testable on
//! the native target.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use std::collections::HashMap;

/// Static route table: fragment -> view identifier.
///
/// The empty fragment aliases the welcome view so the console lands on
/// it when opened without a path. Defined once, never mutated.
pub const ROUTE_TABLE: [(&str, &str); 6] = [
    ("", "welcome"),
    ("welcome", "welcome"),
    ("config", "config"),
    ("testcases", "testcases"),
    ("stats", "stats"),
    ("about", "about"),
];

/// A screen the console can display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Welcome,
    Config,
    TestCases,
    Stats,
    About,
}

impl View {
    /// Every view, in navigation order.
    pub const ALL: [View; 5] = [
        View::Welcome,
        View::Config,
        View::TestCases,
        View::Stats,
        View::About,
    ];

    /// The view identifier used in the route table and route events.
    #[must_use]
    pub fn handler(self) -> &'static str {
        match self {
            View::Welcome => "welcome",
            View::Config => "config",
            View::TestCases => "testcases",
            View::Stats => "stats",
            View::About => "about",
        }
    }

    /// Resolve a view identifier back to a view.
    #[must_use]
    pub fn from_handler(handler: &str) -> Option<View> {
        View::ALL.into_iter().find(|view| view.handler() == handler)
    }

    /// URL path the UI serves this view at.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            View::Welcome => "/",
            View::Config => "/config",
            View::TestCases => "/testcases",
            View::Stats => "/stats",
            View::About => "/about",
        }
    }

    /// Resolve a URL path through the route table.
    #[must_use]
    pub fn from_path(path: &str) -> Option<View> {
        let fragment = fragment_of(path);
        lookup(fragment).and_then(View::from_handler)
    }

    /// Human-readable name shown in navigation and titles.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            View::Welcome => "Welcome",
            View::Config => "Configuration",
            View::TestCases => "Test Cases",
            View::Stats => "Statistics",
            View::About => "About",
        }
    }

    /// The event fired when this view is activated.
    #[must_use]
    pub fn route_event(self) -> String {
        format!("route:{}", self.handler())
    }
}

/// Strip a URL path down to its route fragment (`"/config"` -> `"config"`).
#[must_use]
pub fn fragment_of(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

fn lookup(fragment: &str) -> Option<&'static str> {
    ROUTE_TABLE
        .iter()
        .find(|(key, _)| *key == fragment)
        .map(|(_, handler)| *handler)
}

/// Listener invoked with the fragment that triggered the navigation.
pub type RouteListener = Box<dyn FnMut(&str)>;

/// Navigation model: route table, bound listeners, current fragment.
///
/// Listeners for an event fire in registration order. Navigating to the
/// fragment that is already current is a no-op, so a triggered
/// navigation fires each matching listener exactly once.
#[derive(Default)]
pub struct AppRouter {
    listeners: HashMap<String, Vec<RouteListener>>,
    fragment: Option<String>,
}

impl AppRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Static lookup: the view identifier a fragment maps to, if any.
    #[must_use]
    pub fn handler_for(&self, fragment: &str) -> Option<&'static str> {
        lookup(fragment)
    }

    /// Register a listener for a named event (`"route:<view>"`).
    pub fn bind(&mut self, event: impl Into<String>, listener: impl FnMut(&str) + 'static) {
        self.listeners
            .entry(event.into())
            .or_default()
            .push(Box::new(listener));
    }

    /// Make `fragment` the current fragment.
    ///
    /// With `trigger` set, fires the `route:<view>` event for the mapped
    /// view synchronously before returning. Unmapped fragments update
    /// the current fragment silently. Re-navigating to the current
    /// fragment does nothing.
    pub fn navigate(&mut self, fragment: &str, trigger: bool) {
        if self.fragment.as_deref() == Some(fragment) {
            return;
        }
        self.fragment = Some(fragment.to_owned());
        if !trigger {
            return;
        }
        let Some(event) = lookup(fragment).map(|handler| format!("route:{handler}")) else {
            return;
        };
        if let Some(listeners) = self.listeners.get_mut(&event) {
            for listener in listeners {
                listener(fragment);
            }
        }
    }

    /// The fragment most recently navigated to.
    #[must_use]
    pub fn current_fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}
