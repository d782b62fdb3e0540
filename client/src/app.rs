//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell owns the single `AppRouter` instance. A location effect
//! feeds every URL change (nav clicks and history traversal alike)
//! through `navigate` with trigger set, so each view activation fires
//! its `route:<view>` event; the listeners bound here record the
//! activation in `NavState` and log it.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::nav_bar::NavBar;
use crate::pages::about::AboutPage;
use crate::pages::config::ConfigPage;
use crate::pages::stats::StatsPage;
use crate::pages::testcases::TestCasesPage;
use crate::pages::welcome::WelcomePage;
use crate::router::{AppRouter, View, fragment_of};
use crate::state::nav::NavState;
use crate::state::project::ProjectState;

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let nav = RwSignal::new(NavState::default());
    let project = RwSignal::new(ProjectState::default());
    provide_context(nav);
    provide_context(project);

    // Fetch the project configuration once at startup.
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let home = crate::net::api::fetch_project_home().await;
            let root = crate::net::api::fetch_root_directory().await;
            project.update(|p| p.resolve(home, root));
        });
    }

    view! {
        <Stylesheet id="citrus" href="/citrus-admin.css"/>
        <Title text=move || nav.get().title()/>

        <Router>
            <AppShell/>
        </Router>
    }
}

/// Layout inside the router: navigation bar plus the routed page.
///
/// Lives below `<Router>` so `use_location` resolves; this is where the
/// URL stream meets the navigation model.
#[component]
fn AppShell() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let pathname = use_location().pathname;

    let router = Rc::new(RefCell::new(console_router(nav)));
    Effect::new(move || {
        let path = pathname.get();
        router.borrow_mut().navigate(fragment_of(&path), true);
    });

    view! {
        <NavBar/>
        <main class="app__content">
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=WelcomePage/>
                <Route path=StaticSegment("welcome") view=WelcomePage/>
                <Route path=StaticSegment("config") view=ConfigPage/>
                <Route path=StaticSegment("testcases") view=TestCasesPage/>
                <Route path=StaticSegment("stats") view=StatsPage/>
                <Route path=StaticSegment("about") view=AboutPage/>
            </Routes>
        </main>
    }
}

/// Build the navigation model with one listener per view. Each listener
/// records the activation and logs the route event.
fn console_router(nav: RwSignal<NavState>) -> AppRouter {
    let mut router = AppRouter::new();
    for view in View::ALL {
        router.bind(view.route_event(), move |fragment| {
            log::info!("{} fired for fragment {fragment:?}", view.route_event());
            nav.update(|n| n.activate(view));
        });
    }
    router
}
