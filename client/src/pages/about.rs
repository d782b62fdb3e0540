//! About page: console version and session navigation summary.

use leptos::prelude::*;

use crate::state::nav::NavState;
use crate::state::project::ProjectState;

/// About page.
#[component]
pub fn AboutPage() -> impl IntoView {
    let project = expect_context::<RwSignal<ProjectState>>();
    let nav = expect_context::<RwSignal<NavState>>();

    view! {
        <div class="about-page">
            <h1>"About"</h1>
            <p>"Citrus Admin console, version " {env!("CARGO_PKG_VERSION")} "."</p>
            <p>
                "Managing the project at "
                <code>{move || project.get().project_home_label()}</code>
            </p>
            <p class="about-page__session">
                {move || format!("Views activated this session: {}", nav.get().total_activations())}
            </p>
        </div>
    }
}
