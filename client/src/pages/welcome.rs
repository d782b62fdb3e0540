//! Landing page: project summary plus cards for the other views.

use leptos::prelude::*;

use crate::router::View;
use crate::state::project::ProjectState;

/// Welcome page, the console's landing view.
#[component]
pub fn WelcomePage() -> impl IntoView {
    let project = expect_context::<RwSignal<ProjectState>>();

    view! {
        <div class="welcome-page">
            <h1>"Welcome to Citrus Admin"</h1>
            <p class="welcome-page__project">
                "Administration console for the Citrus project at "
                <code>{move || project.get().project_home_label()}</code>
            </p>

            <div class="welcome-page__cards">
                {View::ALL
                    .into_iter()
                    .filter(|view| *view != View::Welcome)
                    .map(|view| {
                        view! {
                            <a class="welcome-card" href=view.path()>
                                <span class="welcome-card__title">{view.title()}</span>
                                <span class="welcome-card__blurb">{blurb(view)}</span>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

fn blurb(view: View) -> &'static str {
    match view {
        View::Welcome => "",
        View::Config => "Project home and root directory",
        View::TestCases => "Browse the discovered test cases",
        View::Stats => "Test counts by kind",
        View::About => "Console version and session info",
    }
}
