//! Configuration page showing the directories the server resolved.

use leptos::prelude::*;

use crate::state::project::ProjectState;

/// Configuration page. Shows a load-failure note per entry when the
/// config API had no answer.
#[component]
pub fn ConfigPage() -> impl IntoView {
    let project = expect_context::<RwSignal<ProjectState>>();

    view! {
        <div class="config-page">
            <h1>"Configuration"</h1>
            <Show
                when=move || !project.get().loading
                fallback=|| view! { <p>"Loading configuration..."</p> }
            >
                <dl class="config-page__entries">
                    <dt>"Project home"</dt>
                    <dd>
                        <code>{move || entry(project.get().project_home)}</code>
                    </dd>
                    <dt>"Root directory"</dt>
                    <dd>
                        <code>{move || entry(project.get().root_directory)}</code>
                    </dd>
                </dl>
            </Show>
        </div>
    }
}

fn entry(value: Option<String>) -> String {
    value.unwrap_or_else(|| "unavailable".to_owned())
}
