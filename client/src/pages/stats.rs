//! Statistics page: counts over the discovered test cases.

use leptos::prelude::*;

use crate::components::stat_card::StatCard;

/// Statistics page with one count tile per test kind.
#[component]
pub fn StatsPage() -> impl IntoView {
    let stats = LocalResource::new(|| crate::net::api::fetch_statistics());

    view! {
        <div class="stats-page">
            <h1>"Statistics"</h1>
            <Suspense fallback=move || view! { <p>"Loading statistics..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|loaded| match loaded {
                            Some(stats) => {
                                view! {
                                    <div class="stats-page__cards">
                                        <StatCard label="Total" value=stats.total/>
                                        <StatCard label="XML" value=stats.xml/>
                                        <StatCard label="Java" value=stats.java/>
                                    </div>
                                }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <p class="stats-page__error">
                                        "Statistics are unavailable. Is the server running?"
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
