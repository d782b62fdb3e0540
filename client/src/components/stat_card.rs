//! Count tile used by the statistics page.

use leptos::prelude::*;

/// A labelled count tile.
#[component]
pub fn StatCard(label: &'static str, value: usize) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
