//! Top navigation bar rendered from the route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bar is the primary way views are activated. Links navigate
//! client-side; the shell's location effect turns the resulting URL
//! change into a `route:<view>` event, so the bar itself never touches
//! the navigation model.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::router::View;

/// Top navigation bar with one link per console view.
#[component]
pub fn NavBar() -> impl IntoView {
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"Citrus Admin"</span>
            {View::ALL
                .into_iter()
                .map(|view| {
                    let navigate = navigate.clone();
                    view! {
                        <a
                            href=view.path()
                            class=move || {
                                if View::from_path(&pathname.get()) == Some(view) {
                                    "nav-bar__link nav-bar__link--active"
                                } else {
                                    "nav-bar__link"
                                }
                            }
                            on:click=move |ev: leptos::ev::MouseEvent| {
                                ev.prevent_default();
                                navigate(view.path(), NavigateOptions::default());
                            }
                        >
                            {view.title()}
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
