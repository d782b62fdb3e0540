//! Test-case browser with a client-side name filter.

use leptos::prelude::*;

use crate::net::types::TestCaseSummary;
use crate::state::testcases::TestCaseFilter;

/// Test-case page: a filter input over the table of discovered cases.
#[component]
pub fn TestCasesPage() -> impl IntoView {
    let filter = RwSignal::new(TestCaseFilter::default());
    let cases = LocalResource::new(|| crate::net::api::fetch_test_cases());

    view! {
        <div class="testcases-page">
            <h1>"Test Cases"</h1>
            <input
                class="testcases-page__filter"
                type="text"
                placeholder="Filter by name or package"
                prop:value=move || filter.get().query
                on:input=move |ev| {
                    filter.update(|f| f.query = event_target_value(&ev));
                }
            />

            <Suspense fallback=move || view! { <p>"Loading test cases..."</p> }>
                {move || {
                    cases
                        .get()
                        .map(|list| match list {
                            Some(list) => case_table(&filter.get().apply(&list)).into_any(),
                            None => {
                                view! {
                                    <p class="testcases-page__error">
                                        "Test cases are unavailable. Is the server running?"
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

fn case_table(rows: &[TestCaseSummary]) -> impl IntoView {
    if rows.is_empty() {
        return view! { <p class="testcases-page__empty">"No matching test cases."</p> }
            .into_any();
    }

    let rendered = rows
        .iter()
        .cloned()
        .map(|case| {
            view! {
                <tr>
                    <td class="testcases-page__name">{case.name}</td>
                    <td class="testcases-page__package">{case.package}</td>
                    <td class="testcases-page__kind">{case.kind.label()}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <table class="testcases-page__table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Package"</th>
                    <th>"Kind"</th>
                </tr>
            </thead>
            <tbody>{rendered}</tbody>
        </table>
    }
    .into_any()
}
