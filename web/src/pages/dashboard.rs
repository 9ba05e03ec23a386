use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::api;
use crate::components::{EmptyState, Loading};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.read().get("id");

    let dashboard = LocalResource::new(move || {
        let id = id().unwrap_or_default();
        async move { api::fetch_dashboard(&id).await }
    });

    view! {
        <div class="container">
            <A href="/app/dashboards" attr:class="back-link">"← Back to list"</A>
            <Suspense fallback=|| view! { <Loading label="Loading dashboard..." /> }>
                {move || Suspend::new(async move {
                    match dashboard.await {
                        Ok(dashboard) => view! {
                            <h1>{dashboard.name}</h1>
                            <EmptyState
                                icon="fa fa-area-chart"
                                illustration="empty-query"
                                description="This dashboard has no widgets yet."
                            />
                        }.into_any(),
                        Err(e) => view! { <div class="message message-error">"Error: " {e}</div> }.into_any(),
                    }
                })}
            </Suspense>
        </div>
    }
}
