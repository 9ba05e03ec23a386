use leptos::prelude::*;
use leptos_router::components::A;

use crate::api;
use crate::components::{CreateDashboardDialogHandle, EmptyState, Loading};
use crate::pages::HELP_URL;

#[component]
pub fn DashboardsPage() -> impl IntoView {
    let dashboards = LocalResource::new(api::fetch_dashboards);
    let dialog = use_context::<CreateDashboardDialogHandle>();

    let on_new = move |_| {
        if let Some(dialog) = dialog {
            dialog.show();
        }
    };

    view! {
        <div class="container">
            <div class="flex-between">
                <h1>"Dashboards"</h1>
                <button class="btn btn-primary" on:click=on_new>"New Dashboard"</button>
            </div>
            <Suspense fallback=|| view! { <Loading /> }>
                {move || Suspend::new(async move {
                    match dashboards.await {
                        Ok(list) => {
                            if list.is_empty() {
                                view! {
                                    <EmptyState
                                        icon="fa fa-th-large"
                                        illustration="empty-dashboard"
                                        description="See the big picture"
                                        help_link=HELP_URL
                                        show_dashboard_step=true
                                    />
                                }.into_any()
                            } else {
                                view! {
                                    <ul class="dashboard-list">
                                        {list.into_iter().map(|dashboard| {
                                            let href = format!("/app/dashboards/{}", dashboard.id);
                                            view! {
                                                <li>
                                                    <A href=href>{dashboard.name}</A>
                                                    <span class="text-xs text-muted">
                                                        {dashboard.created_at.format("%d.%m.%Y %H:%M").to_string()}
                                                    </span>
                                                </li>
                                            }
                                        }).collect_view()}
                                    </ul>
                                }.into_any()
                            }
                        }
                        Err(e) => view! { <div class="message message-error">"Error: " {e}</div> }.into_any(),
                    }
                })}
            </Suspense>
        </div>
    }
}
