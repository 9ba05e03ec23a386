use leptos::prelude::*;
use leptos_router::components::A;

use crate::session::Session;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_context::<Session>();

    view! {
        <nav class="navbar">
            <A href="/app/" attr:class="brand">"Insights"</A>
            <A href="/app/dashboards">"Dashboards"</A>
            <span class="navbar-spacer"></span>
            {move || {
                session
                    .and_then(|s| s.current_user())
                    .map(|user| view! { <span class="navbar-user" title=user.email>{user.name}</span> })
            }}
        </nav>
    }
}
