use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

pub mod api;
pub mod components;
pub mod organization_status;
pub mod pages;
pub mod session;

#[component]
pub fn App() -> impl IntoView {
    organization_status::provide_organization_status();
    session::provide_session();
    components::provide_create_dashboard_dialog();

    view! {
        <Router base="/app">
            <components::Navbar />
            <main>
                <Routes fallback=|| view! { <div class="container"><h1>"Page not found"</h1></div> }>
                    <Route path=path!("/") view=pages::HomePage />
                    <Route path=path!("/dashboards") view=pages::DashboardsPage />
                    <Route path=path!("/dashboards/:id") view=pages::DashboardPage />
                </Routes>
            </main>
            <components::CreateDashboardDialog />
        </Router>
    }
}
