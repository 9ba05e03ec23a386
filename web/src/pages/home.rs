use leptos::prelude::*;

use crate::components::EmptyState;
use crate::pages::HELP_URL;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="container">
            <EmptyState
                header="Welcome"
                icon="fa fa-rocket"
                description="Connect to any data source, easily visualize and share your data."
                illustration="welcome"
                help_link=HELP_URL
                onboarding_mode=true
                show_alert_step=true
                show_dashboard_step=true
                show_invite_step=true
            />
        </div>
    }
}
