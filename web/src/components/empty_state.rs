use leptos::logging::warn;
use leptos::prelude::*;
use shared::illustration::{illustration_alt, illustration_src};
use shared::onboarding::{OptionalSteps, TopicFlags, completed, should_show_panel_for};
use shared::organization_status::OrganizationStatus;

use crate::components::{CreateDashboardDialogHandle, Step};
use crate::organization_status::OrganizationStatusProvider;

/// Usage policies of the organization, shown in this order on every empty state.
pub const POLICY_NOTICES: [&str; 5] = [
    "Only connect data sources you are authorized to query. Request access from the data owner first.",
    "Never put credentials or personal data into query text, dashboard names or widget titles.",
    "Dashboards shared outside the organization need approval from your team lead.",
    "Keep refresh schedules of queries against production databases at one hour or longer.",
    "Report suspected data leaks to the security team right away.",
];

/// Placeholder panel for views without (enough) content.
///
/// In `onboarding_mode` the panel disappears once every relevant topic is completed
/// according to the [`OrganizationStatusProvider`] in context, and stays hidden while
/// that provider has no snapshot yet. Without a provider the workspace is treated as empty.
#[component]
pub fn EmptyState(
    #[prop(into)] description: String,
    #[prop(into)] illustration: String,
    #[prop(optional, into)] icon: Option<String>,
    #[prop(optional, into)] header: Option<String>,
    #[prop(optional, into)] help_link: Option<String>,
    #[prop(optional)] onboarding_mode: bool,
    #[prop(optional)] show_alert_step: bool,
    #[prop(optional)] show_dashboard_step: bool,
    #[prop(optional)] show_invite_step: bool,
    /// checklist of [`Step`]s, no view turns it on yet
    #[prop(optional)]
    show_checklist: bool,
) -> impl IntoView {
    let status = use_context::<OrganizationStatusProvider>();
    let dialog = use_context::<CreateDashboardDialogHandle>();

    let available = OptionalSteps {
        alert: show_alert_step,
        dashboard: show_dashboard_step,
        invite_users: show_invite_step,
    }
    .available();

    let show_create_dashboard_dialog = Callback::new(move |_: ()| match dialog {
        Some(dialog) => dialog.show(),
        None => warn!("No create dashboard dialog in context"),
    });

    let src = illustration_src(&illustration);
    let alt = illustration_alt(&illustration);

    move || {
        let snapshot = match status {
            Some(provider) => provider.snapshot(),
            None => Some(OrganizationStatus::default()),
        };

        if !should_show_panel_for(onboarding_mode, &available, snapshot.as_ref()) {
            return ().into_any();
        }
        let completed = completed(&snapshot.unwrap_or_default());

        let description = (!description.is_empty()).then(|| description.clone());

        view! {
            <div class="empty-state">
                <div class="empty-state__summary">
                    {header.clone().map(|header| view! { <h4 class="empty-state__header">{header}</h4> })}
                    {icon.clone().map(|icon| view! {
                        <div class="empty-state__icon"><i class=icon aria-hidden="true"></i></div>
                    })}
                    {description.map(|description| view! { <p class="empty-state__description">{description}</p> })}
                    <ol class="empty-state__policies">
                        {POLICY_NOTICES.iter().map(|notice| view! { <li>{*notice}</li> }).collect_view()}
                    </ol>
                    {help_link.clone().map(|href| view! {
                        <p class="empty-state__help">
                            "Need more support? "
                            <a href=href target="_blank" rel="noopener noreferrer">"See our Help"</a>
                        </p>
                    })}
                </div>
                <div class="empty-state__illustration">
                    <img src=src.clone() alt=alt.clone() />
                </div>
                {show_checklist.then(|| view! {
                    <Checklist available completed on_create_dashboard=show_create_dashboard_dialog />
                })}
            </div>
        }
        .into_any()
    }
}

#[component]
fn Checklist(
    available: TopicFlags,
    completed: TopicFlags,
    on_create_dashboard: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="empty-state__steps">
            <h4>"Let's get started"</h4>
            <ol>
                <Step
                    show=available.data_source
                    completed=completed.data_source
                    url="/app/data_sources/new"
                    url_text="Connect"
                    text="a Data Source"
                />
                <Step
                    show=available.query
                    completed=completed.query
                    url="/app/queries/new"
                    url_text="Create"
                    text="your first Query"
                />
                <Step
                    show=available.alert
                    completed=completed.alert
                    url="/app/alerts/new"
                    url_text="Create"
                    text="your first Alert"
                />
                <Step
                    show=available.dashboard
                    completed=completed.dashboard
                    on_click=on_create_dashboard
                    url_text="Create"
                    text="your first Dashboard"
                />
                <Step
                    show=available.invite_users
                    completed=completed.invite_users
                    url="/app/users/new"
                    url_text="Invite"
                    text="your team members"
                />
            </ol>
        </div>
    }
}
