use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shared::dashboard::NewDashboardDto;

use crate::api;
use crate::components::Message;
use crate::organization_status::OrganizationStatusProvider;

/// Capability to open the create dashboard dialog from anywhere below [`provide_create_dashboard_dialog`].
#[derive(Clone, Copy)]
pub struct CreateDashboardDialogHandle {
    open: RwSignal<bool>,
}

impl CreateDashboardDialogHandle {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
        }
    }

    pub fn show(&self) {
        self.open.set(true);
    }

    pub fn hide(&self) {
        self.open.set(false);
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }
}

impl Default for CreateDashboardDialogHandle {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_create_dashboard_dialog() -> CreateDashboardDialogHandle {
    let handle = CreateDashboardDialogHandle::new();
    provide_context(handle);
    handle
}

/// Modal asking for a dashboard name. Must live inside the `Router`, a created dashboard is opened right away.
#[component]
pub fn CreateDashboardDialog() -> impl IntoView {
    let Some(dialog) = use_context::<CreateDashboardDialogHandle>() else {
        warn!("CreateDashboardDialog rendered without a handle in context");
        return ().into_any();
    };
    let status = use_context::<OrganizationStatusProvider>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let close = move || {
        name.set(String::new());
        set_error.set(None);
        dialog.hide();
    };

    let on_save = move |_| {
        let dto = NewDashboardDto { name: name.get() };
        if dto.validated_name().is_none() {
            set_error.set(Some("Please enter a dashboard name.".to_string()));
            return;
        }
        saving.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api::create_dashboard(&dto).await;
            saving.set(false);
            match result {
                Ok(dashboard) => {
                    log!("Created dashboard {} ({})", dashboard.id, dashboard.slug);
                    close();
                    if let Some(status) = status {
                        status.refresh();
                    }
                    navigate(&format!("/app/dashboards/{}", dashboard.id), Default::default());
                }
                Err(e) => set_error.set(Some(format!("Error: {}", e))),
            }
        });
    };

    view! {
        <div class="modal-backdrop" hidden=move || !dialog.is_open()>
            <div class="modal" role="dialog" aria-modal="true" aria-labelledby="create-dashboard-title">
                <h3 id="create-dashboard-title">"New Dashboard"</h3>
                <input
                    type="text"
                    class="form-input"
                    placeholder="Dashboard Name"
                    bind:value=name
                />
                <Message signal=error />
                <div class="modal-actions">
                    <button class="btn" on:click=move |_| close()>"Cancel"</button>
                    <button class="btn btn-primary" disabled=move || saving.get() on:click=on_save>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
    .into_any()
}
