use leptos::logging::warn;
use leptos::prelude::*;
use shared::organization_status::OrganizationStatus;

use crate::api;

/// Reactive holder of the latest [`OrganizationStatus`] snapshot, shared through context.
///
/// Readers call [`snapshot`](Self::snapshot) synchronously and re-render whenever a
/// [`refresh`](Self::refresh) lands. The snapshot is `None` until the first fetch succeeds.
/// Tests provide one with a fixed snapshot instead.
#[derive(Clone, Copy)]
pub struct OrganizationStatusProvider {
    snapshot: RwSignal<Option<OrganizationStatus>>,
}

impl OrganizationStatusProvider {
    pub fn new(initial: OrganizationStatus) -> Self {
        Self {
            snapshot: RwSignal::new(Some(initial)),
        }
    }

    /// no counters yet
    pub fn pending() -> Self {
        Self {
            snapshot: RwSignal::new(None),
        }
    }

    pub fn snapshot(&self) -> Option<OrganizationStatus> {
        self.snapshot.get()
    }

    pub fn set(&self, status: OrganizationStatus) {
        self.snapshot.set(Some(status));
    }

    /// fire and forget, a failed fetch keeps the previous snapshot
    pub fn refresh(&self) {
        let snapshot = self.snapshot;
        leptos::task::spawn_local(async move {
            match api::fetch_organization_status().await {
                Ok(status) => {
                    snapshot.try_set(Some(status));
                }
                Err(e) => warn!("Failed to refresh organization status: {}", e),
            }
        });
    }
}

/// Puts a provider into context and starts loading the first snapshot.
pub fn provide_organization_status() -> OrganizationStatusProvider {
    let provider = OrganizationStatusProvider::pending();
    provide_context(provider);
    provider.refresh();
    provider
}
