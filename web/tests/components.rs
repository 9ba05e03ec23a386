#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use shared::organization_status::OrganizationStatus;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web::components::{CreateDashboardDialogHandle, EmptyState, Message, POLICY_NOTICES, Step};
use web::organization_status::OrganizationStatusProvider;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

const FRESH_WORKSPACE: OrganizationStatus = OrganizationStatus {
    data_sources: 0,
    queries: 0,
    alerts: 0,
    dashboards: 0,
    users: 1,
};

const SET_UP_WORKSPACE: OrganizationStatus = OrganizationStatus {
    data_sources: 2,
    queries: 7,
    alerts: 1,
    dashboards: 3,
    users: 4,
};

fn container() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    document.body().unwrap().append_child(&element).unwrap();
    element
}

fn find(parent: &HtmlElement, selector: &str) -> Option<Element> {
    parent.query_selector(selector).unwrap()
}

fn find_all(parent: &HtmlElement, selector: &str) -> Vec<Element> {
    let nodes = parent.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn text_of(element: &Element) -> String {
    element.text_content().unwrap_or_default()
}

#[wasm_bindgen_test]
fn hidden_step_renders_nothing() {
    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), || {
        view! {
            <ol>
                <Step show=false completed=true url="/app/queries/new" url_text="Create" text="your first Query" />
            </ol>
        }
    });

    assert!(find(&root, "li").is_none());
    assert!(find(&root, "a").is_none());
    assert_eq!(text_of(&root), "");
}

#[wasm_bindgen_test]
fn completed_step_is_marked_done() {
    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), || {
        view! {
            <ol>
                <Step show=true completed=true url="/app/data_sources/new" url_text="Connect" text="a Data Source" />
                <Step show=true completed=false url="/app/queries/new" url_text="Create" text="your first Query" />
            </ol>
        }
    });

    let steps = find_all(&root, "li");
    assert_eq!(steps.len(), 2);
    assert!(steps[0].class_list().contains("done"));
    assert!(!steps[1].class_list().contains("done"));
    assert_eq!(text_of(&steps[0]), "Connect a Data Source");
    assert_eq!(
        find(&root, "a").unwrap().get_attribute("href").as_deref(),
        Some("/app/data_sources/new")
    );
}

#[wasm_bindgen_test]
fn step_link_runs_click_handler() {
    let root = container();
    let clicks = RwSignal::new(0);
    let _handle = leptos::mount::mount_to(root.clone(), move || {
        let on_click = Callback::new(move |_: ()| clicks.update(|c| *c += 1));
        view! {
            <ol>
                <Step show=true completed=false on_click url_text="Create" text="your first Dashboard" />
            </ol>
        }
    });

    let link = find(&root, "a").unwrap().dyn_into::<HtmlElement>().unwrap();
    link.click();
    link.click();

    assert_eq!(clicks.get_untracked(), 2);
}

#[wasm_bindgen_test]
fn empty_state_renders_outside_onboarding_even_when_complete() {
    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), || {
        provide_context(OrganizationStatusProvider::new(SET_UP_WORKSPACE));
        view! { <EmptyState description="See the big picture" illustration="empty-dashboard" /> }
    });

    assert!(find(&root, ".empty-state").is_some());
}

#[wasm_bindgen_test]
fn empty_state_hides_once_onboarding_is_complete() {
    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), || {
        provide_context(OrganizationStatusProvider::new(SET_UP_WORKSPACE));
        view! {
            <EmptyState
                description="Welcome aboard"
                illustration="welcome"
                onboarding_mode=true
                show_alert_step=true
                show_dashboard_step=true
                show_invite_step=true
            />
        }
    });

    assert!(find(&root, ".empty-state").is_none());
    assert_eq!(text_of(&root), "");
}

#[wasm_bindgen_test]
fn empty_state_shows_while_onboarding_has_open_topics() {
    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), || {
        provide_context(OrganizationStatusProvider::new(OrganizationStatus {
            dashboards: 0,
            ..SET_UP_WORKSPACE
        }));
        view! {
            <EmptyState
                description="Welcome aboard"
                illustration="welcome"
                onboarding_mode=true
                show_dashboard_step=true
            />
        }
    });

    assert!(find(&root, ".empty-state").is_some());
}

#[wasm_bindgen_test]
fn empty_state_points_to_illustration_asset() {
    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), || {
        view! { <EmptyState description="See the big picture" illustration="empty-dashboard" /> }
    });

    let image = find(&root, "img").unwrap();
    assert_eq!(
        image.get_attribute("src").as_deref(),
        Some("/static/images/illustrations/empty-dashboard.svg")
    );
    assert_eq!(
        image.get_attribute("alt").as_deref(),
        Some("empty-dashboard Illustration")
    );
}

#[wasm_bindgen_test]
fn empty_state_header_is_optional() {
    let without = container();
    let _first = leptos::mount::mount_to(without.clone(), || {
        view! { <EmptyState description="See the big picture" illustration="empty-dashboard" /> }
    });
    assert!(find(&without, "h4").is_none());

    let with = container();
    let _second = leptos::mount::mount_to(with.clone(), || {
        view! { <EmptyState header="Welcome" description="See the big picture" illustration="empty-dashboard" /> }
    });
    assert!(text_of(&find(&with, "h4").unwrap()).contains("Welcome"));
}

#[wasm_bindgen_test]
fn empty_state_drops_absent_fragments() {
    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), || {
        view! { <EmptyState description="" illustration="empty-query" /> }
    });

    assert!(find(&root, ".empty-state__icon").is_none());
    assert!(find(&root, ".empty-state__description").is_none());
    assert!(find(&root, ".empty-state__help").is_none());
    assert!(find(&root, ".empty-state__steps").is_none());
}

#[wasm_bindgen_test]
fn empty_state_lists_policies_in_order() {
    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), || {
        view! {
            <EmptyState
                icon="fa fa-th-large"
                description="See the big picture"
                illustration="empty-dashboard"
                help_link="https://example.com/help"
            />
        }
    });

    let notices: Vec<String> = find_all(&root, ".empty-state__policies li")
        .iter()
        .map(text_of)
        .collect();
    assert_eq!(notices, POLICY_NOTICES.map(String::from).to_vec());
    assert!(find(&root, ".empty-state__icon i.fa-th-large").is_some());
    assert_eq!(
        find(&root, ".empty-state__help a").unwrap().get_attribute("href").as_deref(),
        Some("https://example.com/help")
    );
}

#[wasm_bindgen_test]
fn checklist_steps_follow_org_status_and_open_dialog() {
    let root = container();
    let dialog = CreateDashboardDialogHandle::new();
    let _handle = leptos::mount::mount_to(root.clone(), move || {
        provide_context(OrganizationStatusProvider::new(OrganizationStatus {
            data_sources: 1,
            ..FRESH_WORKSPACE
        }));
        provide_context(dialog);
        view! {
            <EmptyState
                description="Welcome aboard"
                illustration="welcome"
                show_dashboard_step=true
                show_checklist=true
            />
        }
    });

    let steps = find_all(&root, "li.onboarding-step");
    // data source, query and dashboard, alerts and invites are not relevant here
    assert_eq!(steps.len(), 3);
    assert!(steps[0].class_list().contains("done"));
    assert!(!steps[1].class_list().contains("done"));
    assert_eq!(text_of(&steps[2]), "Create your first Dashboard");

    assert!(!dialog.is_open());
    steps[2]
        .query_selector("a")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
    assert!(dialog.is_open());
}

#[wasm_bindgen_test]
async fn empty_state_follows_status_refresh() {
    let root = container();
    let provider = OrganizationStatusProvider::new(FRESH_WORKSPACE);
    let _handle = leptos::mount::mount_to(root.clone(), move || {
        provide_context(provider);
        view! { <EmptyState description="Welcome aboard" illustration="welcome" onboarding_mode=true /> }
    });
    assert!(find(&root, ".empty-state").is_some());

    provider.set(OrganizationStatus {
        data_sources: 1,
        queries: 1,
        ..FRESH_WORKSPACE
    });
    leptos::task::tick().await;

    assert!(find(&root, ".empty-state").is_none());
}

#[wasm_bindgen_test]
async fn onboarding_panel_waits_for_first_snapshot() {
    let root = container();
    let provider = OrganizationStatusProvider::pending();
    let _handle = leptos::mount::mount_to(root.clone(), move || {
        provide_context(provider);
        view! { <EmptyState description="Welcome aboard" illustration="welcome" onboarding_mode=true /> }
    });
    assert!(find(&root, ".empty-state").is_none());

    provider.set(FRESH_WORKSPACE);
    leptos::task::tick().await;

    assert!(find(&root, ".empty-state").is_some());
}

#[wasm_bindgen_test]
fn regular_panel_does_not_wait_for_snapshot() {
    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), || {
        provide_context(OrganizationStatusProvider::pending());
        view! { <EmptyState description="See the big picture" illustration="empty-dashboard" /> }
    });

    assert!(find(&root, ".empty-state").is_some());
}

#[wasm_bindgen_test]
async fn message_shows_error_text_only_when_set() {
    let root = container();
    let (error, set_error) = signal::<Option<String>>(None);
    let _handle = leptos::mount::mount_to(root.clone(), move || view! { <Message signal=error /> });
    assert!(find(&root, ".message").is_none());

    set_error.set(Some("Dashboard name is required".to_string()));
    leptos::task::tick().await;

    let message = find(&root, ".message.message-error").unwrap();
    assert_eq!(text_of(&message), "Dashboard name is required");
}
