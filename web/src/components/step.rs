use leptos::prelude::*;

/// One line of the onboarding checklist.
///
/// Renders nothing at all unless `show` is set. The link is rendered when a `url` or an
/// `on_click` handler is given, otherwise `url_text` is plain text.
#[component]
pub fn Step(
    show: bool,
    completed: bool,
    #[prop(into)] text: String,
    #[prop(optional, into)] url: Option<String>,
    #[prop(optional, into)] url_text: Option<String>,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    if !show {
        return ().into_any();
    }

    let label = url_text.unwrap_or_default();
    let lead = if url.is_some() || on_click.is_some() {
        let href = url.unwrap_or_else(|| "#".to_string());
        view! {
            <a
                href=href
                on:click=move |ev| {
                    if let Some(on_click) = on_click {
                        ev.prevent_default();
                        on_click.run(());
                    }
                }
            >
                {label}
            </a>
        }
        .into_any()
    } else {
        label.into_any()
    };

    view! {
        <li class="onboarding-step" class:done=completed>
            {lead}
            " "
            {text}
        </li>
    }
    .into_any()
}
