use leptos::prelude::*;

/// Displays the current error text, nothing while the signal holds `None`.
#[component]
pub fn Message(signal: ReadSignal<Option<String>>) -> impl IntoView {
    move || {
        signal
            .get()
            .map(|text| view! { <div class="message message-error" role="alert">{text}</div> })
    }
}
