use leptos::prelude::*;

#[component]
pub fn Loading(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    view! { <div class="loading">{label.unwrap_or("Loading...")}</div> }
}
