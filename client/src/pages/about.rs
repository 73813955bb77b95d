use leptos::prelude::*;

use crate::state::section::Section;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! { <h2>{Section::About.heading()}</h2> }
}
