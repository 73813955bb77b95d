//! Home section, also rendered for paths without a route.

use leptos::prelude::*;

use crate::state::section::Section;

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <h2>{Section::Home.heading()}</h2> }
}
