//! Header banner with the site title.

use leptos::prelude::*;

/// Page header showing a title and a muted subtitle.
#[component]
pub fn PageHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <header class="page-header">
            <span class="page-header__title">{title}</span>
            <span class="page-header__subtitle">{subtitle}</span>
        </header>
    }
}
