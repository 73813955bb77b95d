//! Breadcrumb trail above the content panel.
//!
//! The trail is fixed; it does not follow the active route.

use leptos::prelude::*;

#[cfg(test)]
#[path = "breadcrumb_test.rs"]
mod breadcrumb_test;

/// Crumbs rendered left to right.
pub const TRAIL: [&str; 2] = ["Recipes", "Breakfast"];

#[component]
pub fn Breadcrumb() -> impl IntoView {
    view! {
        <ol class="breadcrumb">
            {TRAIL
                .iter()
                .enumerate()
                .map(|(i, crumb)| {
                    view! {
                        <li class="breadcrumb__item">
                            {crumb_separator(i)}
                            <span>{*crumb}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ol>
    }
}

fn crumb_separator(index: usize) -> Option<&'static str> {
    (index > 0).then_some(" / ")
}
