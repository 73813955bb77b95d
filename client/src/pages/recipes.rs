//! Recipe listing placeholder.
//!
//! SYSTEM CONTEXT
//! ==============
//! No recipes are loaded; the page shows the listing heading and the fixed
//! meal categories the sidebar used to offer as a submenu.

use leptos::prelude::*;

use crate::state::section::Section;

#[cfg(test)]
#[path = "recipes_test.rs"]
mod recipes_test;

/// Meal categories shown under the listing heading, in display order.
pub const MEAL_CATEGORIES: [&str; 3] = ["Breakfast", "Lunch", "Dinner"];

/// Recipes page — static listing heading plus category tags.
#[component]
pub fn RecipesPage() -> impl IntoView {
    view! {
        <section class="recipes-page">
            <h2>{Section::Recipes.heading()}</h2>
            <ul class="recipes-page__categories">
                {MEAL_CATEGORIES
                    .iter()
                    .map(|category| {
                        view! { <li class="recipes-page__category">{*category}</li> }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </section>
    }
}
