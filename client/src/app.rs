//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::shell::Shell;
use crate::pages::{about::AboutPage, home::HomePage, recipes::RecipesPage};
use crate::state::ui::UiState;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let stylesheet = stylesheet_href(&options);
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link id="leptos" rel="stylesheet" href=stylesheet/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the UI state context and maps paths to section pages. Section
/// routes also claim their sub-paths; any other path renders the home page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    view! {
        <Title text="Video Recipes"/>

        <Router>
            <Shell>
                <Routes fallback=|| view! { <HomePage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("recipes") view=RecipesPage/>
                    <Route path=(StaticSegment("recipes"), WildcardSegment("rest")) view=RecipesPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=(StaticSegment("about"), WildcardSegment("rest")) view=AboutPage/>
                </Routes>
            </Shell>
        </Router>
    }
}

/// Stylesheet URL emitted by the build for these site options.
pub fn stylesheet_href(options: &LeptosOptions) -> String {
    format!("/{}/{}.css", options.site_pkg_dir.trim_matches('/'), options.output_name)
}
