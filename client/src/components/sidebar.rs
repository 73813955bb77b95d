//! Collapsible navigation sidebar.
//!
//! ARCHITECTURE
//! ============
//! The shell owns `UiState` through context and this component is its only
//! writer. The active entry is derived from the router location rather than
//! stored. `Section::from_path` resolves sub-paths the same way the section
//! routes in `app::App` claim them.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::section::Section;
use crate::state::ui::UiState;

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

/// Left sidebar with section links and a collapse toggle at its foot.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    let active = Memo::new(move |_| Section::from_path(&location.pathname.get()));
    let collapsed = move || ui.get().sidebar_collapsed;

    let on_toggle = move |_| {
        ui.update(|u| {
            let now_collapsed = u.toggle_sidebar();
            leptos::logging::log!("sidebar collapsed: {now_collapsed}");
        });
    };

    view! {
        <aside
            class=move || sidebar_class(collapsed())
            style:width=move || width_style(&ui.get())
        >
            <div class="sidebar__logo"></div>
            <nav class="sidebar__menu">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        let is_active = move || active.get() == section;
                        view! {
                            <a
                                href=section.path()
                                class=move || item_class(is_active())
                                aria-current=move || is_active().then_some("page")
                                title=section.label()
                            >
                                <span class="sidebar__glyph">{section.glyph()}</span>
                                <Show when=move || !collapsed()>
                                    <span class="sidebar__label">{section.label()}</span>
                                </Show>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <button
                class="sidebar__toggle"
                on:click=on_toggle
                title=move || toggle_title(collapsed())
            >
                {move || toggle_glyph(collapsed())}
            </button>
        </aside>
    }
}

fn width_style(ui: &UiState) -> String {
    format!("{}px", ui.sidebar_width())
}

fn sidebar_class(collapsed: bool) -> &'static str {
    if collapsed { "sidebar sidebar--collapsed" } else { "sidebar" }
}

fn item_class(active: bool) -> &'static str {
    if active { "sidebar__item sidebar__item--active" } else { "sidebar__item" }
}

fn toggle_glyph(collapsed: bool) -> &'static str {
    if collapsed { "›" } else { "‹" }
}

fn toggle_title(collapsed: bool) -> &'static str {
    if collapsed { "Expand sidebar" } else { "Collapse sidebar" }
}
