//! Top-level page layout composing sidebar, header, breadcrumb, and footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The routed section page is passed in as `children` and rendered inside the
//! content card; everything around it is fixed chrome.

use leptos::prelude::*;

use crate::components::breadcrumb::Breadcrumb;
use crate::components::page_footer::PageFooter;
use crate::components::page_header::PageHeader;
use crate::components::sidebar::Sidebar;

/// Fixed layout wrapping the routed content area.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Sidebar/>
            <div class="layout__main">
                <PageHeader title="Video Recipes" subtitle="This is a subtitle"/>
                <main class="layout__content">
                    <Breadcrumb/>
                    <div class="layout__panel">{children()}</div>
                </main>
                <PageFooter/>
            </div>
        </div>
    }
}
