use leptos::prelude::*;

#[component]
pub fn PageFooter() -> impl IntoView {
    view! { <footer class="page-footer">"Ant Design ©2018 Created by Ant UED"</footer> }
}
