//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches the Leptos SSR routes, the hydration bundle under `/pkg`, and a
//! health probe into one Axum router. Paths the app does not declare still
//! render the shell with `200 OK`; its router falls back to the home section.

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;

/// Leptos SSR frontend plus static assets and `/healthz`.
pub fn app(config: &HostConfig) -> Router {
    let leptos_options = config.leptos_options();
    let routes = generate_route_list(client::app::App);

    let pkg_dir = PathBuf::from(leptos_options.site_root.as_ref()).join(leptos_options.site_pkg_dir.as_ref());
    let pkg_path = pkg_mount_path(&leptos_options);

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .nest_service(&pkg_path, ServeDir::new(pkg_dir))
        .fallback(render_fallback)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

/// URL prefix the hydration bundle is served under.
fn pkg_mount_path(options: &LeptosOptions) -> String {
    format!("/{}", options.site_pkg_dir.trim_matches('/'))
}

/// Render the shell for a path no route declares.
///
/// The client router shows the home section there, so the response is a
/// normal page rather than a not-found.
async fn render_fallback(State(options): State<LeptosOptions>, req: Request<Body>) -> Response {
    let handler = leptos_axum::render_app_to_stream(move || client::app::shell(options.clone()));
    let mut response = handler(req).await.into_response();
    *response.status_mut() = StatusCode::OK;
    response
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
