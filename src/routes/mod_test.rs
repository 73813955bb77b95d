use super::*;
use tower::ServiceExt;

async fn get_page(path: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    let response = app(&HostConfig::default()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Text of the first `<h2>` element.
fn heading(html: &str) -> Option<&str> {
    let open = html.find("<h2")?;
    let start = open + html[open..].find('>')? + 1;
    let end = start + html[start..].find("</h2>")?;
    Some(&html[start..end])
}

/// `href` of the sidebar link marked `aria-current="page"`.
fn active_link(html: &str) -> Option<&str> {
    let marker = html.find(r#"aria-current="page""#)?;
    let tag = html[..marker].rfind("<a ")?;
    let href = tag + html[tag..marker].find(r#"href=""#)? + r#"href=""#.len();
    let end = href + html[href..].find('"')?;
    Some(&html[href..end])
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn section_routes_render_their_panel_and_highlight() {
    let cases = [
        ("/", "Home", "/"),
        ("/recipes", "Recipe List", "/recipes"),
        ("/about", "About", "/about"),
    ];
    for (path, expected_heading, expected_link) in cases {
        let (status, html) = get_page(path).await;
        assert_eq!(status, StatusCode::OK, "path {path}");
        assert_eq!(heading(&html), Some(expected_heading), "path {path}");
        assert_eq!(active_link(&html), Some(expected_link), "path {path}");
    }
}

#[tokio::test]
async fn sub_paths_render_the_same_section_the_sidebar_highlights() {
    for path in ["/recipes/breakfast", "/about/", "/about/team/1"] {
        let (status, html) = get_page(path).await;
        let section = client::state::section::Section::from_path(path);
        assert_eq!(status, StatusCode::OK, "path {path}");
        assert_eq!(heading(&html), Some(section.heading()), "path {path}");
        assert_eq!(active_link(&html), Some(section.path()), "path {path}");
    }
}

#[tokio::test]
async fn unknown_paths_fall_back_to_home_with_ok_status() {
    for path in ["/missing", "/abouts", "/Recipes"] {
        let (status, html) = get_page(path).await;
        assert_eq!(status, StatusCode::OK, "path {path}");
        assert_eq!(heading(&html), Some("Home"), "path {path}");
        assert_eq!(active_link(&html), Some("/"), "path {path}");
    }
}

#[tokio::test]
async fn rendered_page_links_the_configured_stylesheet() {
    let (_, html) = get_page("/").await;
    assert!(html.contains(r#"href="/pkg/video-recipes.css""#));
}

#[test]
fn pkg_mount_path_uses_site_pkg_dir() {
    let opts = HostConfig::default().leptos_options();
    assert_eq!(pkg_mount_path(&opts), "/pkg");
}

#[test]
fn pkg_mount_path_normalizes_slashes() {
    let cfg = HostConfig { site_pkg_dir: "static/wasm".into(), ..HostConfig::default() };
    assert_eq!(pkg_mount_path(&cfg.leptos_options()), "/static/wasm");
}
