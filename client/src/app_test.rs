use super::*;

#[test]
fn stylesheet_href_follows_output_name_and_pkg_dir() {
    let options = LeptosOptions::builder().output_name("video-recipes").build();
    assert_eq!(stylesheet_href(&options), "/pkg/video-recipes.css");

    let options = LeptosOptions::builder()
        .output_name("recipes")
        .site_pkg_dir("/static/wasm/")
        .build();
    assert_eq!(stylesheet_href(&options), "/static/wasm/recipes.css");
}
