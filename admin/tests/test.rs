//! Route table checks. These are pure, so they run under the plain
//! wasm-bindgen-test runner without a browser:
//!
//! ```shell
//! wasm-pack test --node admin
//! ```

use tally_web_ui_admin::router::ViewRoute;
use wasm_bindgen_test::*;
use yew_router::Routable;

#[wasm_bindgen_test]
fn the_dashboard_root_is_the_summary_view() {
    assert_eq!(ViewRoute::Summary.to_path(), "/ui/admin");
    assert_eq!(ViewRoute::recognize("/ui/admin"), Some(ViewRoute::Summary));
}

#[wasm_bindgen_test]
fn every_view_lives_under_the_guarded_dashboard_path() {
    for route in enum_iterator::all::<ViewRoute>() {
        let path = route.to_path();
        assert!(
            path == "/ui/admin" || path.starts_with("/ui/admin/"),
            "{path} escapes the dashboard prefix"
        );
    }
}

#[wasm_bindgen_test]
fn unknown_paths_fall_through_to_not_found() {
    assert_eq!(
        ViewRoute::recognize("/ui/admin/bogus"),
        Some(ViewRoute::NotFound)
    );
}
