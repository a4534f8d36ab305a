//! Test harnesses for WASM things.
//!
//! These need a real browser because they exercise local storage:
//!
//! ```shell
//! wasm-pack test --headless --firefox shared
//! ```

use tally_web_ui_shared::error_detail;
use tally_web_ui_shared::session::{self, Role};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn error_detail_prefers_the_server_text() {
    let body = js_sys::JSON::parse(r#"{"detail":"bad credentials"}"#).unwrap();
    assert_eq!(error_detail(&body, "Login failed"), "bad credentials");

    let empty = js_sys::JSON::parse("{}").unwrap();
    assert_eq!(error_detail(&empty, "Login failed"), "Login failed");

    assert_eq!(
        error_detail(&wasm_bindgen::JsValue::NULL, "Login failed"),
        "Login failed"
    );
}

#[wasm_bindgen_test]
fn session_round_trips() {
    session::clear();
    assert!(session::get().is_none());

    session::set("tok-123", Role::Admin);
    let s = session::get().expect("session should be present after set");
    assert_eq!(s.token, "tok-123");
    assert_eq!(s.role, Role::Admin);

    session::clear();
    assert!(session::get().is_none());
    assert!(session::get_token().is_none());
}

#[wasm_bindgen_test]
fn last_writer_wins() {
    session::set("first", Role::User);
    session::set("second", Role::Admin);
    let s = session::get().expect("session should be present");
    assert_eq!(s.token, "second");
    assert_eq!(s.role, Role::Admin);
    session::clear();
}

#[wasm_bindgen_test]
fn clearing_the_token_keeps_the_role_key() {
    session::set("tok", Role::User);
    session::clear_token();
    // The combined read refuses a half-present session.
    assert!(session::get().is_none());
    assert!(session::get_token().is_none());
    session::clear();
}
