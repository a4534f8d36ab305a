//! Error handling for fetch calls.

use wasm_bindgen::JsValue;

/// Wraps the opaque value a failed platform call hands back. Everything we
/// can do with it is turn it into a message for the user.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchError {
    err: JsValue,
}

impl FetchError {
    pub fn as_string(&self) -> String {
        self.err
            .as_string()
            .unwrap_or_else(|| "Unknown Error".to_string())
    }
}

impl From<JsValue> for FetchError {
    fn from(value: JsValue) -> Self {
        FetchError { err: value }
    }
}
