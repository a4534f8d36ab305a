#![recursion_limit = "256"]
#![warn(unused_extern_crates)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unreachable)]
#![deny(clippy::await_holding_lock)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::trivially_copy_pass_by_ref)]

use gloo::console;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response, UrlSearchParams};

use constants::{APPLICATION_FORM_URLENCODED, APPLICATION_JSON, CONTENT_TYPE};
use error::FetchError;
use proto::ApiError;

pub mod chart;
pub mod constants;
pub mod error;
#[macro_use]
pub mod macros;
pub mod guard;
pub mod proto;
pub mod session;
pub mod token;
pub mod ui;
pub mod utils;

#[derive(Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum RequestMethod {
    GET,
    POST,
}

impl ToString for RequestMethod {
    fn to_string(&self) -> String {
        match self {
            RequestMethod::POST => "POST".to_string(),
            RequestMethod::GET => "GET".to_string(),
        }
    }
}

/// The payloads our backend accepts. The content type header is derived from
/// the variant; multipart bodies must leave it unset so the browser can
/// attach the form boundary itself.
pub enum RequestBody {
    Json(JsValue),
    Form(UrlSearchParams),
    Multipart(FormData),
}

/// Build and send a request to the backend, attaching the stored bearer
/// credential when one exists, and pull back (status, json).
pub async fn do_request(
    uri: &str,
    method: RequestMethod,
    body: Option<RequestBody>,
) -> Result<(u16, JsValue), FetchError> {
    let opts = RequestInit::new();
    opts.set_method(&method.to_string());
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_credentials(web_sys::RequestCredentials::SameOrigin);

    let content_type = match &body {
        None | Some(RequestBody::Json(_)) => Some(APPLICATION_JSON),
        Some(RequestBody::Form(_)) => Some(APPLICATION_FORM_URLENCODED),
        Some(RequestBody::Multipart(_)) => None,
    };

    if let Some(body) = &body {
        #[cfg(debug_assertions)]
        if method == RequestMethod::GET {
            gloo::console::debug!("This seems odd, you've supplied a body with a GET request?")
        }
        match body {
            RequestBody::Json(value) => opts.set_body(value),
            RequestBody::Form(form) => opts.set_body(form),
            RequestBody::Multipart(form) => opts.set_body(form),
        }
    }

    let request = Request::new_with_str_and_init(uri, &opts)?;
    if let Some(content_type) = content_type {
        request
            .headers()
            .set(CONTENT_TYPE, content_type)
            .expect_throw("failed to set content-type header");
    }

    if let Some(token) = session::get_token() {
        request
            .headers()
            .set("authorization", &format!("Bearer {}", token))
            .expect_throw("failed to set authorization header");
    }

    let window = utils::window();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into().expect_throw("Invalid response type");
    let status = resp.status();

    let body = match resp.json() {
        Ok(json_future) => match JsFuture::from(json_future).await {
            Ok(body) => body,
            Err(e) => {
                let e_msg = format!("future json error -> {:?}", e);
                console::error!(e_msg.as_str());
                JsValue::NULL
            }
        },
        Err(e) => {
            let e_msg = format!("response json error -> {:?}", e);
            console::error!(e_msg.as_str());
            JsValue::NULL
        }
    };

    Ok((status, body))
}

/// Pull the `detail` field out of an error body, falling back to a generic
/// message when the body is empty, malformed, or carries no detail.
pub fn error_detail(body: &JsValue, fallback: &str) -> String {
    serde_wasm_bindgen::from_value::<ApiError>(body.clone())
        .ok()
        .and_then(|e| e.detail)
        .unwrap_or_else(|| fallback.to_string())
}
