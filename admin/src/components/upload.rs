#[cfg(debug_assertions)]
use gloo::console;
use wasm_bindgen::UnwrapThrowExt;
use web_sys::{File, FormData, SubmitEvent};
use yew::prelude::*;

use tally_web_ui_shared::constants::{
    API_UPLOAD_SALES, CLASS_BUTTON_DARK, ID_UPLOAD_FILE_INPUT, MAX_UPLOAD_SIZE_BYTES,
    UPLOAD_EXTENSION,
};
use tally_web_ui_shared::error::FetchError;
use tally_web_ui_shared::proto::ApiMessage;
use tally_web_ui_shared::ui::do_page_header;
use tally_web_ui_shared::{do_request, error_detail, session, token, utils, RequestBody, RequestMethod};

pub enum Msg {
    Submit,
    Done { message: String },
    Failed { status: Option<u16>, emsg: String },
}

impl From<FetchError> for Msg {
    fn from(fe: FetchError) -> Self {
        Msg::Failed {
            status: None,
            emsg: fe.as_string(),
        }
    }
}

pub enum State {
    Idle,
    Uploading,
    Done { message: String },
    Error { emsg: String },
}

pub struct UploadApp {
    state: State,
}

/// What the validation sequence needs to know about the chosen file.
pub(crate) struct FileMeta {
    pub name: String,
    pub size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UploadReject {
    NoFile,
    WrongExtension,
    TooLarge,
    StaleToken,
}

impl UploadReject {
    pub(crate) fn message(self) -> &'static str {
        match self {
            UploadReject::NoFile => "Please select a file to upload.",
            UploadReject::WrongExtension => "Only CSV files are allowed.",
            UploadReject::TooLarge => "File size must be less than 5MB.",
            UploadReject::StaleToken => "Please login first (invalid or expired token).",
        }
    }
}

/// The pre-flight checks, in a fixed order with the first failure winning:
/// a file must be chosen, it must look like CSV, it must fit under the size
/// ceiling, and only then is the credential inspected. Nothing reaches the
/// network until all four pass.
pub(crate) fn validate_request(
    file: Option<&FileMeta>,
    stored_token: Option<&str>,
    now_ms: f64,
) -> Result<(), UploadReject> {
    let file = file.ok_or(UploadReject::NoFile)?;
    if !file.name.ends_with(UPLOAD_EXTENSION) {
        return Err(UploadReject::WrongExtension);
    }
    if file.size > MAX_UPLOAD_SIZE_BYTES {
        return Err(UploadReject::TooLarge);
    }
    match stored_token {
        Some(t) if token::is_current(t, now_ms) => Ok(()),
        _ => Err(UploadReject::StaleToken),
    }
}

impl Component for UploadApp {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        #[cfg(debug_assertions)]
        console::debug!("upload::create");

        UploadApp { state: State::Idle }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Submit => {
                let file = utils::get_inputelement_by_id(ID_UPLOAD_FILE_INPUT)
                    .and_then(|input| input.files())
                    .and_then(|files| files.get(0));
                let meta = file.as_ref().map(|f| FileMeta {
                    name: f.name(),
                    size: f.size(),
                });
                let stored = session::get_token();

                match validate_request(meta.as_ref(), stored.as_deref(), js_sys::Date::now()) {
                    Err(reject) => {
                        // A dead credential gets dropped on the spot so the
                        // next attempt starts from a clean login.
                        if reject == UploadReject::StaleToken {
                            session::clear_token();
                        }
                        self.state = State::Error {
                            emsg: reject.message().to_string(),
                        };
                    }
                    Ok(()) => {
                        let file = file.expect_throw("validated upload file disappeared");
                        self.state = State::Uploading;
                        ctx.link().send_future(async move {
                            match Self::submit_upload(file).await {
                                Ok(v) => v,
                                Err(v) => v.into(),
                            }
                        });
                    }
                }
                true
            }
            Msg::Done { message } => {
                if let Some(input) = utils::get_inputelement_by_id(ID_UPLOAD_FILE_INPUT) {
                    input.set_value("");
                }
                self.state = State::Done {
                    message: format!("Upload successful: {}", message),
                };
                true
            }
            Msg::Failed { status, emsg } => {
                let emsg = if status == Some(401) {
                    session::clear_token();
                    "Session expired. Please login again.".to_string()
                } else {
                    emsg
                };
                self.state = State::Error { emsg };
                true
            }
        }
    }

    fn changed(&mut self, _ctx: &Context<Self>, _props: &Self::Properties) -> bool {
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        // Every terminal message re-enables the submit control, so a failed
        // upload can be retried without reloading the view.
        let busy = matches!(self.state, State::Uploading);

        html! {
            <>
                { do_page_header("Upload Sales Data") }
                <form
                    onsubmit={ ctx.link().callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    }) }
                >
                    <div class="mb-3">
                        <label for={ID_UPLOAD_FILE_INPUT} class="form-label">
                            { "Select sales data file (CSV or JSON):" }
                        </label>
                        <input
                            id={ID_UPLOAD_FILE_INPUT}
                            name="salesFile"
                            type="file"
                            class="form-control"
                            accept=".csv,application/json"
                            disabled={ busy }
                        />
                    </div>
                    <button type="submit" class={CLASS_BUTTON_DARK} disabled={ busy }>
                        { "Upload" }
                    </button>
                    { self.view_status() }
                </form>
            </>
        }
    }
}

impl UploadApp {
    fn view_status(&self) -> Html {
        match &self.state {
            State::Idle => html! { <p id="uploadStatus"></p> },
            State::Uploading => html! { <p id="uploadStatus">{ "Uploading file..." }</p> },
            State::Done { message } => html! {
                <p id="uploadStatus" class="text-success">{ message.clone() }</p>
            },
            State::Error { emsg } => html! {
                <p id="uploadStatus" class="text-danger">{ emsg.clone() }</p>
            },
        }
    }

    async fn submit_upload(file: File) -> Result<Msg, FetchError> {
        let form = FormData::new()?;
        form.append_with_blob("file", &file)
            .expect_throw("failed to append upload file");

        let (status, body) = do_request(
            API_UPLOAD_SALES,
            RequestMethod::POST,
            Some(RequestBody::Multipart(form)),
        )
        .await?;

        if (200..300).contains(&status) {
            let message = serde_wasm_bindgen::from_value::<ApiMessage>(body)
                .ok()
                .and_then(|m| m.message)
                .unwrap_or_default();
            Ok(Msg::Done { message })
        } else {
            Ok(Msg::Failed {
                status: Some(status),
                emsg: error_detail(&body, "Upload failed"),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use wasm_bindgen_test::wasm_bindgen_test;

    const NOW_MS: f64 = 1_700_000_000_000.0;

    fn token_with_exp(exp: i64) -> String {
        let body = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{}}}"#, exp));
        format!("e30.{}.sig", body)
    }

    fn live_token() -> String {
        token_with_exp(1_700_003_600)
    }

    fn meta(name: &str, size: f64) -> FileMeta {
        FileMeta {
            name: name.to_string(),
            size,
        }
    }

    #[wasm_bindgen_test]
    fn a_file_must_be_selected_first() {
        // Even a dead token loses to the missing file.
        assert_eq!(
            validate_request(None, None, NOW_MS),
            Err(UploadReject::NoFile)
        );
    }

    #[wasm_bindgen_test]
    fn wrong_extension_beats_the_size_check() {
        let oversized_json = meta("sales.json", 64.0 * 1024.0 * 1024.0);
        let live = live_token();
        assert_eq!(
            validate_request(Some(&oversized_json), Some(&live), NOW_MS),
            Err(UploadReject::WrongExtension)
        );
    }

    #[wasm_bindgen_test]
    fn size_check_beats_the_token_check() {
        let oversized_csv = meta("sales.csv", MAX_UPLOAD_SIZE_BYTES + 1.0);
        assert_eq!(
            validate_request(Some(&oversized_csv), None, NOW_MS),
            Err(UploadReject::TooLarge)
        );
    }

    #[wasm_bindgen_test]
    fn expired_token_is_rejected_before_any_network_call() {
        let file = meta("sales.csv", 1024.0);
        // One hour in the past.
        let stale = token_with_exp(1_699_996_400);
        let reject = validate_request(Some(&file), Some(&stale), NOW_MS)
            .expect_err("expired token should fail validation");
        assert_eq!(reject, UploadReject::StaleToken);
        assert_eq!(
            reject.message(),
            "Please login first (invalid or expired token)."
        );
    }

    #[wasm_bindgen_test]
    fn missing_token_is_rejected() {
        let file = meta("sales.csv", 1024.0);
        assert_eq!(
            validate_request(Some(&file), None, NOW_MS),
            Err(UploadReject::StaleToken)
        );
    }

    #[wasm_bindgen_test]
    fn a_small_csv_with_a_live_token_passes() {
        let file = meta("sales.csv", MAX_UPLOAD_SIZE_BYTES);
        let live = live_token();
        assert!(validate_request(Some(&file), Some(&live), NOW_MS).is_ok());
    }
}
