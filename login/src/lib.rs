//! The public authentication page: a login panel and a register panel,
//! toggled client-side. Successful login stores the session and navigates
//! by role; registration expects a 201 and then returns to the login panel.

use gloo::console;
use gloo::timers::callback::Timeout;
#[allow(unused_imports)] // because it's needed to compile wasm things
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsValue, UnwrapThrowExt};
use web_sys::{MouseEvent, SubmitEvent, UrlSearchParams};
use yew::prelude::*;

use tally_web_ui_shared::add_body_form_classes;
use tally_web_ui_shared::constants::{
    API_LOGIN, API_REGISTER, CLASS_BUTTON_DARK, CSS_ALERT_DANGER, CSS_ALERT_INFO,
    CSS_ALERT_SUCCESS, ID_LOGIN_USERNAME, QUERY_ERROR_KEY, QUERY_ERROR_UNAUTHORIZED,
    URL_ADMIN_HOME, URL_USER_HOME,
};
use tally_web_ui_shared::error::FetchError;
use tally_web_ui_shared::proto::{LoginResponse, RegisterRequest};
use tally_web_ui_shared::session::{self, Role};
use tally_web_ui_shared::utils;
use tally_web_ui_shared::{do_request, error_detail, RequestBody, RequestMethod};

/// How long the register panel lingers on its success message before
/// returning to the login panel.
const REGISTER_REDIRECT_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Error,
    Success,
    Info,
}

struct Notice {
    text: String,
    tone: Tone,
}

pub struct LoginApp {
    panel: Panel,
    busy: bool,
    notice: Option<Notice>,
    username: String,
    password: String,
    reg_username: String,
    reg_password: String,
    reg_role: Role,
}

pub enum LoginAppMsg {
    SwitchPanel(Panel),
    UsernameInput(String),
    PasswordInput(String),
    RegUsernameInput(String),
    RegPasswordInput(String),
    RegRoleInput(Role),
    LoginSubmit,
    RegisterSubmit,
    LoginSuccess(LoginResponse),
    RegisterDone,
    ReturnToLogin,
    Error { emsg: String },
}

impl From<FetchError> for LoginAppMsg {
    fn from(fe: FetchError) -> Self {
        LoginAppMsg::Error {
            emsg: fe.as_string(),
        }
    }
}

/// Whether the guard bounced the user here, judging by the query string.
fn is_unauthorized_bounce(search: &str) -> bool {
    search.trim_start_matches('?').split('&').any(|pair| {
        let mut parts = pair.splitn(2, '=');
        parts.next() == Some(QUERY_ERROR_KEY) && parts.next() == Some(QUERY_ERROR_UNAUTHORIZED)
    })
}

impl LoginApp {
    async fn submit_login(username: String, password: String) -> Result<LoginAppMsg, FetchError> {
        let form = UrlSearchParams::new()?;
        form.append("username", &username);
        form.append("password", &password);

        let (status, body) =
            do_request(API_LOGIN, RequestMethod::POST, Some(RequestBody::Form(form))).await?;

        if (200..300).contains(&status) {
            match serde_wasm_bindgen::from_value::<LoginResponse>(body) {
                Ok(resp) => Ok(LoginAppMsg::LoginSuccess(resp)),
                Err(e) => {
                    console::error!(format!("malformed login response -> {:?}", e).as_str());
                    Ok(LoginAppMsg::Error {
                        emsg: "An error occurred during login".to_string(),
                    })
                }
            }
        } else {
            Ok(LoginAppMsg::Error {
                emsg: error_detail(&body, "Login failed"),
            })
        }
    }

    async fn submit_register(request: RegisterRequest) -> Result<LoginAppMsg, FetchError> {
        let body_jsvalue = serde_json::to_string(&request)
            .map(|s| JsValue::from(&s))
            .expect_throw("Failed to serialise register request");

        let (status, body) = do_request(
            API_REGISTER,
            RequestMethod::POST,
            Some(RequestBody::Json(body_jsvalue)),
        )
        .await?;

        if status == 201 {
            Ok(LoginAppMsg::RegisterDone)
        } else {
            Ok(LoginAppMsg::Error {
                emsg: error_detail(&body, "Registration failed"),
            })
        }
    }
}

impl Component for LoginApp {
    type Message = LoginAppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        #[cfg(debug_assertions)]
        console::debug!("login::create");

        let search = utils::window()
            .location()
            .search()
            .unwrap_or_else(|_| String::new());
        let notice = is_unauthorized_bounce(&search).then(|| Notice {
            text: "Please log in to continue.".to_string(),
            tone: Tone::Info,
        });

        LoginApp {
            panel: Panel::Login,
            busy: false,
            notice,
            username: String::new(),
            password: String::new(),
            reg_username: String::new(),
            reg_password: String::new(),
            reg_role: Role::User,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LoginAppMsg::SwitchPanel(panel) => {
                self.panel = panel;
                self.notice = None;
                true
            }
            LoginAppMsg::UsernameInput(value) => {
                self.username = value;
                false
            }
            LoginAppMsg::PasswordInput(value) => {
                self.password = value;
                false
            }
            LoginAppMsg::RegUsernameInput(value) => {
                self.reg_username = value;
                false
            }
            LoginAppMsg::RegPasswordInput(value) => {
                self.reg_password = value;
                false
            }
            LoginAppMsg::RegRoleInput(role) => {
                self.reg_role = role;
                false
            }
            LoginAppMsg::LoginSubmit => {
                if self.username.is_empty() || self.password.is_empty() {
                    self.notice = Some(Notice {
                        text: "Please enter both username and password".to_string(),
                        tone: Tone::Error,
                    });
                    return true;
                }
                self.notice = None;
                self.busy = true;
                let username = self.username.clone();
                let password = self.password.clone();
                ctx.link().send_future(async {
                    match Self::submit_login(username, password).await {
                        Ok(v) => v,
                        Err(v) => v.into(),
                    }
                });
                true
            }
            LoginAppMsg::RegisterSubmit => {
                if self.reg_username.is_empty() || self.reg_password.is_empty() {
                    self.notice = Some(Notice {
                        text: "Please fill all fields".to_string(),
                        tone: Tone::Error,
                    });
                    return true;
                }
                self.notice = None;
                self.busy = true;
                let request = RegisterRequest {
                    username: self.reg_username.clone(),
                    password: self.reg_password.clone(),
                    role: self.reg_role,
                };
                ctx.link().send_future(async {
                    match Self::submit_register(request).await {
                        Ok(v) => v,
                        Err(v) => v.into(),
                    }
                });
                true
            }
            LoginAppMsg::LoginSuccess(resp) => {
                session::set(&resp.access_token, resp.role);
                self.busy = false;
                self.notice = Some(Notice {
                    text: "Login successful!".to_string(),
                    tone: Tone::Success,
                });
                let target = match resp.role {
                    Role::Admin => URL_ADMIN_HOME,
                    Role::User => URL_USER_HOME,
                };
                utils::window()
                    .location()
                    .set_href(target)
                    .expect_throw("failed to leave the login page");
                true
            }
            LoginAppMsg::RegisterDone => {
                self.busy = false;
                self.notice = Some(Notice {
                    text: "Registration successful! Redirecting...".to_string(),
                    tone: Tone::Success,
                });
                let link = ctx.link().clone();
                Timeout::new(REGISTER_REDIRECT_MS, move || {
                    link.send_message(LoginAppMsg::ReturnToLogin)
                })
                .forget();
                true
            }
            LoginAppMsg::ReturnToLogin => {
                self.panel = Panel::Login;
                self.reg_username.clear();
                self.reg_password.clear();
                self.reg_role = Role::User;
                self.notice = None;
                true
            }
            LoginAppMsg::Error { emsg } => {
                console::error!(emsg.as_str());
                self.busy = false;
                self.notice = Some(Notice {
                    text: emsg,
                    tone: Tone::Error,
                });
                true
            }
        }
    }

    fn changed(&mut self, _ctx: &Context<Self>, _props: &Self::Properties) -> bool {
        false
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            utils::autofocus(ID_LOGIN_USERNAME);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        add_body_form_classes!();

        html! {
            <main class="flex-shrink-0 form-signin">
                <center>
                    <h2>{ "Tally" }</h2>
                </center>
                { self.view_notice() }
                {
                    match self.panel {
                        Panel::Login => self.view_login(ctx),
                        Panel::Register => self.view_register(ctx),
                    }
                }
            </main>
        }
    }
}

impl LoginApp {
    fn view_notice(&self) -> Html {
        match &self.notice {
            Some(notice) => {
                let class = match notice.tone {
                    Tone::Error => CSS_ALERT_DANGER,
                    Tone::Success => CSS_ALERT_SUCCESS,
                    Tone::Info => CSS_ALERT_INFO,
                };
                html! {
                    <div class={class} role="alert">
                        { notice.text.clone() }
                    </div>
                }
            }
            None => html! {},
        }
    }

    fn view_login(&self, ctx: &Context<Self>) -> Html {
        let busy = self.busy;
        html! {
            <>
            <form
                onsubmit={ ctx.link().callback(|e: SubmitEvent| {
                    e.prevent_default();
                    LoginAppMsg::LoginSubmit
                }) }
            >
                <div class="mb-3">
                    <label for={ID_LOGIN_USERNAME} class="form-label">{ "Username" }</label>
                    <input
                        id={ID_LOGIN_USERNAME}
                        name="username"
                        type="text"
                        class="form-control"
                        autocomplete="username"
                        value={ self.username.clone() }
                        disabled={ busy }
                        oninput={ ctx.link().callback(|e: InputEvent| LoginAppMsg::UsernameInput(utils::get_value_from_input_event(e))) }
                    />
                </div>
                <div class="mb-3">
                    <label for="password" class="form-label">{ "Password" }</label>
                    <input
                        id="password"
                        name="password"
                        type="password"
                        class="form-control"
                        autocomplete="current-password"
                        value={ self.password.clone() }
                        disabled={ busy }
                        oninput={ ctx.link().callback(|e: InputEvent| LoginAppMsg::PasswordInput(utils::get_value_from_input_event(e))) }
                    />
                </div>
                <button type="submit" class={CLASS_BUTTON_DARK} disabled={ busy }>{ "Login" }</button>
            </form>
            <p class="mt-3">
                { "Need an account? " }
                <a href="#" onclick={ ctx.link().callback(|e: MouseEvent| {
                    e.prevent_default();
                    LoginAppMsg::SwitchPanel(Panel::Register)
                }) }>{ "Register" }</a>
            </p>
            </>
        }
    }

    fn view_register(&self, ctx: &Context<Self>) -> Html {
        let busy = self.busy;
        html! {
            <>
            <form
                onsubmit={ ctx.link().callback(|e: SubmitEvent| {
                    e.prevent_default();
                    LoginAppMsg::RegisterSubmit
                }) }
            >
                <div class="mb-3">
                    <label for="regUsername" class="form-label">{ "Username" }</label>
                    <input
                        id="regUsername"
                        name="username"
                        type="text"
                        class="form-control"
                        autocomplete="username"
                        value={ self.reg_username.clone() }
                        disabled={ busy }
                        oninput={ ctx.link().callback(|e: InputEvent| LoginAppMsg::RegUsernameInput(utils::get_value_from_input_event(e))) }
                    />
                </div>
                <div class="mb-3">
                    <label for="regPassword" class="form-label">{ "Password" }</label>
                    <input
                        id="regPassword"
                        name="password"
                        type="password"
                        class="form-control"
                        autocomplete="new-password"
                        value={ self.reg_password.clone() }
                        disabled={ busy }
                        oninput={ ctx.link().callback(|e: InputEvent| LoginAppMsg::RegPasswordInput(utils::get_value_from_input_event(e))) }
                    />
                </div>
                <div class="mb-3">
                    <div class="form-check">
                        <input
                            class="form-check-input"
                            type="radio"
                            name="role"
                            id="roleUser"
                            checked={ self.reg_role == Role::User }
                            disabled={ busy }
                            onchange={ ctx.link().callback(|_| LoginAppMsg::RegRoleInput(Role::User)) }
                        />
                        <label class="form-check-label" for="roleUser">{ "User" }</label>
                    </div>
                    <div class="form-check">
                        <input
                            class="form-check-input"
                            type="radio"
                            name="role"
                            id="roleAdmin"
                            checked={ self.reg_role == Role::Admin }
                            disabled={ busy }
                            onchange={ ctx.link().callback(|_| LoginAppMsg::RegRoleInput(Role::Admin)) }
                        />
                        <label class="form-check-label" for="roleAdmin">{ "Admin" }</label>
                    </div>
                </div>
                <button type="submit" class={CLASS_BUTTON_DARK} disabled={ busy }>{ "Register" }</button>
            </form>
            <p class="mt-3">
                { "Already registered? " }
                <a href="#" onclick={ ctx.link().callback(|e: MouseEvent| {
                    e.prevent_default();
                    LoginAppMsg::SwitchPanel(Panel::Login)
                }) }>{ "Back to login" }</a>
            </p>
            </>
        }
    }
}

/// This is the entry point of the login page. This triggers the app to load
/// and begin its event loop.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn run_app() -> Result<(), JsValue> {
    yew::Renderer::<LoginApp>::new().render();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::is_unauthorized_bounce;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn recognises_the_guard_marker() {
        assert!(is_unauthorized_bounce("?error=unauthorized"));
        assert!(is_unauthorized_bounce("error=unauthorized"));
        assert!(is_unauthorized_bounce("?next=%2Fui%2Fadmin&error=unauthorized"));
    }

    #[wasm_bindgen_test]
    fn ignores_other_queries() {
        assert!(!is_unauthorized_bounce(""));
        assert!(!is_unauthorized_bounce("?"));
        assert!(!is_unauthorized_bounce("?error=server"));
        assert!(!is_unauthorized_bounce("?unauthorized=error"));
        assert!(!is_unauthorized_bounce("?erroneous=unauthorized"));
    }
}
