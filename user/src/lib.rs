//! The landing page for signed-in users. Open to both roles; the only thing
//! that varies is whether the dashboard link is offered.

#[cfg(debug_assertions)]
use gloo::console;
#[allow(unused_imports)] // because it's needed to compile wasm things
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsValue, UnwrapThrowExt};
use yew::prelude::*;

use tally_web_ui_shared::constants::{
    CSS_NAVBAR_BRAND, CSS_NAVBAR_NAV, CSS_NAV_LINK, URL_ADMIN_HOME, URL_LOGIN,
};
use tally_web_ui_shared::guard;
use tally_web_ui_shared::session::{self, Role};
use tally_web_ui_shared::ui::{do_page_header, loading_spinner, signout_link, ui_signout};

enum State {
    Verifying,
    Authenticated,
    Redirecting,
}

pub struct LandingApp {
    state: State,
}

#[derive(Clone)]
pub enum LandingMsg {
    AuthResult(bool),
    Signout,
}

impl Component for LandingApp {
    type Message = LandingMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        #[cfg(debug_assertions)]
        console::debug!("landing::create");

        // Gate the page before anything renders. The guard performs the
        // deny redirect itself; we only need to know whether to mount.
        ctx.link().send_future(async {
            let path = gloo_utils::window()
                .location()
                .pathname()
                .expect_throw("failed to read the current path");
            LandingMsg::AuthResult(guard::check_auth(&path).await)
        });

        LandingApp {
            state: State::Verifying,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        #[cfg(debug_assertions)]
        console::debug!("landing::update");
        match msg {
            LandingMsg::AuthResult(true) => {
                self.state = State::Authenticated;
                true
            }
            LandingMsg::AuthResult(false) => {
                self.state = State::Redirecting;
                true
            }
            LandingMsg::Signout => {
                ui_signout();
                false
            }
        }
    }

    fn changed(&mut self, _ctx: &Context<Self>, _props: &Self::Properties) -> bool {
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match self.state {
            State::Verifying => loading_spinner(),
            State::Redirecting => html! {
                <div>
                    { "Redirecting to login page..." }<br />
                    <a href={URL_LOGIN}>{ "Click here if you aren't redirected" }</a>
                </div>
            },
            State::Authenticated => self.view_authenticated(ctx),
        }
    }
}

impl LandingApp {
    fn view_authenticated(&self, ctx: &Context<Self>) -> Html {
        let is_admin = matches!(
            session::get().map(|s| s.role),
            Some(Role::Admin)
        );

        html! {
            <>
            <nav class={CSS_NAVBAR_NAV}>
                <div class="container-fluid">
                    <span class={CSS_NAVBAR_BRAND}>{ "Tally" }</span>
                    <ul class="navbar-nav">
                        if is_admin {
                            <li class="nav-item">
                                <a href={URL_ADMIN_HOME} class={CSS_NAV_LINK}>{ "Admin Dashboard" }</a>
                            </li>
                        }
                        <li class="nav-item">
                            { signout_link(ctx, LandingMsg::Signout) }
                        </li>
                    </ul>
                </div>
            </nav>
            <main class="container p-3">
                { do_page_header("Welcome to Tally") }
                <p>{ "Your sales analytics workspace. Use the navigation above to get around." }</p>
            </main>
            </>
        }
    }
}

/// This is the entry point of the landing page. This triggers the app to
/// load and begin its event loop.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn run_app() -> Result<(), JsValue> {
    yew::Renderer::<LandingApp>::new().render();
    Ok(())
}
