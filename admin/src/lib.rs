//! The admin dashboard. One guarded shell around a sidebar and a routed
//! content region; each sidebar destination is its own component, mounted
//! and unmounted by the router as the admin moves around.

mod components;
pub mod router;

use enum_iterator::all;
#[cfg(debug_assertions)]
use gloo::console;
#[allow(unused_imports)] // because it's needed to compile wasm things
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsValue, UnwrapThrowExt};
use yew::prelude::*;
use yew_router::prelude::*;

use tally_web_ui_shared::constants::{
    CSS_DASHBOARD_CONTENT, CSS_NAVBAR_BRAND, CSS_NAVBAR_NAV, CSS_NAV_LINK, CSS_NAV_LINK_ACTIVE,
    CSS_SIDEBAR, URL_LOGIN, URL_USER_HOME,
};
use tally_web_ui_shared::guard;
use tally_web_ui_shared::ui::{loading_spinner, signout_link, ui_signout};

use crate::router::ViewRoute;

enum State {
    Verifying,
    Authenticated,
    Redirecting,
}

pub struct AdminApp {
    state: State,
}

#[derive(Clone)]
pub enum AdminMsg {
    AuthResult(bool),
    Signout,
}

/// The sidebar needs the current route to mark the active link, so it lives
/// inside the router as its own function component and re-renders on every
/// navigation.
#[function_component(SideNav)]
fn side_nav() -> Html {
    let current = use_route::<ViewRoute>();

    html! {
        <nav class={CSS_SIDEBAR}>
            <ul class="nav flex-column">
                {
                    all::<ViewRoute>()
                        .filter(|route| *route != ViewRoute::NotFound)
                        .map(|route| {
                            let classes = if current == Some(route) {
                                CSS_NAV_LINK_ACTIVE
                            } else {
                                CSS_NAV_LINK
                            };
                            html! {
                                <li class="nav-item">
                                    <Link<ViewRoute> classes={classes} to={route}>
                                        { route.to_string() }
                                    </Link<ViewRoute>>
                                </li>
                            }
                        })
                        .collect::<Html>()
                }
            </ul>
        </nav>
    }
}

impl Component for AdminApp {
    type Message = AdminMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        #[cfg(debug_assertions)]
        console::debug!("admin::create");

        ctx.link().send_future(async {
            let path = gloo_utils::window()
                .location()
                .pathname()
                .expect_throw("failed to read the current path");
            AdminMsg::AuthResult(guard::check_auth(&path).await)
        });

        AdminApp {
            state: State::Verifying,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        #[cfg(debug_assertions)]
        console::debug!("admin::update");
        match msg {
            AdminMsg::AuthResult(true) => {
                self.state = State::Authenticated;
                true
            }
            AdminMsg::AuthResult(false) => {
                self.state = State::Redirecting;
                true
            }
            AdminMsg::Signout => {
                ui_signout();
                false
            }
        }
    }

    fn changed(&mut self, _ctx: &Context<Self>, _props: &Self::Properties) -> bool {
        false
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        #[cfg(debug_assertions)]
        console::debug!("admin::rendered");
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
            State::Authenticated => html! {
                <BrowserRouter>
                    <nav class={CSS_NAVBAR_NAV}>
                        <div class="container-fluid">
                            <span class={CSS_NAVBAR_BRAND}>{ "Tally Administration" }</span>
                            <ul class="navbar-nav">
                                <li class="nav-item">
                                    <a href={URL_USER_HOME} class={CSS_NAV_LINK}>{ "Home" }</a>
                                </li>
                                <li class="nav-item">
                                    { signout_link(ctx, AdminMsg::Signout) }
                                </li>
                            </ul>
                        </div>
                    </nav>
                    <div class="container-fluid">
                        <div class="row">
                            <SideNav />
                            <main class={CSS_DASHBOARD_CONTENT}>
                                <Switch<ViewRoute> render={ router::switch } />
                            </main>
                        </div>
                    </div>
                </BrowserRouter>
            },
        }
    }
}

/// This is the entry point of the admin dashboard. This triggers the app to
/// load and begin its event loop.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn run_app() -> Result<(), JsValue> {
    yew::Renderer::<AdminApp>::new().render();
    Ok(())
}
