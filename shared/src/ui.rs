//! UI things
//!

use wasm_bindgen::UnwrapThrowExt;
use yew::{html, BaseComponent, Context, Html};

use crate::constants::{CSS_ALERT_DANGER, CSS_NAV_LINK, CSS_PAGE_HEADER, URL_LOGIN};
use crate::session;

pub fn do_alert_error(alert_title: &str, alert_message: Option<&str>) -> Html {
    html! {
    <div class="container">
        <div class="row justify-content-md-center">
            <div class={CSS_ALERT_DANGER} role="alert">
                <p><strong>{ alert_title }</strong></p>
                if let Some(value) = alert_message {
                    <p>{ value }</p>
                }
            </div>
        </div>
    </div>
    }
}

pub fn do_page_header(page_title: &str) -> Html {
    html! {
        <div class={CSS_PAGE_HEADER}>
            <h2>{ page_title }</h2>
        </div>
    }
}

pub fn loading_spinner() -> Html {
    html! {
      <>
        <div class="vert-center">
          <div class="spinner-border text-dark" role="status">
            <span class="visually-hidden">{ "Loading..." }</span>
          </div>
        </div>
      </>
    }
}

/// returns an a-href link which can trigger the signout flow - the "target"
/// is the Message the owning component handles by calling [`ui_signout`].
pub fn signout_link<T, U>(ctx: &Context<T>, target: U) -> Html
where
    T: BaseComponent,
    U: Clone + 'static,
    <T as BaseComponent>::Message: From<U>,
{
    html! {
        <a class={CSS_NAV_LINK} href="#"
            onclick={ ctx.link().callback(move |_| target.clone()) }
        >{"Sign out"}</a>
    }
}

/// does the signout action, clearing the local session and returning to the
/// login page. The backend holds no session state, so there is nothing to
/// call out to.
pub fn ui_signout() {
    session::clear();
    gloo_utils::window()
        .location()
        .set_href(URL_LOGIN)
        .expect_throw("failed to navigate to the login page");
}
