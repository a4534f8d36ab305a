//! Route permissions and the session guard. Every protected page runs
//! [`check_auth`] before mounting its content: a local decision over the
//! permission table first, then a round trip to the backend to confirm the
//! token is still honoured. Turning someone away clears the stored session
//! and performs a full page navigation, both irreversible for the current
//! page's lifetime.

use gloo::console;
use wasm_bindgen::UnwrapThrowExt;

use crate::constants::{API_VERIFY_TOKEN, URL_LOGIN_UNAUTHORIZED};
use crate::error::FetchError;
use crate::session::{self, Role, Session};
use crate::{do_request, token, RequestMethod};

/// Which roles may open which pages. A path not listed here is public.
/// Entries cover the path itself and everything nested under it, so the
/// dashboard's view URLs inherit the dashboard's entry.
const ROUTE_PERMISSIONS: &[(&str, &[Role])] = &[
    ("/ui/home", &[Role::User, Role::Admin]),
    ("/ui/admin", &[Role::Admin]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The path is not in the permission table.
    Public,
    /// Session present, role allowed, token not locally expired.
    Granted,
    /// Anything else. The caller must not mount protected content.
    Denied,
}

fn route_matches(route: &str, path: &str) -> bool {
    path == route || (path.starts_with(route) && path[route.len()..].starts_with('/'))
}

/// The local part of the guard decision: permission table, session
/// presence, role membership, then the token's own expiry claim. Pure so it
/// can be tested without a browser; `now_ms` comes from `js_sys::Date::now`
/// in production.
pub fn route_access(path: &str, session: Option<&Session>, now_ms: f64) -> Access {
    let allowed = match ROUTE_PERMISSIONS
        .iter()
        .find(|(route, _)| route_matches(route, path))
    {
        Some((_, allowed)) => allowed,
        None => return Access::Public,
    };

    let session = match session {
        Some(session) => session,
        None => return Access::Denied,
    };

    if !allowed.contains(&session.role) {
        return Access::Denied;
    }

    if !token::is_current(&session.token, now_ms) {
        return Access::Denied;
    }

    Access::Granted
}

/// Drop the stored session and bounce to the login page, carrying the
/// unauthorized marker so the login page can say why.
pub fn redirect_to_login() {
    session::clear();
    gloo_utils::window()
        .location()
        .set_href(URL_LOGIN_UNAUTHORIZED)
        .expect_throw("failed to navigate to the login page");
}

async fn verify_token() -> Result<bool, FetchError> {
    let (status, _value) = do_request(API_VERIFY_TOKEN, RequestMethod::POST, None).await?;
    Ok((200..300).contains(&status))
}

/// The page-load gate. Returns `true` when the current user may view
/// `current_path`; on any deny it has already cleared the session and
/// started the redirect, so the caller only has to stop rendering.
pub async fn check_auth(current_path: &str) -> bool {
    let session = session::get();
    match route_access(current_path, session.as_ref(), js_sys::Date::now()) {
        Access::Public => true,
        Access::Denied => {
            redirect_to_login();
            false
        }
        Access::Granted => match verify_token().await {
            Ok(true) => true,
            Ok(false) => {
                console::error!("token verification rejected by the backend");
                redirect_to_login();
                false
            }
            Err(e) => {
                console::error!(format!("token verification failed -> {:?}", e).as_str());
                redirect_to_login();
                false
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use wasm_bindgen_test::wasm_bindgen_test;

    const NOW_MS: f64 = 1_700_000_000_000.0;

    fn live_token() -> String {
        let body = URL_SAFE_NO_PAD.encode(r#"{"exp":1700003600}"#);
        format!("e30.{}.sig", body)
    }

    fn dead_token() -> String {
        let body = URL_SAFE_NO_PAD.encode(r#"{"exp":1699996400}"#);
        format!("e30.{}.sig", body)
    }

    fn session(role: Role, token: String) -> Session {
        Session { token, role }
    }

    #[wasm_bindgen_test]
    fn public_paths_allow_any_session_state() {
        for path in ["/ui/login", "/", "/ui/homestead", "/ui/adminish"] {
            assert_eq!(route_access(path, None, NOW_MS), Access::Public);
            let s = session(Role::User, live_token());
            assert_eq!(route_access(path, Some(&s), NOW_MS), Access::Public);
        }
    }

    #[wasm_bindgen_test]
    fn protected_path_without_session_is_denied() {
        assert_eq!(route_access("/ui/home", None, NOW_MS), Access::Denied);
        assert_eq!(route_access("/ui/admin", None, NOW_MS), Access::Denied);
    }

    #[wasm_bindgen_test]
    fn role_outside_the_allowed_set_is_denied() {
        let s = session(Role::User, live_token());
        assert_eq!(route_access("/ui/admin", Some(&s), NOW_MS), Access::Denied);
    }

    #[wasm_bindgen_test]
    fn allowed_roles_are_granted() {
        let user = session(Role::User, live_token());
        let admin = session(Role::Admin, live_token());
        assert_eq!(route_access("/ui/home", Some(&user), NOW_MS), Access::Granted);
        assert_eq!(route_access("/ui/home", Some(&admin), NOW_MS), Access::Granted);
        assert_eq!(
            route_access("/ui/admin", Some(&admin), NOW_MS),
            Access::Granted
        );
    }

    #[wasm_bindgen_test]
    fn dashboard_subpaths_inherit_the_dashboard_entry() {
        let admin = session(Role::Admin, live_token());
        let user = session(Role::User, live_token());
        assert_eq!(
            route_access("/ui/admin/upload", Some(&admin), NOW_MS),
            Access::Granted
        );
        assert_eq!(
            route_access("/ui/admin/upload", Some(&user), NOW_MS),
            Access::Denied
        );
    }

    #[wasm_bindgen_test]
    fn locally_expired_token_is_denied() {
        let s = session(Role::Admin, dead_token());
        assert_eq!(route_access("/ui/admin", Some(&s), NOW_MS), Access::Denied);
    }

    #[wasm_bindgen_test]
    fn garbled_token_is_denied() {
        let s = session(Role::Admin, "garbage".to_string());
        assert_eq!(route_access("/ui/admin", Some(&s), NOW_MS), Access::Denied);
    }
}
