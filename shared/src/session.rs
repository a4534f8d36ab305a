//! The session repository. This is the only module that touches the browser
//! storage keys holding the bearer token and the role, so every read and
//! write of the shared session state funnels through one place. Storage is
//! not synchronised across tabs; the last writer wins.

#[cfg(debug_assertions)]
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use wasm_bindgen::UnwrapThrowExt;

const ACCESS_TOKEN: &str = "access_token";
const ROLE: &str = "role";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: Role,
}

/// Read the current session. A missing key, or a stored role we don't
/// recognise, both count as "not signed in".
pub fn get() -> Option<Session> {
    let token: Result<String, _> = LocalStorage::get(ACCESS_TOKEN);
    let role: Result<String, _> = LocalStorage::get(ROLE);
    #[cfg(debug_assertions)]
    console::debug!(format!(
        "session::get -> token present={:?} role={:?}",
        token.is_ok(),
        role
    )
    .as_str());
    match (token, role) {
        (Ok(token), Ok(role)) => role.parse().ok().map(|role| Session { token, role }),
        _ => None,
    }
}

/// Read the token on its own. The upload path wants the credential even when
/// the role key has been lost.
pub fn get_token() -> Option<String> {
    let l: Result<String, _> = LocalStorage::get(ACCESS_TOKEN);
    l.ok()
}

pub fn set(token: &str, role: Role) {
    LocalStorage::set(ACCESS_TOKEN, token)
        .expect_throw(&format!("failed to set {}", ACCESS_TOKEN));
    LocalStorage::set(ROLE, role.to_string()).expect_throw(&format!("failed to set {}", ROLE));
}

pub fn clear() {
    LocalStorage::delete(ACCESS_TOKEN);
    LocalStorage::delete(ROLE);
}

/// Evict only the credential. Used when the backend rejects the token with a
/// 401 but we have no reason to forget who the user claimed to be.
pub fn clear_token() {
    LocalStorage::delete(ACCESS_TOKEN);
}
