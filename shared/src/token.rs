//! Local inspection of the bearer token. The backend owns signature
//! verification; decoding here exists only so we can refuse to send requests
//! with a credential that is already dead.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub exp: Option<i64>,
}

/// Decode the payload section of a JWT without verifying it.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let payload = token.split('.').nth(1)?;
    let raw = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&raw).ok()
}

/// Whether the token's expiry claim is still in the future. `now_ms` is a
/// unix timestamp in milliseconds, as `js_sys::Date::now` yields. A token
/// whose payload cannot be decoded, or that carries no expiry claim at all,
/// is treated as expired.
pub fn is_current(token: &str, now_ms: f64) -> bool {
    match decode_claims(token).and_then(|claims| claims.exp) {
        Some(exp) => (exp as f64) * 1000.0 > now_ms,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn make_token(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload);
        format!("{}.{}.sig", header, body)
    }

    const NOW_MS: f64 = 1_700_000_000_000.0;

    #[wasm_bindgen_test]
    fn future_expiry_is_current() {
        let token = make_token(r#"{"sub":"alice","exp":1700003600}"#);
        assert!(is_current(&token, NOW_MS));
    }

    #[wasm_bindgen_test]
    fn past_expiry_is_not_current() {
        // One hour in the past.
        let token = make_token(r#"{"sub":"alice","exp":1699996400}"#);
        assert!(!is_current(&token, NOW_MS));
    }

    #[wasm_bindgen_test]
    fn missing_expiry_claim_is_not_current() {
        let token = make_token(r#"{"sub":"alice"}"#);
        assert!(!is_current(&token, NOW_MS));
    }

    #[wasm_bindgen_test]
    fn garbled_token_is_not_current() {
        assert!(!is_current("not-a-jwt", NOW_MS));
        assert!(!is_current("also.not!base64.here", NOW_MS));
        assert!(!is_current("", NOW_MS));
    }

    #[wasm_bindgen_test]
    fn claims_decode() {
        let token = make_token(r#"{"exp":1700003600}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.exp, Some(1700003600));
    }
}
