//! Wire types shared with the analytics backend. Field spellings follow the
//! backend exactly: the analytics payloads are camelCase, the customer list
//! is snake_case, and error bodies carry a `detail` string.

use serde::{Deserialize, Serialize};

use crate::session::Role;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// Success bodies that only carry a human-readable message.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error bodies. The backend is not perfectly consistent about sending
/// `detail`, hence the default.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_sales: f64,
    pub total_transactions: u64,
    pub average_order_value: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopCustomer {
    pub customer_name: String,
    pub total_sales: f64,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn summary_fields_are_camel_case() {
        let s: AnalyticsSummary = serde_json::from_str(
            r#"{"totalSales":1000.0,"totalTransactions":20,"averageOrderValue":50.0}"#,
        )
        .unwrap();
        assert_eq!(s.total_sales, 1000.0);
        assert_eq!(s.total_transactions, 20);
        assert_eq!(s.average_order_value, 50.0);
    }

    #[wasm_bindgen_test]
    fn top_customer_fields_are_snake_case() {
        let c: TopCustomer =
            serde_json::from_str(r#"{"customer_name":"Acme","total_sales":1234.5}"#).unwrap();
        assert_eq!(c.customer_name, "Acme");
        assert_eq!(c.total_sales, 1234.5);
    }

    #[wasm_bindgen_test]
    fn login_response_parses_roles() {
        let r: LoginResponse =
            serde_json::from_str(r#"{"access_token":"tok","role":"admin"}"#).unwrap();
        assert_eq!(r.role, Role::Admin);
        assert!(serde_json::from_str::<LoginResponse>(
            r#"{"access_token":"tok","role":"superuser"}"#
        )
        .is_err());
    }

    #[wasm_bindgen_test]
    fn register_request_serialises_role_lowercase() {
        let r = RegisterRequest {
            username: "bob".to_string(),
            password: "hunter2".to_string(),
            role: Role::User,
        };
        assert_eq!(
            serde_json::to_string(&r).unwrap(),
            r#"{"username":"bob","password":"hunter2","role":"user"}"#
        );
    }

    #[wasm_bindgen_test]
    fn error_detail_defaults_to_none() {
        let e: ApiError = serde_json::from_str("{}").unwrap();
        assert!(e.detail.is_none());
    }
}
