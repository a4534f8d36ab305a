//! Constants used throughout the web UI. Changing a page URL here must be
//! matched by the routing tables of the page crates.

// Page URLs.
pub const URL_LOGIN: &str = "/ui/login";
pub const URL_USER_HOME: &str = "/ui/home";
pub const URL_ADMIN_HOME: &str = "/ui/admin";
/// Where the guard sends people it turned away. The query marker lets the
/// login page explain why they landed there.
pub const URL_LOGIN_UNAUTHORIZED: &str = "/ui/login?error=unauthorized";

pub const QUERY_ERROR_KEY: &str = "error";
pub const QUERY_ERROR_UNAUTHORIZED: &str = "unauthorized";

// Backend endpoints.
pub const API_LOGIN: &str = "/login";
pub const API_REGISTER: &str = "/register";
pub const API_VERIFY_TOKEN: &str = "/api/verify-token";
pub const API_UPLOAD_SALES: &str = "/upload-sales";
pub const API_ANALYTICS_SUMMARY: &str = "/analytics/summary";
pub const API_ANALYTICS_TOP_CUSTOMERS: &str = "/analytics/top-customers";
pub const API_ANALYTICS_BY_DATE: &str = "/analytics/by-date";

// Upload constraints. The backend enforces its own copy of these, the UI
// checks first so nothing oversized ever leaves the browser.
pub const MAX_UPLOAD_SIZE_BYTES: f64 = 5.0 * 1024.0 * 1024.0;
pub const UPLOAD_EXTENSION: &str = ".csv";

pub const CONTENT_TYPE: &str = "content-type";
pub const APPLICATION_JSON: &str = "application/json";
pub const APPLICATION_FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

// Element ids the components look up or hand to the chart shim.
pub const ID_SUMMARY_CHART: &str = "summaryChart";
pub const ID_TOP_CUSTOMERS_CHART: &str = "topCustomersChart";
pub const ID_UPLOAD_FILE_INPUT: &str = "salesFile";
pub const ID_LOGIN_USERNAME: &str = "username";

// CSS classes, bootstrap-flavoured like the rest of the styling.
pub const CSS_ALERT_DANGER: &str = "alert alert-danger";
pub const CSS_ALERT_INFO: &str = "alert alert-info";
pub const CSS_ALERT_SUCCESS: &str = "alert alert-success";
pub const CSS_NAV_LINK: &str = "nav-link";
pub const CSS_NAV_LINK_ACTIVE: &str = "nav-link active";
pub const CSS_NAVBAR_NAV: &str = "navbar navbar-expand-md navbar-dark bg-dark mb-4";
pub const CSS_NAVBAR_BRAND: &str = "navbar-brand";
pub const CSS_SIDEBAR: &str = "col-md-3 col-lg-2 d-md-block bg-light sidebar collapse";
pub const CSS_DASHBOARD_CONTENT: &str = "col-md-9 ms-sm-auto col-lg-10 px-md-4";
pub const CSS_PAGE_HEADER: &str =
    "d-flex justify-content-between flex-wrap flex-md-nowrap align-items-center pt-3 pb-2 mb-3 border-bottom";
pub const CLASS_BUTTON_DARK: &str = "btn btn-dark";

pub const CSS_CLASSES_BODY_FORM: &[&str] = &["flex-column", "d-flex", "h-100"];
