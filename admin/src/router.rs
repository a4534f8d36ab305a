use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use yew::prelude::*;
use yew_router::prelude::*;

use tally_web_ui_shared::ui::do_page_header;

use crate::components::by_date::ByDateApp;
use crate::components::summary::SummaryApp;
use crate::components::top_customers::TopCustomersApp;
use crate::components::upload::UploadApp;

/// The dashboard's views. A closed set: adding a view means adding a variant
/// here and a branch in [`switch`], and the sidebar picks it up by itself.
/// The dashboard root is the summary view, so freshly landing admins always
/// see the same thing regardless of where they last were.
#[derive(Routable, PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize, Sequence)]
pub enum ViewRoute {
    #[at("/ui/admin")]
    Summary,

    #[at("/ui/admin/upload")]
    Upload,

    #[at("/ui/admin/top-customers")]
    TopCustomers,

    #[at("/ui/admin/by-date")]
    ByDate,

    #[not_found]
    #[at("/ui/admin/404")]
    NotFound,
}

impl Display for ViewRoute {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ViewRoute::Summary => "Summary",
            ViewRoute::Upload => "Upload Sales Data",
            ViewRoute::TopCustomers => "Top Customers",
            ViewRoute::ByDate => "By Date Range",
            ViewRoute::NotFound => "Not Found",
        };
        write!(f, "{label}")
    }
}

// Needed for yew to pass by value
#[allow(clippy::needless_pass_by_value)]
pub(crate) fn switch(route: ViewRoute) -> Html {
    #[cfg(debug_assertions)]
    gloo::console::debug!(format!("admin::switch -> {:?}", route).as_str());
    match route {
        ViewRoute::Summary => html! { <SummaryApp /> },
        ViewRoute::Upload => html! { <UploadApp /> },
        ViewRoute::TopCustomers => html! { <TopCustomersApp /> },
        ViewRoute::ByDate => html! { <ByDateApp /> },
        ViewRoute::NotFound => html! {
            <>
                { do_page_header("Page not found") }
                <Link<ViewRoute> to={ ViewRoute::Summary }>
                    { "Back to the dashboard" }
                </Link<ViewRoute>>
            </>
        },
    }
}
