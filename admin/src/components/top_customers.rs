#[cfg(debug_assertions)]
use gloo::console;
use yew::prelude::*;

use tally_web_ui_shared::chart;
use tally_web_ui_shared::constants::{API_ANALYTICS_TOP_CUSTOMERS, ID_TOP_CUSTOMERS_CHART};
use tally_web_ui_shared::error::FetchError;
use tally_web_ui_shared::proto::TopCustomer;
use tally_web_ui_shared::ui::{do_alert_error, do_page_header, loading_spinner};
use tally_web_ui_shared::{do_request, error_detail, RequestMethod};

pub enum Msg {
    Ready { customers: Vec<TopCustomer> },
    Error { emsg: String },
}

impl From<FetchError> for Msg {
    fn from(fe: FetchError) -> Self {
        Msg::Error {
            emsg: fe.as_string(),
        }
    }
}

pub enum State {
    Waiting,
    Ready { customers: Vec<TopCustomer> },
    Error { emsg: String },
}

pub struct TopCustomersApp {
    state: State,
}

impl Component for TopCustomersApp {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        #[cfg(debug_assertions)]
        console::debug!("top_customers::create");

        ctx.link().send_future(async {
            match Self::fetch_top_customers().await {
                Ok(v) => v,
                Err(v) => v.into(),
            }
        });

        TopCustomersApp {
            state: State::Waiting,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        #[cfg(debug_assertions)]
        console::debug!("top_customers::update");
        match msg {
            Msg::Ready { customers } => self.state = State::Ready { customers },
            Msg::Error { emsg } => self.state = State::Error { emsg },
        }

        true
    }

    fn changed(&mut self, _ctx: &Context<Self>, _props: &Self::Properties) -> bool {
        false
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let State::Ready { customers } = &self.state {
            chart::render(
                ID_TOP_CUSTOMERS_CHART,
                &chart::top_customers_chart(customers),
            );
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.state {
            State::Waiting => loading_spinner(),
            State::Ready { .. } => html! {
                <section style="margin-top: 40px;">
                    { do_page_header("Top 3 Customers by Sales") }
                    <canvas id={ID_TOP_CUSTOMERS_CHART} height="150"></canvas>
                </section>
            },
            State::Error { emsg } => {
                do_alert_error("Unable to load top customers chart.", Some(emsg.as_str()))
            }
        }
    }
}

impl TopCustomersApp {
    async fn fetch_top_customers() -> Result<Msg, FetchError> {
        let (status, body) =
            do_request(API_ANALYTICS_TOP_CUSTOMERS, RequestMethod::GET, None).await?;

        if status == 200 {
            match serde_wasm_bindgen::from_value::<Vec<TopCustomer>>(body) {
                Ok(customers) => Ok(Msg::Ready { customers }),
                Err(e) => {
                    gloo::console::error!(
                        format!("malformed top customers response -> {:?}", e).as_str()
                    );
                    Ok(Msg::Error {
                        emsg: "Malformed top customers response".to_string(),
                    })
                }
            }
        } else {
            Ok(Msg::Error {
                emsg: error_detail(&body, "Failed to fetch top customers"),
            })
        }
    }
}
