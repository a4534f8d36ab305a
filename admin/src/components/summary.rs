#[cfg(debug_assertions)]
use gloo::console;
use yew::prelude::*;

use tally_web_ui_shared::chart;
use tally_web_ui_shared::constants::{API_ANALYTICS_SUMMARY, ID_SUMMARY_CHART};
use tally_web_ui_shared::error::FetchError;
use tally_web_ui_shared::proto::AnalyticsSummary;
use tally_web_ui_shared::ui::{do_alert_error, do_page_header, loading_spinner};
use tally_web_ui_shared::{do_request, error_detail, RequestMethod};

pub enum Msg {
    Ready { summary: AnalyticsSummary },
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
    Ready { summary: AnalyticsSummary },
    Error { emsg: String },
}

pub struct SummaryApp {
    state: State,
}

impl Component for SummaryApp {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        #[cfg(debug_assertions)]
        console::debug!("summary::create");

        ctx.link().send_future(async {
            match Self::fetch_summary().await {
                Ok(v) => v,
                Err(v) => v.into(),
            }
        });

        SummaryApp {
            state: State::Waiting,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        #[cfg(debug_assertions)]
        console::debug!("summary::update");
        match msg {
            Msg::Ready { summary } => self.state = State::Ready { summary },
            Msg::Error { emsg } => self.state = State::Error { emsg },
        }

        true
    }

    fn changed(&mut self, _ctx: &Context<Self>, _props: &Self::Properties) -> bool {
        false
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        // The canvas only exists once the Ready branch has rendered, so the
        // hand-off to the chart shim happens here rather than in update().
        if let State::Ready { summary } = &self.state {
            chart::render(ID_SUMMARY_CHART, &chart::summary_chart(summary));
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.state {
            State::Waiting => loading_spinner(),
            State::Ready { .. } => html! {
                <>
                    { do_page_header("Analytics Summary") }
                    <div class="chart-container" style="max-width: 600px; margin: 0 auto;">
                        <canvas id={ID_SUMMARY_CHART} width="400" height="400"></canvas>
                    </div>
                </>
            },
            State::Error { emsg } => {
                do_alert_error("Error loading summary chart", Some(emsg.as_str()))
            }
        }
    }
}

impl SummaryApp {
    async fn fetch_summary() -> Result<Msg, FetchError> {
        let (status, body) = do_request(API_ANALYTICS_SUMMARY, RequestMethod::GET, None).await?;

        if status == 200 {
            match serde_wasm_bindgen::from_value::<AnalyticsSummary>(body) {
                Ok(summary) => Ok(Msg::Ready { summary }),
                Err(e) => {
                    gloo::console::error!(format!("malformed summary response -> {:?}", e).as_str());
                    Ok(Msg::Error {
                        emsg: "Malformed summary response".to_string(),
                    })
                }
            }
        } else {
            Ok(Msg::Error {
                emsg: error_detail(&body, "Failed to fetch summary"),
            })
        }
    }
}
