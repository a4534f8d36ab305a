#[cfg(debug_assertions)]
use gloo::console;
use web_sys::SubmitEvent;
use yew::prelude::*;

use tally_web_ui_shared::constants::{API_ANALYTICS_BY_DATE, CLASS_BUTTON_DARK};
use tally_web_ui_shared::error::FetchError;
use tally_web_ui_shared::proto::AnalyticsSummary;
use tally_web_ui_shared::ui::do_page_header;
use tally_web_ui_shared::utils::get_value_from_input_event;
use tally_web_ui_shared::{do_request, error_detail, RequestMethod};

pub enum Msg {
    FromInput(String),
    ToInput(String),
    Submit,
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
    Idle,
    Loading,
    Ready { summary: AnalyticsSummary },
    Error { emsg: String },
}

pub struct ByDateApp {
    state: State,
    from: String,
    to: String,
}

fn parse_date(value: &str) -> Option<time::Date> {
    time::Date::parse(
        value,
        &time::macros::format_description!("[year]-[month]-[day]"),
    )
    .ok()
}

/// The form's own checks, run before anything leaves the browser. The date
/// inputs hand us ISO dates or empty strings, but a hand-edited URL bar can
/// produce anything, so the parse failure gets its own message.
pub(crate) fn validate_range(from: &str, to: &str) -> Result<(), &'static str> {
    if from.is_empty() || to.is_empty() {
        return Err("Please select both dates.");
    }
    let (from, to) = match (parse_date(from), parse_date(to)) {
        (Some(from), Some(to)) => (from, to),
        _ => return Err("Dates must be in YYYY-MM-DD format."),
    };
    if from > to {
        return Err("The from date must be on or before the to date.");
    }
    Ok(())
}

impl Component for ByDateApp {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        #[cfg(debug_assertions)]
        console::debug!("by_date::create");

        ByDateApp {
            state: State::Idle,
            from: String::new(),
            to: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FromInput(value) => {
                self.from = value;
                false
            }
            Msg::ToInput(value) => {
                self.to = value;
                false
            }
            Msg::Submit => {
                if let Err(emsg) = validate_range(&self.from, &self.to) {
                    self.state = State::Error {
                        emsg: emsg.to_string(),
                    };
                    return true;
                }
                self.state = State::Loading;
                let from = self.from.clone();
                let to = self.to.clone();
                ctx.link().send_future(async move {
                    match Self::fetch_by_date(&from, &to).await {
                        Ok(v) => v,
                        Err(v) => v.into(),
                    }
                });
                true
            }
            Msg::Ready { summary } => {
                self.state = State::Ready { summary };
                true
            }
            Msg::Error { emsg } => {
                self.state = State::Error { emsg };
                true
            }
        }
    }

    fn changed(&mut self, _ctx: &Context<Self>, _props: &Self::Properties) -> bool {
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let busy = matches!(self.state, State::Loading);

        html! {
            <>
                { do_page_header("Analytics By Date Range") }
                <form
                    onsubmit={ ctx.link().callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    }) }
                >
                    <div class="mb-3">
                        <label for="fromDate" class="form-label">{ "From:" }</label>
                        <input
                            id="fromDate"
                            name="fromDate"
                            type="date"
                            class="form-control"
                            value={ self.from.clone() }
                            disabled={ busy }
                            oninput={ ctx.link().callback(|e: InputEvent| Msg::FromInput(get_value_from_input_event(e))) }
                        />
                    </div>
                    <div class="mb-3">
                        <label for="toDate" class="form-label">{ "To:" }</label>
                        <input
                            id="toDate"
                            name="toDate"
                            type="date"
                            class="form-control"
                            value={ self.to.clone() }
                            disabled={ busy }
                            oninput={ ctx.link().callback(|e: InputEvent| Msg::ToInput(get_value_from_input_event(e))) }
                        />
                    </div>
                    <button type="submit" class={CLASS_BUTTON_DARK} disabled={ busy }>
                        { "Get Analytics" }
                    </button>
                </form>
                <div class="mt-3">
                    { self.view_results() }
                </div>
            </>
        }
    }
}

impl ByDateApp {
    fn view_results(&self) -> Html {
        match &self.state {
            State::Idle => html! {},
            State::Loading => html! { <p>{ "Loading analytics..." }</p> },
            State::Ready { summary } => html! {
                <ul>
                    <li><strong>{ "Total Sales: " }</strong>{ format!("${:.2}", summary.total_sales) }</li>
                    <li><strong>{ "Total Transactions: " }</strong>{ summary.total_transactions }</li>
                    <li><strong>{ "Average Order Value: " }</strong>{ format!("${:.2}", summary.average_order_value) }</li>
                </ul>
            },
            State::Error { emsg } => html! {
                <p class="text-danger">{ format!("Error: {}", emsg) }</p>
            },
        }
    }

    async fn fetch_by_date(from: &str, to: &str) -> Result<Msg, FetchError> {
        // Dates were validated as ISO before we got here, so they are safe
        // to splice into the query string directly.
        let uri = format!("{}?from={}&to={}", API_ANALYTICS_BY_DATE, from, to);
        let (status, body) = do_request(&uri, RequestMethod::GET, None).await?;

        if status == 200 {
            match serde_wasm_bindgen::from_value::<AnalyticsSummary>(body) {
                Ok(summary) => Ok(Msg::Ready { summary }),
                Err(e) => {
                    gloo::console::error!(format!("malformed analytics response -> {:?}", e).as_str());
                    Ok(Msg::Error {
                        emsg: "Malformed analytics response".to_string(),
                    })
                }
            }
        } else {
            Ok(Msg::Error {
                emsg: error_detail(&body, "Failed to fetch analytics by date"),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validate_range;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn both_dates_are_required() {
        assert_eq!(validate_range("", ""), Err("Please select both dates."));
        assert_eq!(
            validate_range("2025-01-01", ""),
            Err("Please select both dates.")
        );
        assert_eq!(
            validate_range("", "2025-01-31"),
            Err("Please select both dates.")
        );
    }

    #[wasm_bindgen_test]
    fn malformed_dates_are_rejected() {
        assert_eq!(
            validate_range("01/02/2025", "2025-01-31"),
            Err("Dates must be in YYYY-MM-DD format.")
        );
        assert_eq!(
            validate_range("2025-01-01", "soon"),
            Err("Dates must be in YYYY-MM-DD format.")
        );
    }

    #[wasm_bindgen_test]
    fn inverted_ranges_are_rejected() {
        assert_eq!(
            validate_range("2025-02-01", "2025-01-01"),
            Err("The from date must be on or before the to date.")
        );
    }

    #[wasm_bindgen_test]
    fn valid_ranges_pass() {
        assert!(validate_range("2025-01-01", "2025-01-31").is_ok());
        assert!(validate_range("2025-01-01", "2025-01-01").is_ok());
    }
}
