use gloo_net::http::Request;
use log::{error, info};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::lead::form_state::LeadFormState;
use crate::lead::models::{Lead, LeadResponse, SubmitOutcome};

/// Posts the lead and reads back the relay's verdict. Every failure along
/// the way collapses into the text that ends up in the error outcome.
async fn send_lead(lead: &Lead) -> Result<LeadResponse, String> {
    let response = Request::post(config::get_lead_api_url())
        .json(lead)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let status = response.status();
    let body = response.text().await.map_err(|e| e.to_string())?;

    match serde_json::from_str::<LeadResponse>(&body) {
        Ok(parsed) => {
            if !parsed.success.unwrap_or(false) {
                error!("Lead rejected with status {}: {}", status, body);
            }
            Ok(parsed)
        }
        Err(e) => {
            error!("Unexpected lead response with status {}: {}", status, body);
            Err(format!("HTTP {}: {}", status, e))
        }
    }
}

fn alert(text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(text);
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub on_outcome: Callback<SubmitOutcome>,
}

pub enum LeadFormMsg {
    SetName(String),
    SetPhone(String),
    Submit,
    Submitted(Result<LeadResponse, String>),
}

pub struct LeadForm {
    state: LeadFormState,
}

impl Component for LeadForm {
    type Message = LeadFormMsg;
    type Properties = LeadFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: LeadFormState::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LeadFormMsg::SetName(name) => {
                self.state.name = name;
                true
            }
            LeadFormMsg::SetPhone(phone) => {
                self.state.phone = phone;
                true
            }
            LeadFormMsg::Submit => match self.state.begin_submit() {
                Err(e) => {
                    alert(e.alert_text());
                    false
                }
                Ok(lead) => {
                    ctx.link().send_future(async move {
                        LeadFormMsg::Submitted(send_lead(&lead).await)
                    });
                    true
                }
            },
            LeadFormMsg::Submitted(result) => {
                let outcome = self.state.finish_submit(result);
                match &outcome {
                    SubmitOutcome::Success => info!("Lead delivered"),
                    SubmitOutcome::Error { message } => error!("Lead submission failed: {}", message),
                }
                ctx.props().on_outcome.emit(outcome);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            LeadFormMsg::Submit
        });

        html! {
            <form class="lead-form" {onsubmit}>
                <div class="form-group">
                    <label for="name">{"Ваше имя"}</label>
                    <input
                        type="text"
                        id="name"
                        placeholder="Иван"
                        value={self.state.name.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            LeadFormMsg::SetName(input.value())
                        })}
                    />
                </div>
                <div class="form-group">
                    <label for="phone">{"Телефон"}</label>
                    <input
                        type="tel"
                        id="phone"
                        placeholder="+7 (999) 123-45-67"
                        value={self.state.phone.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            LeadFormMsg::SetPhone(input.value())
                        })}
                    />
                </div>
                <button type="submit" class="cta-button submit-button" disabled={self.state.submitting}>
                    { self.state.button_label() }
                </button>
            </form>
        }
    }
}
