use bbcars_common::i18n::translations;
use bbcars_common::leads::{LeadReceipt, LeadRequest};
use bbcars_common::{Catalog, Language};
use serde_json::Value;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::utils::api::Api;

#[derive(Debug, Clone, PartialEq)]
pub enum FormStatus {
    Idle,
    Sending,
    Sent,
    /// Human-readable reason, shown under the generic error message.
    Failed(String),
}

/// Validates a lead locally, then posts it to the API.
#[hook]
pub fn use_lead_submit() -> (UseStateHandle<FormStatus>, Callback<LeadRequest>) {
    let status = use_state(|| FormStatus::Idle);
    let submit = {
        let status = status.clone();
        Callback::from(move |lead: LeadRequest| {
            let lead = match lead.validate(&Catalog::builtin()) {
                Ok(lead) => lead,
                Err(e) => {
                    status.set(FormStatus::Failed(e.to_string()));
                    return;
                }
            };
            status.set(FormStatus::Sending);
            let status = status.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match send_lead(&lead).await {
                    Ok(receipt) => {
                        gloo_console::log!("Lead accepted:", receipt.reference);
                        status.set(FormStatus::Sent);
                    }
                    Err(reason) => {
                        gloo_console::error!("Lead failed:", reason.clone());
                        status.set(FormStatus::Failed(reason));
                    }
                }
            });
        })
    };
    (status, submit)
}

async fn send_lead(lead: &LeadRequest) -> Result<LeadReceipt, String> {
    let response = Api::post("/api/leads")
        .json(lead)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.ok() {
        return response.json::<LeadReceipt>().await.map_err(|e| e.to_string());
    }
    let status = response.status();
    let body: Value = response.json().await.unwrap_or(Value::Null);
    Err(body["error"]
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status)))
}

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    pub label: AttrValue,
    pub value: UseStateHandle<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(true)]
    pub required: bool,
    #[prop_or_default]
    pub multiline: bool,
}

#[function_component(Field)]
pub fn field(props: &FieldProps) -> Html {
    let value = props.value.clone();
    let control = if props.multiline {
        let oninput = Callback::from(move |e: InputEvent| {
            value.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        });
        html! {
            <textarea
                rows="4"
                value={(*props.value).clone()}
                placeholder={props.placeholder.clone()}
                required={props.required}
                {oninput}
            />
        }
    } else {
        let oninput = Callback::from(move |e: InputEvent| {
            value.set(e.target_unchecked_into::<HtmlInputElement>().value());
        });
        html! {
            <input
                type={props.input_type.clone()}
                value={(*props.value).clone()}
                placeholder={props.placeholder.clone()}
                required={props.required}
                {oninput}
            />
        }
    };
    html! {
        <label class="form-field">
            <span>{props.label.clone()}</span>
            {control}
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub lang: Language,
    pub status: FormStatus,
    pub submit_label: AttrValue,
    /// Replaces the generic confirmation text.
    #[prop_or_default]
    pub sent_text: Option<AttrValue>,
    pub on_submit: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Form frame shared by every lead form: submit button, progress, error
/// and the confirmation that replaces the form once sent.
#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let t = translations(props.lang);
    if props.status == FormStatus::Sent {
        return html! {
            <div class="form-sent">
                <h3>{t.form_sent_title}</h3>
                <p>{props.sent_text.clone().unwrap_or(AttrValue::Static(t.form_sent_text))}</p>
            </div>
        };
    }
    let onsubmit = props.on_submit.reform(|e: SubmitEvent| e.prevent_default());
    let sending = props.status == FormStatus::Sending;
    html! {
        <form class="lead-form" {onsubmit}>
            { for props.children.iter() }
            if let FormStatus::Failed(reason) = &props.status {
                <div class="form-error">
                    <p>{t.form_error}</p>
                    <small>{reason.clone()}</small>
                </div>
            }
            <button type="submit" class="btn-gold" disabled={sending}>
                { if sending { AttrValue::Static(t.form_sending) } else { props.submit_label.clone() } }
            </button>
        </form>
    }
}
