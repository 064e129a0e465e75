use bbcars_common::i18n::translations;
use bbcars_common::leads::LeadRequest;
use yew::prelude::*;

use crate::components::lead_form::{use_lead_submit, Field, LeadForm};
use crate::components::page_banner::{steps, PageBanner};
use crate::LangProps;

#[function_component(CustomOrder)]
pub fn custom_order(props: &LangProps) -> Html {
    let lang = props.lang;
    let t = translations(lang);
    let brand_model = use_state(String::new);
    let budget = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let note = use_state(String::new);
    let (status, submit) = use_lead_submit();

    let on_submit = {
        let (brand_model, budget, email, phone, note) =
            (brand_model.clone(), budget.clone(), email.clone(), phone.clone(), note.clone());
        Callback::from(move |_| {
            submit.emit(LeadRequest::CustomOrder {
                brand_model: (*brand_model).clone(),
                budget: (*budget).clone(),
                email: (*email).clone(),
                phone: (*phone).clone(),
                note: (*note).clone(),
            })
        })
    };

    html! {
        <div class="form-page fade-in">
            <PageBanner title={t.custom_order_title} />
            <section class="form-page-grid">
                <div>
                    <p class="lead-text">{t.custom_order_text}</p>
                    { steps(&t.custom_order_steps) }
                </div>
                <LeadForm {lang} status={(*status).clone()} submit_label={t.custom_order_submit} {on_submit}>
                    <Field label={t.form_brand_model} value={brand_model} placeholder={t.form_brand_model_placeholder} />
                    <Field label={t.form_budget} value={budget} placeholder="5 000 000 Kč" required={false} />
                    <div class="form-row">
                        <Field label={t.form_email} value={email} input_type="email" />
                        <Field label={t.form_phone} value={phone} input_type="tel" placeholder="+420" />
                    </div>
                    <Field label={t.form_note} value={note} placeholder={t.form_note_placeholder} required={false} multiline=true />
                </LeadForm>
            </section>
        </div>
    }
}
