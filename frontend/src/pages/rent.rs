use bbcars_common::i18n::translations;
use bbcars_common::leads::LeadRequest;
use bbcars_common::Catalog;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::lead_form::{use_lead_submit, Field, LeadForm};
use crate::components::page_banner::PageBanner;
use crate::LangProps;

#[function_component(Rent)]
pub fn rent(props: &LangProps) -> Html {
    let lang = props.lang;
    let t = translations(lang);
    let catalog = Catalog::builtin();
    let car_id = use_state(|| catalog.vehicles().first().map(|v| v.id.to_string()).unwrap_or_default());
    let date_from = use_state(String::new);
    let date_to = use_state(String::new);
    let phone = use_state(String::new);
    let email = use_state(String::new);
    let (status, submit) = use_lead_submit();

    let on_car = {
        let car_id = car_id.clone();
        Callback::from(move |e: Event| car_id.set(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };
    let on_submit = {
        let (car_id, date_from, date_to, phone, email) =
            (car_id.clone(), date_from.clone(), date_to.clone(), phone.clone(), email.clone());
        Callback::from(move |_| {
            submit.emit(LeadRequest::Rent {
                car_id: (*car_id).clone(),
                date_from: (*date_from).clone(),
                date_to: (*date_to).clone(),
                phone: (*phone).clone(),
                email: (*email).clone(),
            })
        })
    };

    html! {
        <div class="form-page fade-in">
            <PageBanner title={t.rent_title} />
            <section class="form-page-grid">
                <div>
                    <p class="lead-text">{t.rent_text}</p>
                </div>
                <LeadForm {lang} status={(*status).clone()} submit_label={t.rent_submit} {on_submit}>
                    <label class="form-field">
                        <span>{t.form_car}</span>
                        <select onchange={on_car}>
                            { for catalog.vehicles().iter().map(|v| html! {
                                <option key={v.id} value={v.id} selected={*car_id == v.id}>{v.display_name()}</option>
                            }) }
                        </select>
                    </label>
                    <div class="form-row">
                        <Field label={t.form_date_from} value={date_from} input_type="date" />
                        <Field label={t.form_date_to} value={date_to} input_type="date" />
                    </div>
                    <div class="form-row">
                        <Field label={t.form_email} value={email} input_type="email" />
                        <Field label={t.form_phone} value={phone} input_type="tel" placeholder="+420" />
                    </div>
                </LeadForm>
            </section>
        </div>
    }
}
