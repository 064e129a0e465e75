use bbcars_common::i18n::translations;
use bbcars_common::leads::LeadRequest;
use yew::prelude::*;

use crate::components::lead_form::{use_lead_submit, Field, LeadForm};
use crate::components::page_banner::{steps, PageBanner};
use crate::LangProps;

#[function_component(Buyout)]
pub fn buyout(props: &LangProps) -> Html {
    let lang = props.lang;
    let t = translations(lang);
    let brand_model = use_state(String::new);
    let year = use_state(String::new);
    let mileage = use_state(String::new);
    let phone = use_state(String::new);
    let (status, submit) = use_lead_submit();

    let on_submit = {
        let (brand_model, year, mileage, phone) = (brand_model.clone(), year.clone(), mileage.clone(), phone.clone());
        Callback::from(move |_| {
            submit.emit(LeadRequest::Buyout {
                brand_model: (*brand_model).clone(),
                year: (*year).clone(),
                mileage: (*mileage).clone(),
                phone: (*phone).clone(),
            })
        })
    };

    html! {
        <div class="form-page fade-in">
            <PageBanner title={t.buyout_title} image={AttrValue::Static("/vykup-vozu.png")} />
            <section class="form-page-grid">
                <div>
                    <h2 class="section-title">{t.buyout_heading}</h2>
                    { steps(&t.buyout_steps) }
                </div>
                <LeadForm {lang} status={(*status).clone()} submit_label={t.buyout_submit} sent_text={AttrValue::Static(t.buyout_sent_text)} {on_submit}>
                    <Field label={t.form_brand_model} value={brand_model} placeholder={t.form_brand_model_placeholder} />
                    <div class="form-row">
                        <Field label={t.form_year} value={year} placeholder="2023" />
                        <Field label={t.form_mileage} value={mileage} placeholder="5 000 km" />
                    </div>
                    <Field label={t.form_phone} value={phone} input_type="tel" placeholder="+420" />
                </LeadForm>
            </section>
        </div>
    }
}
