use bbcars_common::contact;
use bbcars_common::i18n::translations;
use bbcars_common::leads::LeadRequest;
use yew::prelude::*;

use crate::components::lead_form::{use_lead_submit, Field, LeadForm};
use crate::LangProps;

#[function_component(Contact)]
pub fn contact(props: &LangProps) -> Html {
    let lang = props.lang;
    let t = translations(lang);
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let (status, submit) = use_lead_submit();

    let on_submit = {
        let (name, email, message) = (name.clone(), email.clone(), message.clone());
        Callback::from(move |_| {
            submit.emit(LeadRequest::Contact {
                name: (*name).clone(),
                email: (*email).clone(),
                message: (*message).clone(),
            })
        })
    };
    let socials = [
        ("Instagram", contact::INSTAGRAM_URL),
        ("Facebook", contact::FACEBOOK_URL),
        ("WhatsApp", contact::WHATSAPP_URL),
    ];

    let style = r#"
        .contact-page { padding: 10rem 5rem 6rem; max-width: 1536px; margin: 0 auto; }
        .contact-page header { margin-bottom: 8rem; }
        .contact-page header h1 { font-size: 8rem; line-height: 1; }
        .contact-grid {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 5rem;
            padding: 5rem 0;
            border-top: 1px solid rgba(255, 255, 255, 0.1);
        }
        .contact-details > div + div { margin-top: 5rem; }
        .contact-details p:not(.spec-label), .contact-details a.contact-line {
            display: block;
            font-size: 1.5rem;
            font-weight: 300;
            color: #fff;
            text-decoration: none;
        }
        .contact-socials { display: flex; flex-wrap: wrap; gap: 3rem; }
        .contact-socials a { font-size: 12px; letter-spacing: 0.4em; text-transform: uppercase; color: rgba(255, 255, 255, 0.5); text-decoration: none; }
        .contact-socials a:hover { color: #fff; }
        .contact-visit { position: relative; height: 600px; overflow: hidden; border: 1px solid rgba(255, 255, 255, 0.05); }
        .contact-visit img { width: 100%; height: 100%; object-fit: cover; filter: grayscale(1); opacity: 0.5; }
        .contact-visit a {
            position: absolute;
            top: 50%;
            left: 50%;
            transform: translate(-50%, -50%);
            padding: 2.5rem;
            background: rgba(0, 0, 0, 0.8);
            border: 1px solid rgba(255, 255, 255, 0.2);
            text-align: center;
            color: #fff;
            text-decoration: none;
        }
        .contact-visit a span { display: block; font-size: 10px; letter-spacing: 0.5em; text-transform: uppercase; margin-bottom: 1rem; }
        .contact-visit a strong { font-family: 'Playfair Display', serif; text-transform: uppercase; font-size: 1.1rem; }
        .contact-form { max-width: 48rem; padding-top: 5rem; border-top: 1px solid rgba(255, 255, 255, 0.1); }
        @media (max-width: 1024px) {
            .contact-page { padding: 8rem 1.5rem 4rem; }
            .contact-page header { margin-bottom: 4rem; }
            .contact-page header h1 { font-size: 3rem; }
            .contact-grid { grid-template-columns: 1fr; }
            .contact-visit { height: 400px; }
        }
    "#;

    html! {
        <div class="contact-page fade-in">
            <style>{style}</style>
            <header>
                <span class="kicker">{t.contact_kicker}</span>
                <h1 class="page-title">{t.contact_title}</h1>
            </header>

            <section class="contact-grid">
                <div class="contact-details">
                    <div>
                        <p class="spec-label">{t.contact_showroom}</p>
                        <p>{contact::COMPANY_NAME}</p>
                        <p>{format!("{}, {}", contact::STREET, contact::CITY)}</p>
                        <p>{t.contact_region}</p>
                        <p>{t.contact_country}</p>
                    </div>
                    <div>
                        <p class="spec-label">{t.contact_personal}</p>
                        <a class="contact-line" href={contact::MAILTO_URI}>{contact::EMAIL}</a>
                        <a class="contact-line" href={contact::PHONE_URI}>{contact::PHONE_DISPLAY}</a>
                    </div>
                    <div class="contact-socials">
                        { for socials.iter().map(|(label, href)| html! {
                            <a key={*label} href={*href} target="_blank" rel="noopener noreferrer">{*label}</a>
                        }) }
                    </div>
                </div>
                <div class="contact-visit">
                    <img src="/showroom.png" alt={t.contact_showroom} loading="lazy" />
                    <a href={contact::MAPS_SEARCH_URL} target="_blank" rel="noopener noreferrer">
                        <span>{t.contact_visit}</span>
                        <strong>{t.contact_appointment}</strong>
                    </a>
                </div>
            </section>

            <section class="contact-form">
                <h2 class="section-title">{t.contact_form_title}</h2>
                <LeadForm {lang} status={(*status).clone()} submit_label={t.contact_submit} {on_submit}>
                    <div class="form-row">
                        <Field label={t.form_name} value={name} />
                        <Field label={t.form_email} value={email} input_type="email" />
                    </div>
                    <Field label={t.form_message} value={message} multiline=true />
                </LeadForm>
            </section>
        </div>
    }
}
