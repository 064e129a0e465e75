use bbcars_common::contact;
use bbcars_common::i18n::translations;
use bbcars_common::leads::LeadRequest;
use bbcars_common::routes::Page;
use bbcars_common::{Catalog, Language};
use web_sys::Element;
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::carousel::Carousel;
use crate::components::lead_form::{use_lead_submit, Field, LeadForm};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct CarDetailProps {
    pub lang: Language,
    pub id: String,
}

#[function_component(CarDetail)]
pub fn car_detail(props: &CarDetailProps) -> Html {
    let lang = props.lang;
    let t = translations(lang);
    let catalog = Catalog::builtin();
    let inquiry_ref = use_node_ref();
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let note = use_state(String::new);
    let (status, submit) = use_lead_submit();

    // Unknown ids are redirected before this page renders.
    let Some(car) = catalog.find_vehicle(&props.id) else {
        return html! {};
    };

    let scroll_to_inquiry = {
        let inquiry_ref = inquiry_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(section) = inquiry_ref.cast::<Element>() {
                section.scroll_into_view();
            }
        })
    };
    let on_submit = {
        let (car_id, email, phone, note) = (car.id.to_string(), email.clone(), phone.clone(), note.clone());
        Callback::from(move |_| {
            submit.emit(LeadRequest::CarInquiry {
                car_id: car_id.clone(),
                email: (*email).clone(),
                phone: (*phone).clone(),
                note: (*note).clone(),
            })
        })
    };

    let specs = [
        (t.label_odometer, car.km),
        (t.label_in_service, car.in_service_from),
        (t.label_power, car.power_kw),
        (t.label_engine, car.engine_capacity),
        (t.label_fuel, car.specs.fuel),
        (t.label_drivetrain, car.drivetrain),
    ];
    let detail_block = |label: &'static str, hero: &'static str, rest: &'static [&'static str]| {
        html! {
            <div class="detail-gallery">
                <div class="detail-gallery-hero">
                    <img src={hero} alt={format!("{} {}", car.display_name(), label)} loading="lazy" />
                    <span>{label}</span>
                </div>
                if rest.len() > 1 {
                    <div class="detail-gallery-grid">
                        { for rest.iter().skip(1).take(4).map(|src| html! {
                            <img key={*src} src={*src} alt={car.display_name()} loading="lazy" />
                        }) }
                    </div>
                }
            </div>
        }
    };

    let style = r#"
        .car-hero { position: relative; height: 100vh; overflow: hidden; background: #000; }
        .car-intro {
            padding: 6rem 5rem 4rem;
            max-width: 1536px;
            margin: 0 auto;
        }
        .car-intro-head {
            display: flex;
            justify-content: space-between;
            align-items: baseline;
            gap: 5rem;
            padding-bottom: 4rem;
            border-bottom: 1px solid rgba(255, 255, 255, 0.05);
        }
        .car-intro h1 { font-size: 4.5rem; line-height: 1; }
        .car-intro h1 .brand { opacity: 0.2; margin-right: 1rem; font-weight: 400; }
        .car-price { font-size: 3.75rem; font-weight: 700; text-align: right; }
        .car-vat { font-size: 9px; letter-spacing: 0.2em; font-style: italic; color: rgba(255, 255, 255, 0.2); margin-top: 1rem; text-align: right; }
        .car-actions { margin-top: 2.5rem; display: flex; justify-content: flex-end; gap: 0.75rem; }
        .car-headline { margin-top: 4rem; font-family: 'Playfair Display', serif; font-style: italic; font-size: 2rem; color: rgba(255, 255, 255, 0.8); }
        .car-story { margin-top: 1.5rem; max-width: 56rem; color: rgba(255, 255, 255, 0.5); font-weight: 300; line-height: 1.8; }
        .car-description { margin-top: 2rem; list-style: none; padding: 0; }
        .car-description li { padding: 0.4rem 0; color: rgba(255, 255, 255, 0.6); }
        .car-description li::before { content: "\2014"; color: #dbad1e; margin-right: 1rem; }
        .car-specs {
            background: #080808;
            padding: 5rem;
            display: grid;
            grid-template-columns: repeat(6, 1fr);
            gap: 3rem;
            border-bottom: 1px solid rgba(255, 255, 255, 0.05);
        }
        .car-specs p:last-child { font-size: 14px; font-weight: 700; letter-spacing: 0.1em; text-transform: uppercase; }
        .car-equipment {
            padding: 6rem 5rem;
            max-width: 1536px;
            margin: 0 auto;
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 0.75rem 5rem;
        }
        .car-equipment p { font-size: 11px; font-weight: 300; color: rgba(255, 255, 255, 0.3); text-transform: uppercase; }
        .car-equipment p:hover { color: rgba(255, 255, 255, 0.8); }
        .detail-gallery-hero { position: relative; height: 75vh; overflow: hidden; }
        .detail-gallery-hero img { width: 100%; height: 100%; object-fit: cover; }
        .detail-gallery-hero span { position: absolute; left: 2.5rem; bottom: 2.5rem; font-size: 11px; letter-spacing: 0.8em; font-weight: 700; color: rgba(255, 255, 255, 0.5); }
        .detail-gallery-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2px; }
        .detail-gallery-grid img { width: 100%; aspect-ratio: 1; object-fit: cover; }
        .car-related { padding: 8rem 5rem; max-width: 1536px; margin: 0 auto; }
        .related-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2px; background: rgba(255, 255, 255, 0.05); }
        .related-card { background: #050505; padding: 2rem; display: flex; flex-direction: column; color: #fff; text-decoration: none; }
        .related-card img { width: 100%; aspect-ratio: 16 / 9; object-fit: cover; margin-bottom: 1.5rem; }
        .related-card .brand { font-size: 10px; letter-spacing: 0.3em; color: rgba(255, 255, 255, 0.2); font-weight: 700; }
        .related-card .price { margin-top: auto; font-size: 1.1rem; font-weight: 700; }
        @media (max-width: 1024px) {
            .car-intro, .car-equipment, .car-related { padding: 4rem 2rem; }
            .car-intro-head { flex-direction: column; gap: 2rem; }
            .car-intro h1 { font-size: 2.5rem; }
            .car-price, .car-vat { text-align: left; }
            .car-specs { grid-template-columns: 1fr 1fr; padding: 3rem 2rem; }
            .car-equipment { grid-template-columns: 1fr; }
            .related-grid { grid-template-columns: 1fr; }
        }
    "#;

    html! {
        <div class="car-detail">
            <style>{style}</style>
            <section class="car-hero">
                <Carousel
                    images={car.gallery()}
                    alt={car.display_name()}
                    prev_label={t.previous_image}
                    next_label={t.next_image}
                />
            </section>

            <section class="car-intro">
                <div class="car-intro-head">
                    <h1 class="page-title">
                        <span class="brand">{car.brand}</span>
                        <span>{car.model}</span>
                    </h1>
                    <div>
                        <p class="car-price">{car.price}</p>
                        <p class="car-vat">{t.label_vat_deductible}</p>
                    </div>
                </div>
                <div class="car-actions">
                    <a class="btn-outline" href={contact::PHONE_URI}>{t.call}</a>
                    <button class="btn-light" onclick={scroll_to_inquiry}>{t.interested}</button>
                </div>
                <p class="car-headline">{car.emotional_headline.get(lang)}</p>
                <p class="car-story">{car.story.get(lang)}</p>
                <ul class="car-description">
                    { for car.detailed_description.get(lang).iter().map(|line| html! { <li>{*line}</li> }) }
                </ul>
            </section>

            <section class="car-specs">
                { for specs.iter().map(|(label, value)| html! {
                    <div>
                        <p class="spec-label">{*label}</p>
                        <p>{*value}</p>
                    </div>
                }) }
            </section>

            <section class="car-equipment">
                { for car.equipment.iter().map(|item| html! { <p>{*item}</p> }) }
            </section>

            <section class="car-galleries">
                { detail_block(t.interior, car.interior_hero(), car.interior_images) }
                { detail_block(t.exterior, car.exterior_hero(), car.exterior_images) }
            </section>

            <section class="inquiry" ref={inquiry_ref}>
                <div class="inquiry-grid">
                    <div>
                        <span class="kicker">{t.inquiry_kicker}</span>
                        <h2 class="section-title">{t.inquiry_title}</h2>
                        <p class="lead-text">{t.inquiry_text}</p>
                    </div>
                    <LeadForm {lang} status={(*status).clone()} submit_label={t.form_submit} {on_submit}>
                        <div class="form-row">
                            <Field label={t.form_email} value={email} input_type="email" placeholder="vas@email.cz" />
                            <Field label={t.form_phone} value={phone} input_type="tel" placeholder="+420 000 000 000" />
                        </div>
                        <Field label={t.form_note} value={note} placeholder={t.form_note_placeholder} required={false} multiline=true />
                    </LeadForm>
                </div>
            </section>

            <section class="car-related">
                <h2 class="section-title">{t.related_title}</h2>
                <div class="related-grid">
                    { for catalog.related(car.id).into_iter().map(|other| html! {
                        <Link<Route> key={other.id} to={Route::page(lang, Page::CarDetail(other.id.to_string()))} classes="related-card">
                            <img src={other.image} alt={other.model} loading="lazy" />
                            <p class="brand">{other.brand}</p>
                            <h3>{other.model}</h3>
                            <p class="price">{other.price}</p>
                        </Link<Route>>
                    }) }
                </div>
            </section>
        </div>
    }
}
