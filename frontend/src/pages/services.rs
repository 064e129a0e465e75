use bbcars_common::contact;
use bbcars_common::i18n::translations;
use yew::prelude::*;

use crate::components::page_banner::PageBanner;
use crate::LangProps;

const BANNER_IMAGE: &str = "https://images.unsplash.com/photo-1492144534655-ae79c964c9d7?auto=format&fit=crop&q=90&w=2400";

#[function_component(Services)]
pub fn services(props: &LangProps) -> Html {
    let t = translations(props.lang);
    let (finance_title, finance_text) = t.services_finance;
    let (insurance_title, insurance_text) = t.services_insurance;

    let style = r#"
        .service-block {
            max-width: 1536px;
            margin: 0 auto;
            padding: 6rem 5rem;
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 5rem;
            border-top: 1px solid rgba(255, 255, 255, 0.05);
        }
        .service-list { list-style: none; padding: 0; margin: 2rem 0; color: rgba(255, 255, 255, 0.5); }
        .service-list li { display: flex; align-items: center; padding: 0.5rem 0; }
        .service-list li::before { content: ""; width: 6px; height: 6px; background: #dbad1e; margin-right: 1rem; }
        .service-price { padding-top: 2rem; border-top: 1px solid rgba(255, 255, 255, 0.05); font-size: 1.5rem; font-weight: 700; }
        .service-price small { font-size: 0.875rem; font-weight: 400; color: rgba(255, 255, 255, 0.4); margin-left: 0.5rem; }
        .service-dispatch { margin-top: 2rem; }
        .service-dispatch a { display: block; color: #fff; text-decoration: none; }
        .service-dispatch a:first-of-type { font-size: 1.25rem; font-weight: 700; }
        .service-dispatch a:last-of-type { opacity: 0.6; }
        .service-image img { width: 100%; height: 100%; min-height: 400px; object-fit: cover; filter: grayscale(1); opacity: 0.4; transition: all 1s; }
        .service-image img:hover { filter: none; opacity: 1; }
        .partners { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; opacity: 0.4; align-content: start; }
        .partners div { padding: 2rem; border: 1px solid rgba(255, 255, 255, 0.05); text-align: center; font-size: 12px; font-weight: 700; letter-spacing: 0.1em; }
        .partners div:hover { color: #dbad1e; }
        .service-text h3 { font-size: 1.5rem; margin-bottom: 1rem; }
        .service-text p { color: rgba(255, 255, 255, 0.4); font-weight: 300; line-height: 1.7; }
        .service-text > div + div { margin-top: 3rem; padding-top: 2rem; border-top: 1px solid rgba(255, 255, 255, 0.05); }
        .insurance-kinds { display: flex; gap: 2.5rem; margin-top: 1.5rem; }
        .insurance-kinds div { flex: 1; padding: 1.5rem; background: #080808; border: 1px solid rgba(255, 255, 255, 0.05); font-weight: 700; }
        .insurance-kinds span { display: block; font-size: 9px; letter-spacing: 0.1em; color: #dbad1e; margin-bottom: 0.5rem; }
        @media (max-width: 1024px) {
            .service-block { grid-template-columns: 1fr; padding: 4rem 2rem; }
            .partners { grid-template-columns: 1fr 1fr; order: 2; }
        }
    "#;

    html! {
        <div class="services fade-in">
            <style>{style}</style>
            <PageBanner title={t.services_title} image={AttrValue::Static(BANNER_IMAGE)} />

            <section class="service-block">
                <div>
                    <span class="kicker">{t.services_logistics_kicker}</span>
                    <h2 class="section-title">{t.services_logistics_title}</h2>
                    <p class="lead-text">{t.services_logistics_lead}</p>
                    <ul class="service-list">
                        { for t.services_logistics_items.iter().map(|item| html! { <li>{*item}</li> }) }
                    </ul>
                    <p class="service-price">
                        {t.services_logistics_price}
                        <small>{t.services_excl_vat}</small>
                    </p>
                    <div class="service-dispatch">
                        <p class="spec-label">{t.services_dispatch}</p>
                        <a href={contact::PHONE_URI}>{contact::PHONE_DISPLAY}</a>
                        <a href={format!("mailto:{}", contact::DISPATCH_EMAIL)}>{contact::DISPATCH_EMAIL}</a>
                    </div>
                </div>
                <div class="service-image">
                    <img src="/odtah-vozidla.png" alt={t.services_logistics_title} loading="lazy" />
                </div>
            </section>

            <section class="service-block">
                <div class="partners">
                    { for contact::PARTNERS.iter().map(|p| html! { <div key={*p}>{*p}</div> }) }
                </div>
                <div class="service-text">
                    <span class="kicker">{t.services_finance_kicker}</span>
                    <h2 class="section-title">{t.services_finance_title}</h2>
                    <div>
                        <h3>{finance_title}</h3>
                        <p>{finance_text}</p>
                    </div>
                    <div>
                        <h3>{insurance_title}</h3>
                        <p>{insurance_text}</p>
                        <div class="insurance-kinds">
                            <div><span>{"POV"}</span>{t.services_liability}</div>
                            <div><span>{"HAV"}</span>{t.services_collision}</div>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
