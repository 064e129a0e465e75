use bbcars_common::contact;
use bbcars_common::i18n::translations;
use bbcars_common::routes::Page;
use bbcars_common::Language;
use chrono::Datelike;
use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub lang: Language,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let lang = props.lang;
    let t = translations(lang);
    let year = chrono::Local::now().year();
    let link = |page: Page, label: &'static str| {
        html! { <Link<Route> to={Route::page(lang, page)}>{label}</Link<Route>> }
    };

    let style = r#"
        .site-footer {
            background: #0a0a0a;
            border-top: 1px solid rgba(255, 255, 255, 0.05);
        }
        .footer-grid {
            max-width: 1536px;
            margin: 0 auto;
            padding: 6rem 5rem 5rem;
            display: grid;
            grid-template-columns: repeat(5, 1fr);
            gap: 2rem;
        }
        .footer-grid h2 {
            font-family: 'Playfair Display', serif;
            font-size: 1.9rem;
            margin-bottom: 2rem;
        }
        .footer-grid h4 {
            font-size: 10px;
            letter-spacing: 0.4em;
            color: #dbad1e;
            margin-bottom: 2rem;
        }
        .footer-grid p {
            font-size: 12px;
            font-weight: 300;
            color: rgba(255, 255, 255, 0.3);
            line-height: 1.7;
        }
        .footer-col { display: flex; flex-direction: column; gap: 1rem; }
        .footer-col a {
            font-size: 11px;
            font-weight: 300;
            letter-spacing: 0.1em;
            text-transform: uppercase;
            color: rgba(255, 255, 255, 0.5);
            text-decoration: none;
        }
        .footer-col a:hover { color: #fff; }
        .footer-col a.phone { font-weight: 700; color: #fff; }
        .footer-bottom {
            background: #050505;
            border-top: 1px solid rgba(255, 255, 255, 0.05);
            padding: 2.5rem 5rem;
            display: flex;
            justify-content: space-between;
            font-size: 10px;
            letter-spacing: 0.4em;
            color: rgba(255, 255, 255, 0.2);
        }
        .footer-bottom nav { display: flex; gap: 2rem; }
        .footer-bottom a { color: rgba(255, 255, 255, 0.1); text-decoration: none; font-size: 9px; }
        .footer-bottom a:hover { color: #fff; }
        @media (max-width: 1024px) {
            .footer-grid { grid-template-columns: 1fr 1fr; padding: 4rem 2rem; }
            .footer-bottom { flex-direction: column; gap: 1rem; text-align: center; padding: 2rem; }
        }
    "#;

    html! {
        <footer class="site-footer">
            <style>{style}</style>
            <div class="footer-grid">
                <div>
                    <h2>{"BBCARS"}</h2>
                    <p>{t.footer_tagline}</p>
                </div>
                <div class="footer-col">
                    <h4>{t.footer_offer}</h4>
                    { link(Page::Inventory, t.footer_all_cars) }
                    { link(Page::Rent, t.nav_rent) }
                    { link(Page::CustomOrder, t.nav_custom_order) }
                </div>
                <div class="footer-col">
                    <h4>{t.footer_services}</h4>
                    { link(Page::Buyout, t.nav_buyout) }
                    { link(Page::Services, t.nav_services) }
                    { link(Page::Journal, t.nav_journal) }
                    { link(Page::About, t.nav_about) }
                </div>
                <div class="footer-col">
                    <h4>{t.footer_contact}</h4>
                    <a class="phone" href={contact::PHONE_URI}>{contact::PHONE_DISPLAY}</a>
                    <a href={contact::MAILTO_URI}>{contact::EMAIL}</a>
                    <a href={contact::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                    <a href={contact::FACEBOOK_URL} target="_blank" rel="noopener noreferrer">{"Facebook"}</a>
                </div>
                <div class="footer-col">
                    <h4>{t.footer_location}</h4>
                    <a href={contact::MAPS_SEARCH_URL} target="_blank" rel="noopener noreferrer">
                        {contact::STREET}{","}<br />{contact::CITY}
                    </a>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} {} | {}", year, contact::COMPANY_NAME.to_uppercase(), t.footer_rights)}</p>
                <nav>
                    { link(Page::Terms, t.nav_terms) }
                    { link(Page::Privacy, t.nav_privacy) }
                </nav>
            </div>
        </footer>
    }
}
