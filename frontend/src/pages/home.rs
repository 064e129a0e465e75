use bbcars_common::contact;
use bbcars_common::i18n::translations;
use bbcars_common::routes::Page;
use bbcars_common::Catalog;
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::car_card::CarCard;
use crate::{LangProps, Route};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1614162692292-7ac56d7f7f1e?auto=format&fit=crop&q=100&w=2400";
const CUSTOM_ORDER_IMAGE: &str = "https://images.unsplash.com/photo-1492144534655-ae79c964c9d7?auto=format&fit=crop&q=80&w=2400";
const SHOWROOM_IMAGE: &str = "https://images.unsplash.com/photo-1542362567-b05486f69246?auto=format&fit=crop&q=90&w=2400";
const FEATURED: usize = 4;

#[function_component(Home)]
pub fn home(props: &LangProps) -> Html {
    let lang = props.lang;
    let t = translations(lang);
    let featured = Catalog::builtin().featured(FEATURED);

    let style = r#"
        .home-hero {
            position: relative;
            height: 100vh;
            display: flex;
            align-items: center;
            padding: 0 5rem;
            overflow: hidden;
        }
        .home-hero > img {
            position: absolute;
            inset: 0;
            width: 100%;
            height: 100%;
            object-fit: cover;
        }
        .home-hero::after {
            content: "";
            position: absolute;
            inset: 0;
            background: linear-gradient(to right, #000, rgba(0, 0, 0, 0.4), transparent);
        }
        .home-hero-content { position: relative; z-index: 2; max-width: 1536px; width: 100%; margin: 0 auto; padding-top: 5rem; }
        .home-hero h1 { text-transform: uppercase; margin-bottom: 2.5rem; line-height: 1.2; }
        .home-hero .hero-kicker {
            display: block;
            font-family: 'Inter', sans-serif;
            font-size: 1.5rem;
            font-weight: 100;
            letter-spacing: 0.3em;
            color: rgba(255, 255, 255, 0.8);
            margin-bottom: 1rem;
        }
        .home-hero .hero-name { display: block; font-size: 4.5rem; font-weight: 800; letter-spacing: -0.03em; }
        .home-philosophy { padding: 8rem 5rem; border-bottom: 1px solid rgba(255, 255, 255, 0.05); }
        .home-philosophy p {
            max-width: 64rem;
            font-size: 2.25rem;
            font-weight: 300;
            line-height: 1.2;
            color: rgba(255, 255, 255, 0.8);
        }
        .home-featured { background: #000; padding: 2.5rem 0 8rem; }
        .home-featured .car-grid { grid-template-columns: repeat(2, 1fr); gap: 10px; }
        .home-split { display: flex; min-height: 70vh; background: #000; border-top: 1px solid rgba(255, 255, 255, 0.05); }
        .home-split > div { width: 50%; position: relative; }
        .home-split img { width: 100%; height: 100%; object-fit: cover; filter: grayscale(1); opacity: 0.4; }
        .home-split .split-text { display: flex; align-items: center; padding: 5rem; }
        .home-split h2 { font-size: 3.75rem; text-transform: uppercase; margin-bottom: 2rem; }
        .home-showroom { display: flex; min-height: 700px; background: #080808; border-top: 1px solid rgba(255, 255, 255, 0.05); }
        .home-showroom > div { width: 50%; position: relative; }
        .showroom-card { display: flex; align-items: center; justify-content: center; text-align: center; }
        .showroom-card > img { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; opacity: 0.3; filter: grayscale(1); }
        .showroom-card-text { position: relative; z-index: 1; padding: 0 2rem; }
        .showroom-card h2 { font-size: 3.75rem; text-transform: uppercase; margin-bottom: 2rem; }
        .showroom-card p { font-size: 13px; letter-spacing: 0.2em; text-transform: uppercase; color: rgba(255, 255, 255, 0.5); margin-bottom: 3rem; }
        .home-showroom iframe { width: 100%; height: 100%; border: 0; filter: grayscale(1) invert(1) contrast(1.2); }
        @media (max-width: 1024px) {
            .home-hero, .home-philosophy { padding-left: 2rem; padding-right: 2rem; }
            .home-hero .hero-name { font-size: 3rem; }
            .home-philosophy p { font-size: 1.5rem; }
            .home-featured .car-grid { grid-template-columns: 1fr; }
            .home-split, .home-showroom { flex-direction: column; }
            .home-split > div, .home-showroom > div { width: 100%; }
            .home-split > div:first-child { height: 40vh; }
            .home-showroom > div { height: 420px; }
            .home-split h2, .showroom-card h2 { font-size: 2.25rem; }
        }
    "#;

    html! {
        <div class="home fade-in">
            <style>{style}</style>
            <section class="home-hero">
                <img src={HERO_IMAGE} alt="Porsche 911 GT3" />
                <div class="home-hero-content">
                    <h1>
                        <span class="hero-kicker">{t.hero_kicker}</span>
                        <span class="hero-name">{"BB CARS"}</span>
                    </h1>
                    <Link<Route> to={Route::page(lang, Page::Inventory)} classes="btn-light">
                        {t.hero_cta}
                    </Link<Route>>
                </div>
            </section>

            <section class="home-philosophy">
                <p>{t.philosophy_text}</p>
            </section>

            <section class="home-featured">
                <div class="car-grid">
                    { for featured.iter().map(|car| html! { <CarCard key={car.id} {car} {lang} /> }) }
                </div>
            </section>

            <section class="home-split">
                <div>
                    <img src={CUSTOM_ORDER_IMAGE} alt={t.custom_order_card_title} />
                </div>
                <div class="split-text">
                    <div>
                        <h2>{t.custom_order_card_title}</h2>
                        <Link<Route> to={Route::page(lang, Page::CustomOrder)} classes="btn-outline">
                            {t.custom_order_card_cta}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <section class="home-showroom">
                <div class="showroom-card">
                    <img src={SHOWROOM_IMAGE} alt="Showroom" />
                    <div class="showroom-card-text">
                        <h2>{t.showroom_title}</h2>
                        <p>{format!("{}, {}", contact::STREET, contact::CITY)}</p>
                        <a class="btn-gold" href={contact::MAPS_DIRECTIONS_URL} target="_blank" rel="noopener noreferrer">
                            {t.navigate}
                        </a>
                    </div>
                </div>
                <div>
                    <iframe src={contact::MAPS_EMBED_URL} title={t.showroom_title} loading="lazy" allowfullscreen=true></iframe>
                </div>
            </section>
        </div>
    }
}
