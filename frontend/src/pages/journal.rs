use bbcars_common::i18n::translations;
use bbcars_common::routes::Page;
use bbcars_common::Catalog;
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::page_banner::PageBanner;
use crate::{LangProps, Route};

#[function_component(Journal)]
pub fn journal(props: &LangProps) -> Html {
    let lang = props.lang;
    let t = translations(lang);

    let style = r#"
        .journal-grid {
            max-width: 1536px;
            margin: 0 auto;
            padding: 4rem 5rem 8rem;
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 3rem;
        }
        .journal-card { display: flex; flex-direction: column; color: #fff; text-decoration: none; }
        .journal-card img { width: 100%; aspect-ratio: 4 / 3; object-fit: cover; margin-bottom: 2rem; filter: grayscale(0.6); transition: filter 0.7s; }
        .journal-card:hover img { filter: none; }
        .journal-card .date { font-size: 10px; letter-spacing: 0.5em; color: #dbad1e; font-weight: 700; margin-bottom: 1rem; }
        .journal-card h2 { font-size: 1.5rem; text-transform: uppercase; line-height: 1.2; margin-bottom: 1rem; }
        .journal-card p { color: rgba(255, 255, 255, 0.4); font-weight: 300; line-height: 1.7; }
        .journal-card .more { margin-top: 1.5rem; font-size: 10px; letter-spacing: 0.4em; text-transform: uppercase; font-weight: 700; }
        @media (max-width: 1024px) {
            .journal-grid { grid-template-columns: 1fr; padding: 3rem 1.5rem 5rem; }
        }
    "#;

    html! {
        <div class="journal fade-in">
            <style>{style}</style>
            <PageBanner title={t.journal_title} />
            <section class="journal-grid">
                { for Catalog::builtin().articles().iter().map(|article| html! {
                    <Link<Route> key={article.id} to={Route::page(lang, Page::ArticleDetail(article.id.to_string()))} classes="journal-card">
                        <img src={article.image} alt={article.title.get(lang)} loading="lazy" />
                        <p class="date">{article.date}</p>
                        <h2>{article.title.get(lang)}</h2>
                        <p>{article.excerpt.get(lang)}</p>
                        <span class="more">{t.journal_read_more}</span>
                    </Link<Route>>
                }) }
            </section>
        </div>
    }
}
