use bbcars_common::i18n::translations;
use bbcars_common::routes::Page;
use bbcars_common::{Catalog, Language};
use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ArticleDetailProps {
    pub lang: Language,
    pub id: String,
}

#[function_component(ArticleDetail)]
pub fn article_detail(props: &ArticleDetailProps) -> Html {
    let lang = props.lang;
    let t = translations(lang);
    // Unknown ids are redirected to the journal before this page renders.
    let Some(article) = Catalog::builtin().find_article(&props.id) else {
        return html! {};
    };
    let (lead, rest) = match article.body.get(lang).split_first() {
        Some((first, rest)) => (Some(*first), rest),
        None => (None, &[][..]),
    };

    let style = r#"
        .article { max-width: 1280px; margin: 0 auto; padding: 10rem 1.5rem; }
        .article header { max-width: 56rem; margin-bottom: 6rem; }
        .article .date { font-size: 10px; letter-spacing: 0.6em; color: #dbad1e; font-weight: 700; margin-bottom: 2rem; }
        .article h1 { font-size: 5rem; line-height: 1; }
        .article-grid { display: grid; grid-template-columns: 7fr 5fr; gap: 4rem; align-items: start; }
        .article-body { color: rgba(255, 255, 255, 0.7); font-weight: 300; font-size: 1.1rem; line-height: 1.8; }
        .article-body > p + p { margin-top: 2rem; }
        .article-excerpt { font-size: 1.5rem; color: #fff; font-weight: 500; line-height: 1.4; margin-bottom: 3rem; }
        .article-figure { margin: 2rem 0; }
        .article-figure img { width: 100%; aspect-ratio: 16 / 9; object-fit: cover; border: 1px solid rgba(255, 255, 255, 0.05); }
        .article-figure figcaption { margin-top: 1rem; text-align: center; font-size: 10px; letter-spacing: 0.1em; font-style: italic; color: rgba(255, 255, 255, 0.2); }
        .article-aside { position: sticky; top: 10rem; }
        .article-meta { border-left: 1px solid rgba(219, 173, 30, 0.3); padding-left: 2.5rem; }
        .article-meta div + div { margin-top: 2rem; }
        .article-meta p:last-child { font-family: 'Playfair Display', serif; font-size: 1.25rem; font-weight: 700; text-transform: uppercase; }
        .article-meta .topic { color: #dbad1e; }
        .article-question { margin-top: 3rem; padding: 2rem; background: rgba(255, 255, 255, 0.03); border: 1px solid rgba(255, 255, 255, 0.05); }
        .article-question h4 { font-size: 0.875rem; letter-spacing: 0.1em; text-transform: uppercase; margin-bottom: 1rem; }
        .article-question p { font-size: 0.875rem; color: rgba(255, 255, 255, 0.4); margin-bottom: 2rem; }
        .article-back { margin-top: 8rem; padding-top: 4rem; border-top: 1px solid rgba(255, 255, 255, 0.05); }
        .article-back a { color: #fff; text-decoration: none; font-size: 10px; letter-spacing: 0.5em; text-transform: uppercase; font-weight: 700; }
        .article-back a span { color: #dbad1e; margin-right: 1rem; }
        @media (max-width: 1024px) {
            .article h1 { font-size: 2.5rem; }
            .article-grid { grid-template-columns: 1fr; }
            .article-aside { position: static; }
        }
    "#;

    html! {
        <article class="article fade-in">
            <style>{style}</style>
            <header>
                <p class="date">{article.date}</p>
                <h1 class="page-title">{article.title.get(lang)}</h1>
            </header>
            <div class="article-grid">
                <div class="article-body">
                    <p class="article-excerpt">{article.excerpt.get(lang)}</p>
                    if let Some(lead) = lead {
                        <p>{lead}</p>
                    }
                    <figure class="article-figure">
                        <img src={article.image} alt={article.title.get(lang)} />
                        <figcaption>{t.photo_credit}</figcaption>
                    </figure>
                    { for rest.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                </div>
                <aside class="article-aside">
                    <div class="article-meta">
                        <div>
                            <p class="spec-label">{t.article_author}</p>
                            <p>{article.author}</p>
                        </div>
                        <div>
                            <p class="spec-label">{t.article_topic}</p>
                            <p class="topic">{article.topic.get(lang)}</p>
                        </div>
                    </div>
                    <div class="article-question">
                        <h4>{t.article_question}</h4>
                        <p>{t.article_question_text}</p>
                        <Link<Route> to={Route::page(lang, Page::Contact)} classes="btn-light">
                            {t.article_contact_cta}
                        </Link<Route>>
                    </div>
                </aside>
            </div>
            <div class="article-back">
                <Link<Route> to={Route::page(lang, Page::Journal)}>
                    <span>{"←"}</span>{t.article_back}
                </Link<Route>>
            </div>
        </article>
    }
}
