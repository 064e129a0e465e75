use bbcars_common::i18n::translations;
use bbcars_common::query::{self, SEARCH_LIMIT};
use bbcars_common::routes::Page;
use bbcars_common::{Catalog, Language};
use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct SearchOverlayProps {
    pub lang: Language,
    pub open: bool,
    pub on_close: Callback<()>,
}

fn set_body_scroll_locked(locked: bool) {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    if let Some(body) = body {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}

#[function_component(SearchOverlay)]
pub fn search_overlay(props: &SearchOverlayProps) -> Html {
    let t = translations(props.lang);
    let text = use_state(String::new);
    let input_ref = use_node_ref();
    let navigator = use_navigator();

    {
        let text = text.clone();
        let input_ref = input_ref.clone();
        use_effect_with_deps(
            move |open: &bool| {
                set_body_scroll_locked(*open);
                let focus = if *open {
                    // The input only exists after this render is painted.
                    Some(Timeout::new(100, move || {
                        if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                            let _ = input.focus();
                        }
                    }))
                } else {
                    text.set(String::new());
                    None
                };
                move || {
                    drop(focus);
                    set_body_scroll_locked(false);
                }
            },
            props.open,
        );
    }

    if !props.open {
        return html! {};
    }

    let catalog = Catalog::builtin();
    let hits = query::search(catalog.vehicles(), &text, SEARCH_LIMIT);
    let oninput = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            text.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let onkeydown = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_close.emit(());
            }
        })
    };

    let style = r#"
        .search-overlay {
            position: fixed;
            inset: 0;
            z-index: 200;
            background: rgba(0, 0, 0, 0.95);
            backdrop-filter: blur(24px);
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            padding: 0 2rem;
        }
        .search-close {
            position: absolute;
            top: 3rem;
            right: 3rem;
            background: none;
            border: none;
            color: rgba(255, 255, 255, 0.4);
            font-size: 2.5rem;
            cursor: pointer;
        }
        .search-close:hover { color: #fff; }
        .search-box { width: 100%; max-width: 56rem; }
        .search-box input {
            width: 100%;
            background: transparent;
            border: none;
            border-bottom: 1px solid rgba(255, 255, 255, 0.1);
            padding: 2rem 0;
            font-size: 3.5rem;
            font-weight: 700;
            text-transform: uppercase;
            text-align: center;
            color: #fff;
            outline: none;
        }
        .search-box input:focus { border-color: #dbad1e; }
        .search-hits { margin-top: 3rem; max-height: 60vh; overflow-y: auto; }
        .search-hit {
            width: 100%;
            display: flex;
            justify-content: space-between;
            align-items: center;
            padding: 1.5rem;
            margin-bottom: 1rem;
            background: rgba(255, 255, 255, 0.03);
            border: 1px solid rgba(255, 255, 255, 0.05);
            color: #fff;
            text-align: left;
            cursor: pointer;
        }
        .search-hit:hover { background: rgba(255, 255, 255, 0.08); }
        .search-hit img { width: 6rem; aspect-ratio: 16 / 9; object-fit: cover; margin-right: 2rem; }
        .search-hit .car { display: flex; align-items: center; }
        .search-hit .brand { font-size: 9px; letter-spacing: 0.2em; opacity: 0.3; text-transform: uppercase; }
        .search-hit .model { font-size: 1.25rem; font-weight: 700; text-transform: uppercase; }
        @media (max-width: 768px) {
            .search-box input { font-size: 1.5rem; }
            .search-close { top: 1.5rem; right: 1.5rem; }
        }
    "#;

    html! {
        <div class="search-overlay" {onkeydown}>
            <style>{style}</style>
            <button class="search-close" aria-label={t.close} onclick={props.on_close.reform(|_| ())}>{"×"}</button>
            <div class="search-box">
                <input
                    ref={input_ref}
                    type="text"
                    value={(*text).clone()}
                    placeholder={t.search_placeholder}
                    {oninput}
                />
                <div class="search-hits">
                    { for hits.into_iter().map(|car| {
                        let onclick = {
                            let navigator = navigator.clone();
                            let on_close = props.on_close.clone();
                            let route = Route::page(props.lang, Page::CarDetail(car.id.to_string()));
                            Callback::from(move |_: MouseEvent| {
                                if let Some(navigator) = &navigator {
                                    navigator.push(&route);
                                }
                                on_close.emit(());
                            })
                        };
                        html! {
                            <button key={car.id} class="search-hit" {onclick}>
                                <div class="car">
                                    <img src={car.image} alt={car.model} />
                                    <div>
                                        <p class="brand">{car.brand}</p>
                                        <p class="model">{car.model}</p>
                                    </div>
                                </div>
                                <p class="price">{car.price}</p>
                            </button>
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}
