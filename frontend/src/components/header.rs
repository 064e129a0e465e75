use std::cell::Cell;
use std::rc::Rc;

use bbcars_common::routes::Page;
use bbcars_common::i18n::translations;
use bbcars_common::Language;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

/// Scroll depth below which the header never hides.
const HIDE_AFTER_PX: f64 = 100.0;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub lang: Language,
    pub is_home: bool,
    pub menu_open: bool,
    pub on_menu: Callback<()>,
    pub on_search: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let t = translations(props.lang);
    let scrolled_away = use_state_eq(|| false);
    let logo_failed = use_state(|| false);

    // Hide on downward scroll, show again on any upward scroll
    {
        let scrolled_away = scrolled_away.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let last_y = Rc::new(Cell::new(window.scroll_y().unwrap_or(0.0)));
                    let callback = Closure::<dyn Fn()>::new({
                        let scrolled_away = scrolled_away.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(y) = win.scroll_y() {
                                    scrolled_away.set(y > last_y.get() && y > HIDE_AFTER_PX);
                                    last_y.set(y);
                                }
                            }
                        }
                    });
                    if window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        gloo_console::warn!("Could not watch scrolling, header stays pinned");
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    let on_logo_error = {
        let logo_failed = logo_failed.clone();
        Callback::from(move |_: Event| logo_failed.set(true))
    };

    let visible = !*scrolled_away || props.menu_open;
    let style = r#"
        .site-header {
            position: fixed;
            top: 0;
            left: 0;
            width: 100%;
            z-index: 80;
            padding: 1.5rem 3rem;
            display: flex;
            justify-content: space-between;
            align-items: center;
            transition: transform 0.5s ease;
        }
        .site-header.hidden {
            transform: translateY(-100%);
        }
        .menu-toggle {
            display: flex;
            align-items: center;
            gap: 1rem;
            background: none;
            border: none;
            color: #fff;
            cursor: pointer;
        }
        .menu-toggle .bars span {
            display: block;
            height: 1.5px;
            background: #fff;
            margin: 6px 0;
            transition: background 0.3s;
        }
        .menu-toggle .bars span:first-child { width: 40px; }
        .menu-toggle .bars span:last-child { width: 24px; }
        .menu-toggle:hover .bars span { background: #dbad1e; }
        .menu-label {
            font-size: 10px;
            font-weight: 700;
            letter-spacing: 0.4em;
        }
        .header-logo {
            position: absolute;
            left: 50%;
            transform: translateX(-50%);
        }
        .header-logo img { height: 2rem; }
        .logo-text {
            font-family: 'Playfair Display', serif;
            font-size: 1.8rem;
            font-weight: 800;
            color: #fff;
            letter-spacing: -0.05em;
        }
        .search-toggle {
            width: 3rem;
            height: 3rem;
            border-radius: 50%;
            background: none;
            border: none;
            color: rgba(255, 255, 255, 0.5);
            cursor: pointer;
        }
        .search-toggle:hover { color: #fff; background: rgba(255, 255, 255, 0.05); }
        @media (max-width: 768px) {
            .site-header { padding: 1.5rem; }
            .menu-label { display: none; }
        }
    "#;

    html! {
        <>
            <style>{style}</style>
            <header class={classes!("site-header", (!visible).then_some("hidden"))}>
                <button class="menu-toggle" onclick={props.on_menu.reform(|_| ())}>
                    <span class="bars"><span></span><span></span></span>
                    <span class="menu-label">{t.menu}</span>
                </button>
                if !props.is_home {
                    <Link<Route> to={Route::page(props.lang, Page::Home)} classes="header-logo">
                        if *logo_failed {
                            <span class="logo-text">{"BB CARS"}</span>
                        } else {
                            <img src="/logo.png" alt="BBCars Logo" onerror={on_logo_error} />
                        }
                    </Link<Route>>
                }
                <button class="search-toggle" aria-label="Search" onclick={props.on_search.reform(|_| ())}>
                    <svg width="22" height="22" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z" />
                    </svg>
                </button>
            </header>
        </>
    }
}
