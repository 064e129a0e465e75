use bbcars_common::i18n::translations;
use bbcars_common::routes::{self, Page};
use bbcars_common::Language;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct SideMenuProps {
    pub lang: Language,
    /// Current path, for the language switch.
    pub path: String,
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(SideMenu)]
pub fn side_menu(props: &SideMenuProps) -> Html {
    let lang = props.lang;
    let t = translations(lang);
    let links = [
        (Page::Home, t.nav_home),
        (Page::Inventory, t.nav_inventory),
        (Page::Rent, t.nav_rent),
        (Page::Buyout, t.nav_buyout),
        (Page::CustomOrder, t.nav_custom_order),
        (Page::About, t.nav_about),
        (Page::Services, t.nav_services),
        (Page::Journal, t.nav_journal),
        (Page::Contact, t.nav_contact),
    ];
    let other = lang.other();
    let switch_to = Route::recognize(&routes::switch_language(&props.path))
        .unwrap_or_else(|| Route::page(other, Page::Home));
    let close = props.on_close.reform(|_: MouseEvent| ());

    let style = r#"
        .side-menu {
            position: fixed;
            top: 0;
            left: 0;
            height: 100%;
            width: 500px;
            max-width: 100%;
            background: #000;
            z-index: 110;
            padding: 4rem;
            display: flex;
            flex-direction: column;
            border-right: 1px solid rgba(255, 255, 255, 0.05);
            transform: translateX(-100%);
            transition: transform 0.7s cubic-bezier(0.16, 1, 0.3, 1);
        }
        .side-menu.open { transform: translateX(0); }
        .side-menu-close {
            background: none;
            border: none;
            color: #fff;
            opacity: 0.3;
            font-size: 10px;
            font-weight: 700;
            letter-spacing: 0.2em;
            text-align: left;
            cursor: pointer;
            margin-bottom: 3rem;
        }
        .side-menu-close:hover { opacity: 1; }
        .side-menu nav {
            flex-grow: 1;
            display: flex;
            flex-direction: column;
            justify-content: center;
            gap: 1.6rem;
        }
        .side-menu nav a {
            font-family: 'Playfair Display', serif;
            font-size: 1.9rem;
            font-weight: 700;
            text-transform: uppercase;
            color: #fff;
            text-decoration: none;
            opacity: 0;
            transform: translateY(2rem);
            transition: all 0.5s;
        }
        .side-menu.open nav a { opacity: 1; transform: translateY(0); }
        .side-menu nav a:hover { color: #dbad1e; }
        .side-menu-foot {
            display: flex;
            justify-content: space-between;
            align-items: center;
            font-size: 8px;
            letter-spacing: 1em;
            font-weight: 700;
        }
        .side-menu-brand { opacity: 0.1; }
        .lang-switch {
            font-size: 11px;
            letter-spacing: 0.3em;
            color: #dbad1e;
            text-decoration: none;
        }
        @media (max-width: 768px) {
            .side-menu { width: 100%; padding: 2rem; }
        }
    "#;

    html! {
        <>
            <style>{style}</style>
            <aside class={classes!("side-menu", props.open.then_some("open"))}>
                <button class="side-menu-close" onclick={close.clone()}>{t.close}</button>
                <nav>
                    { for links.into_iter().enumerate().map(|(idx, (page, label))| {
                        let delay = if props.open { idx * 40 } else { 0 };
                        html! {
                            <span onclick={close.clone()} style={format!("transition-delay: {}ms;", delay)}>
                                <Link<Route> to={Route::page(lang, page)}>{label}</Link<Route>>
                            </span>
                        }
                    }) }
                </nav>
                <div class="side-menu-foot">
                    <span class="side-menu-brand">{"BBCARS SHOWROOM"}</span>
                    <span onclick={close}>
                        <Link<Route> to={switch_to} classes="lang-switch">{other.code().to_uppercase()}</Link<Route>>
                    </span>
                </div>
            </aside>
        </>
    }
}
