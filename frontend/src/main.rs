use bbcars_common::routes::{self, Page, Resolution};
use bbcars_common::{Catalog, Language};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod utils {
    pub mod api;
    pub mod seo;
}
mod components {
    pub mod car_card;
    pub mod carousel;
    pub mod footer;
    pub mod header;
    pub mod layout;
    pub mod lead_form;
    pub mod loading_screen;
    pub mod page_banner;
    pub mod search_overlay;
    pub mod seo_manager;
    pub mod side_menu;
    pub mod whatsapp_button;
}
mod pages {
    pub mod about;
    pub mod article_detail;
    pub mod buyout;
    pub mod car_detail;
    pub mod contact;
    pub mod custom_order;
    pub mod home;
    pub mod inventory;
    pub mod journal;
    pub mod legal;
    pub mod rent;
    pub mod services;
}

use components::layout::Layout;
use components::loading_screen::LoadingScreen;
use pages::{
    about::About, article_detail::ArticleDetail, buyout::Buyout, car_detail::CarDetail,
    contact::Contact, custom_order::CustomOrder, home::Home, inventory::Inventory,
    journal::Journal, legal::{Privacy, Terms}, rent::Rent, services::Services,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/:lang")]
    Home { lang: String },
    #[at("/:lang/inventory")]
    Inventory { lang: String },
    #[at("/:lang/auto/:id")]
    CarDetail { lang: String, id: String },
    #[at("/:lang/buyout")]
    Buyout { lang: String },
    #[at("/:lang/services")]
    Services { lang: String },
    #[at("/:lang/rent")]
    Rent { lang: String },
    #[at("/:lang/custom-order")]
    CustomOrder { lang: String },
    #[at("/:lang/about")]
    About { lang: String },
    #[at("/:lang/contact")]
    Contact { lang: String },
    #[at("/:lang/terms")]
    Terms { lang: String },
    #[at("/:lang/privacy")]
    Privacy { lang: String },
    #[at("/:lang/journal")]
    Journal { lang: String },
    #[at("/:lang/journal/:id")]
    ArticleDetail { lang: String, id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Router target for `page` in `lang`.
    pub fn page(lang: Language, page: Page) -> Route {
        let lang = lang.code().to_string();
        match page {
            Page::Home => Route::Home { lang },
            Page::Inventory => Route::Inventory { lang },
            Page::CarDetail(id) => Route::CarDetail { lang, id },
            Page::Buyout => Route::Buyout { lang },
            Page::Services => Route::Services { lang },
            Page::Rent => Route::Rent { lang },
            Page::CustomOrder => Route::CustomOrder { lang },
            Page::About => Route::About { lang },
            Page::Contact => Route::Contact { lang },
            Page::Terms => Route::Terms { lang },
            Page::Privacy => Route::Privacy { lang },
            Page::Journal => Route::Journal { lang },
            Page::ArticleDetail(id) => Route::ArticleDetail { lang, id },
        }
    }
}

/// Props for pages that only need the current language.
#[derive(Properties, PartialEq, Clone)]
pub struct LangProps {
    pub lang: Language,
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_default()
}

fn switch(route: Route) -> Html {
    // The router's own not-found path says nothing; resolve what the user typed.
    let path = match route {
        Route::NotFound => current_path(),
        other => other.to_path(),
    };
    match routes::resolve_existing(&path, &Catalog::builtin()) {
        Resolution::Page { lang, page } => html! {
            <Layout {lang}>{ render_page(lang, page) }</Layout>
        },
        Resolution::Redirect(target) => html! { <PathRedirect {target} /> },
    }
}

fn render_page(lang: Language, page: Page) -> Html {
    match page {
        Page::Home => html! { <Home {lang} /> },
        Page::Inventory => html! { <Inventory {lang} /> },
        Page::CarDetail(id) => html! { <CarDetail key={id.clone()} {lang} id={id.clone()} /> },
        Page::Buyout => html! { <Buyout {lang} /> },
        Page::Services => html! { <Services {lang} /> },
        Page::Rent => html! { <Rent {lang} /> },
        Page::CustomOrder => html! { <CustomOrder {lang} /> },
        Page::About => html! { <About {lang} /> },
        Page::Contact => html! { <Contact {lang} /> },
        Page::Terms => html! { <Terms {lang} /> },
        Page::Privacy => html! { <Privacy {lang} /> },
        Page::Journal => html! { <Journal {lang} /> },
        Page::ArticleDetail(id) => html! { <ArticleDetail key={id.clone()} {lang} id={id.clone()} /> },
    }
}

#[derive(Properties, PartialEq)]
struct PathRedirectProps {
    target: String,
}

#[function_component(PathRedirect)]
fn path_redirect(props: &PathRedirectProps) -> Html {
    let navigator = use_navigator();
    use_effect_with_deps(
        move |target: &String| {
            if let Some(navigator) = navigator {
                navigator.replace(&Route::recognize(target).unwrap_or(Route::Root));
            }
            || ()
        },
        props.target.clone(),
    );
    html! {}
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <LoadingScreen />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
