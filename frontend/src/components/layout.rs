use bbcars_common::routes::{self, Page, Resolution};
use bbcars_common::Language;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::search_overlay::SearchOverlay;
use crate::components::seo_manager::SeoManager;
use crate::components::side_menu::SideMenu;
use crate::components::whatsapp_button::WhatsAppButton;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub lang: Language,
    #[prop_or_default]
    pub children: Children,
}

/// Site chrome shared by every page.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let lang = props.lang;
    let menu_open = use_state(|| false);
    let search_open = use_state(|| false);
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();
    let is_home = matches!(routes::resolve(&path), Resolution::Page { page: Page::Home, .. });

    // Every navigation starts at the top with the menu closed.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                menu_open.set(false);
                || ()
            },
            path.clone(),
        );
    }

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(true))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };
    let open_search = {
        let search_open = search_open.clone();
        Callback::from(move |_| search_open.set(true))
    };
    let close_search = {
        let search_open = search_open.clone();
        Callback::from(move |_| search_open.set(false))
    };

    html! {
        <div class="site">
            <SeoManager {lang} path={path.clone()} />
            <Header {lang} {is_home} menu_open={*menu_open} on_menu={open_menu} on_search={open_search} />
            <SearchOverlay {lang} open={*search_open} on_close={close_search} />
            <SideMenu {lang} {path} open={*menu_open} on_close={close_menu} />
            <main class="site-main">
                { for props.children.iter() }
            </main>
            <Footer {lang} />
            <WhatsAppButton />
        </div>
    }
}
