use bbcars_common::{seo, Catalog, Language};
use yew::prelude::*;

use crate::config;
use crate::utils::seo::DomHead;

#[derive(Properties, PartialEq)]
pub struct SeoManagerProps {
    pub lang: Language,
    pub path: String,
}

/// Keeps the document head in step with the current route. Renders nothing.
#[function_component(SeoManager)]
pub fn seo_manager(props: &SeoManagerProps) -> Html {
    use_effect_with_deps(
        move |(path, lang): &(String, Language)| {
            if let Some(mut head) = DomHead::from_window() {
                let origin = config::site_origin();
                if let Err(e) = seo::sync(&mut head, path, *lang, &Catalog::builtin(), &origin) {
                    gloo_console::error!("Failed to update document head:", e);
                }
            }
            || ()
        },
        (props.path.clone(), props.lang),
    );
    html! {}
}
