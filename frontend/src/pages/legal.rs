use bbcars_common::i18n::{translations, Section};
use yew::prelude::*;

use crate::components::page_banner::PageBanner;
use crate::LangProps;

fn legal_page(title: &'static str, sections: &'static [Section]) -> Html {
    html! {
        <div class="legal fade-in">
            <PageBanner title={title} />
            <section class="legal-body">
                { for sections.iter().map(|(heading, text)| html! {
                    <div key={*heading} class="legal-section">
                        <h2>{*heading}</h2>
                        <p>{*text}</p>
                    </div>
                }) }
            </section>
        </div>
    }
}

#[function_component(Terms)]
pub fn terms(props: &LangProps) -> Html {
    let t = translations(props.lang);
    legal_page(t.terms_title, t.terms_sections)
}

#[function_component(Privacy)]
pub fn privacy(props: &LangProps) -> Html {
    let t = translations(props.lang);
    legal_page(t.privacy_title, t.privacy_sections)
}
