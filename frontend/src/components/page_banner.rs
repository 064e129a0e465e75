use bbcars_common::i18n::Section;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageBannerProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub image: Option<AttrValue>,
}

/// Full-width title band at the top of the service pages.
#[function_component(PageBanner)]
pub fn page_banner(props: &PageBannerProps) -> Html {
    html! {
        <section class="page-banner">
            if let Some(image) = &props.image {
                <img src={image.clone()} alt="" />
            }
            <h1 class="page-title">{props.title.clone()}</h1>
        </section>
    }
}

/// Heading and text pairs listed down the left column of a form page.
pub fn steps(items: &[Section]) -> Html {
    html! {
        <div class="steps">
            { for items.iter().map(|(title, text)| html! {
                <div key={*title} class="step">
                    <h3>{*title}</h3>
                    <p>{*text}</p>
                </div>
            }) }
        </div>
    }
}
