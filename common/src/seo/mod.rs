//! Search-engine metadata for every navigation.
//!
//! A path is resolved to a [`Page`], an ordered rule table picks the
//! metadata producer, and the result is written through a [`DocumentHead`].
//! The browser implements `DocumentHead` over the live DOM; the server uses
//! [`HeadBuffer`] and renders it into the served HTML shell.

mod head;

pub use head::{escape_html, HeadBuffer};

use serde_json::{json, Value};

use crate::catalog::{Catalog, Vehicle};
use crate::i18n::translations;
use crate::lang::Language;
use crate::routes::{resolve, Page, Resolution};
use crate::SITE_NAME;

/// Element id of the product JSON-LD script.
pub const STRUCTURED_DATA_ID: &str = "json-ld-schema";

/// Which attribute names a `<meta>` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAttr {
    Name,
    Property,
}

impl MetaAttr {
    /// Open Graph keys live in `property`, everything else in `name`.
    pub fn for_key(key: &str) -> Self {
        if key.starts_with("og:") {
            MetaAttr::Property
        } else {
            MetaAttr::Name
        }
    }

    pub fn attribute(self) -> &'static str {
        match self {
            MetaAttr::Name => "name",
            MetaAttr::Property => "property",
        }
    }
}

/// Write access to a document head. Every operation must be safe to repeat.
pub trait DocumentHead {
    type Error;

    fn set_title(&mut self, title: &str) -> Result<(), Self::Error>;

    /// Sets `content` on the meta tag keyed by `key`, creating it if absent.
    fn upsert_meta(&mut self, attr: MetaAttr, key: &str, content: &str) -> Result<(), Self::Error>;

    /// Points the single `<link rel="canonical">` at `href`, creating it if absent.
    fn upsert_canonical(&mut self, href: &str) -> Result<(), Self::Error>;

    /// Inserts a JSON-LD script with element id `id`, removing any previous element with that id first.
    fn replace_json_ld(&mut self, id: &str, json: &str) -> Result<(), Self::Error>;

    /// Removes the element with `id` if present.
    fn remove_element(&mut self, id: &str) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// `og:type`.
    pub kind: &'static str,
    pub image: Option<String>,
    pub structured_data: Option<Value>,
}

struct SeoRule {
    matches: fn(&Page) -> bool,
    /// `None` lets evaluation fall through to the next rule.
    produce: fn(&Page, Language, &Catalog<'_>) -> Option<PageMeta>,
}

/// Evaluated top to bottom; the first producer returning metadata wins.
static RULES: &[SeoRule] = &[
    SeoRule { matches: |p| matches!(p, Page::CarDetail(_)), produce: vehicle_meta },
    SeoRule { matches: |p| matches!(p, Page::ArticleDetail(_)), produce: article_meta },
    SeoRule { matches: |p| !matches!(p, Page::Home), produce: section_meta },
];

/// Metadata for `page`, falling back to the generic site metadata.
pub fn page_meta(page: &Page, lang: Language, catalog: &Catalog<'_>) -> PageMeta {
    RULES
        .iter()
        .filter(|rule| (rule.matches)(page))
        .find_map(|rule| (rule.produce)(page, lang, catalog))
        .unwrap_or_else(|| site_meta(lang))
}

pub fn site_meta(lang: Language) -> PageMeta {
    let t = translations(lang);
    PageMeta {
        title: t.seo_site_title.to_string(),
        description: t.seo_site_description.to_string(),
        kind: "website",
        image: None,
        structured_data: None,
    }
}

fn vehicle_meta(page: &Page, lang: Language, catalog: &Catalog<'_>) -> Option<PageMeta> {
    let Page::CarDetail(id) = page else {
        return None;
    };
    let vehicle = catalog.find_vehicle(id)?;
    let description = match lang {
        Language::Cs => format!(
            "{} {} na prodej. Nájezd {}, výkon {}. Prověřený původ a špičkový stav v BBCars Rokycany.",
            vehicle.brand, vehicle.model, vehicle.km, vehicle.power_kw
        ),
        Language::En => format!(
            "{} {} for sale. Mileage {}, power {}. Verified origin and top condition at BBCars.",
            vehicle.brand, vehicle.model, vehicle.km, vehicle.power_kw
        ),
    };
    Some(PageMeta {
        title: format!("{} {} ({}) | {}", vehicle.brand, vehicle.model, vehicle.year, SITE_NAME),
        description,
        kind: "product",
        image: Some(vehicle.image.to_string()),
        structured_data: Some(product_schema(vehicle, lang)),
    })
}

/// schema.org `Product` description of a vehicle offer.
pub fn product_schema(vehicle: &Vehicle, lang: Language) -> Value {
    let mut offer = json!({
        "@type": "Offer",
        "priceCurrency": "CZK",
        "itemCondition": "https://schema.org/UsedCondition",
        "availability": "https://schema.org/InStock",
        "seller": {
            "@type": "Organization",
            "name": SITE_NAME
        }
    });
    if let Ok(price) = vehicle.price_czk() {
        offer["price"] = Value::String(price.to_string());
    }
    json!({
        "@context": "https://schema.org/",
        "@type": "Product",
        "name": vehicle.display_name(),
        "image": vehicle.image,
        "description": vehicle.story.get(lang),
        "brand": {
            "@type": "Brand",
            "name": vehicle.brand
        },
        "offers": offer
    })
}

fn article_meta(page: &Page, lang: Language, catalog: &Catalog<'_>) -> Option<PageMeta> {
    let Page::ArticleDetail(id) = page else {
        return None;
    };
    let article = catalog.find_article(id)?;
    Some(PageMeta {
        title: format!("{} | {}", article.title.get(lang), SITE_NAME),
        description: article.excerpt.get(lang).to_string(),
        kind: "article",
        image: Some(article.image.to_string()),
        structured_data: None,
    })
}

fn section_meta(page: &Page, lang: Language, _catalog: &Catalog<'_>) -> Option<PageMeta> {
    let t = translations(lang);
    let title = match page {
        Page::Inventory => t.seo_inventory_title,
        Page::About => t.seo_about_title,
        Page::Contact => t.seo_contact_title,
        Page::Services => t.seo_services_title,
        Page::Buyout => t.seo_buyout_title,
        Page::Rent => t.seo_rent_title,
        Page::CustomOrder => t.seo_custom_order_title,
        Page::Journal => t.seo_journal_title,
        Page::Terms => t.seo_terms_title,
        Page::Privacy => t.seo_privacy_title,
        Page::Home | Page::CarDetail(_) | Page::ArticleDetail(_) => return None,
    };
    Some(PageMeta { title: title.to_string(), ..site_meta(lang) })
}

/// Metadata and canonical path for a request path. Paths that do not
/// resolve to a page get the generic metadata and keep their own path.
pub fn describe_path(path: &str, lang: Language, catalog: &Catalog<'_>) -> (PageMeta, String) {
    match resolve(path) {
        Resolution::Page { lang: path_lang, page } => (page_meta(&page, lang, catalog), page.path(path_lang)),
        Resolution::Redirect(_) => {
            let bare = path.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();
            (site_meta(lang), bare.to_string())
        }
    }
}

/// Writes title, description, Open Graph tags, the canonical link and the
/// product JSON-LD for `path` into `head`.
pub fn sync<H: DocumentHead>(
    head: &mut H,
    path: &str,
    lang: Language,
    catalog: &Catalog<'_>,
    origin: &str,
) -> Result<(), H::Error> {
    let (meta, canonical_path) = describe_path(path, lang, catalog);
    let canonical = format!("{}{}", origin.trim_end_matches('/'), canonical_path);

    head.set_title(&meta.title)?;
    let mut tags = vec![
        ("description", meta.description.as_str()),
        ("og:title", meta.title.as_str()),
        ("og:description", meta.description.as_str()),
        ("og:url", canonical.as_str()),
        ("og:type", meta.kind),
        ("og:locale", lang.locale()),
        ("og:site_name", SITE_NAME),
    ];
    if let Some(image) = meta.image.as_deref() {
        tags.push(("og:image", image));
    }
    for (key, content) in tags {
        head.upsert_meta(MetaAttr::for_key(key), key, content)?;
    }
    head.upsert_canonical(&canonical)?;

    match &meta.structured_data {
        Some(schema) => head.replace_json_ld(STRUCTURED_DATA_ID, &schema.to_string()),
        None => head.remove_element(STRUCTURED_DATA_ID),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://bbcars.eu";

    fn synced(head: &mut HeadBuffer, path: &str, lang: Language) {
        let catalog = Catalog::builtin();
        sync(head, path, lang, &catalog, ORIGIN).unwrap();
    }

    #[test]
    fn vehicle_page_gets_title_and_one_schema() {
        let mut head = HeadBuffer::default();
        synced(&mut head, "/cs/auto/porsche-911-gt3", Language::Cs);
        assert_eq!(head.title(), Some("Porsche 911 GT3 (992) (2023) | BBCars"));
        assert_eq!(head.json_ld_count(STRUCTURED_DATA_ID), 1);

        let schema: Value = serde_json::from_str(head.json_ld(STRUCTURED_DATA_ID).unwrap()).unwrap();
        assert_eq!(schema["@type"], "Product");
        assert_eq!(schema["offers"]["price"], "6490000");
        assert_eq!(schema["description"], "Vůz v perfektním technickém stavu, po prvním majiteli.");
        assert_eq!(head.meta("og:type"), Some("product"));
        assert_eq!(head.canonical(), Some("https://bbcars.eu/cs/auto/porsche-911-gt3"));
    }

    #[test]
    fn navigating_away_removes_schema() {
        let mut head = HeadBuffer::default();
        synced(&mut head, "/en/auto/bmw-m4-comp", Language::En);
        assert_eq!(head.json_ld_count(STRUCTURED_DATA_ID), 1);
        synced(&mut head, "/en/inventory", Language::En);
        assert_eq!(head.json_ld_count(STRUCTURED_DATA_ID), 0);
        assert_eq!(head.title(), Some("Luxury Car Inventory | BBCars"));
    }

    #[test]
    fn repeated_sync_is_idempotent() {
        let mut once = HeadBuffer::default();
        synced(&mut once, "/cs/auto/ferrari-296-gtb", Language::Cs);
        let mut twice = once.clone();
        synced(&mut twice, "/cs/auto/ferrari-296-gtb", Language::Cs);
        assert_eq!(once, twice);
        assert_eq!(twice.meta_count("description"), 1);
        assert_eq!(twice.json_ld_count(STRUCTURED_DATA_ID), 1);
    }

    #[test]
    fn unknown_vehicle_falls_back_to_site_metadata() {
        let mut head = HeadBuffer::default();
        synced(&mut head, "/cs/auto/porsche-911-gt3", Language::Cs);
        synced(&mut head, "/cs/auto/skoda-favorit", Language::Cs);
        assert_eq!(head.title(), Some("BBCars | Luxury Digital Showroom"));
        assert_eq!(head.meta("description"), Some(translations(Language::Cs).seo_site_description));
        assert_eq!(head.json_ld_count(STRUCTURED_DATA_ID), 0);
    }

    #[test]
    fn open_graph_uses_property_attribute() {
        let mut head = HeadBuffer::default();
        synced(&mut head, "/en/contact", Language::En);
        assert_eq!(head.meta_attr("og:title"), Some(MetaAttr::Property));
        assert_eq!(head.meta_attr("description"), Some(MetaAttr::Name));
        assert_eq!(head.meta("og:title"), Some("Contact Us | Rokycany Showroom"));
        assert_eq!(head.meta("og:url"), Some("https://bbcars.eu/en/contact"));
    }

    #[test]
    fn section_titles_follow_language() {
        let catalog = Catalog::builtin();
        assert_eq!(page_meta(&Page::About, Language::Cs, &catalog).title, "O nás | Příběh BBCars");
        assert_eq!(page_meta(&Page::About, Language::En, &catalog).title, "About Us | The BBCars Story");
        assert_eq!(page_meta(&Page::Home, Language::En, &catalog), site_meta(Language::En));
    }

    #[test]
    fn article_page_uses_article_title() {
        let catalog = Catalog::builtin();
        let meta = page_meta(&Page::ArticleDetail("vykup-bez-starosti".into()), Language::En, &catalog);
        assert_eq!(meta.title, "Selling your car without the hassle | BBCars");
        assert_eq!(meta.kind, "article");
        assert!(meta.structured_data.is_none());
    }

    #[test]
    fn unresolved_paths_keep_their_own_canonical() {
        let catalog = Catalog::builtin();
        let (meta, canonical) = describe_path("/garage?x=1", Language::Cs, &catalog);
        assert_eq!(canonical, "/garage");
        assert_eq!(meta, site_meta(Language::Cs));
        let (_, canonical) = describe_path("/EN/inventory/", Language::En, &catalog);
        assert_eq!(canonical, "/en/inventory");
    }
}
