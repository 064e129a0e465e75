//! The route table shared by the SPA router and the server-side renderer.
//!
//! Every page lives under a language prefix (`/cs/...`, `/en/...`). Paths
//! are resolved to a [`Page`] or to a redirect target; nothing here fails.

use crate::catalog::Catalog;
use crate::lang::Language;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Inventory,
    CarDetail(String),
    Buyout,
    Services,
    Rent,
    CustomOrder,
    About,
    Contact,
    Terms,
    Privacy,
    Journal,
    ArticleDetail(String),
}

/// Outcome of resolving a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Page { lang: Language, page: Page },
    Redirect(String),
}

impl Page {
    /// Pages without parameters, in navigation order.
    pub const STATIC: [Page; 11] = [
        Page::Home,
        Page::Inventory,
        Page::Rent,
        Page::Buyout,
        Page::CustomOrder,
        Page::About,
        Page::Services,
        Page::Contact,
        Page::Journal,
        Page::Terms,
        Page::Privacy,
    ];

    /// Matches the path segments that follow the language prefix.
    pub fn from_segments(segments: &[&str]) -> Option<Page> {
        let page = match segments {
            [] => Page::Home,
            ["inventory"] => Page::Inventory,
            ["auto", id] => Page::CarDetail((*id).to_string()),
            ["buyout"] => Page::Buyout,
            ["services"] => Page::Services,
            ["rent"] => Page::Rent,
            ["custom-order"] => Page::CustomOrder,
            ["about"] => Page::About,
            ["contact"] => Page::Contact,
            ["terms"] => Page::Terms,
            ["privacy"] => Page::Privacy,
            ["journal"] => Page::Journal,
            ["journal", id] => Page::ArticleDetail((*id).to_string()),
            _ => return None,
        };
        Some(page)
    }

    /// Path below the language prefix, without a leading slash.
    fn suffix(&self) -> String {
        match self {
            Page::Home => String::new(),
            Page::Inventory => "inventory".into(),
            Page::CarDetail(id) => format!("auto/{id}"),
            Page::Buyout => "buyout".into(),
            Page::Services => "services".into(),
            Page::Rent => "rent".into(),
            Page::CustomOrder => "custom-order".into(),
            Page::About => "about".into(),
            Page::Contact => "contact".into(),
            Page::Terms => "terms".into(),
            Page::Privacy => "privacy".into(),
            Page::Journal => "journal".into(),
            Page::ArticleDetail(id) => format!("journal/{id}"),
        }
    }

    /// Canonical absolute path of this page in `lang`.
    pub fn path(&self, lang: Language) -> String {
        let suffix = self.suffix();
        if suffix.is_empty() {
            format!("/{}", lang.code())
        } else {
            format!("/{}/{}", lang.code(), suffix)
        }
    }
}

fn segments(path: &str) -> Vec<&str> {
    let path = path.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Resolves a path against the route table alone.
///
/// A known page without a language prefix redirects to its Czech variant;
/// anything unknown redirects to the home page.
pub fn resolve(path: &str) -> Resolution {
    let segments = segments(path);
    let home = Page::Home.path(Language::default());
    match segments.split_first() {
        Some((first, rest)) => match Language::from_segment(first) {
            Some(lang) => match Page::from_segments(rest) {
                Some(page) => Resolution::Page { lang, page },
                None => Resolution::Redirect(Page::Home.path(lang)),
            },
            None => match Page::from_segments(&segments) {
                Some(page) => Resolution::Redirect(page.path(Language::default())),
                None => Resolution::Redirect(home),
            },
        },
        None => Resolution::Redirect(home),
    }
}

/// Like [`resolve`], but also sends detail pages for unknown records to
/// their fallback listing: vehicles to the home page, articles to the journal.
pub fn resolve_existing(path: &str, catalog: &Catalog<'_>) -> Resolution {
    match resolve(path) {
        Resolution::Page { lang, page: Page::CarDetail(id) } if catalog.find_vehicle(&id).is_none() => {
            Resolution::Redirect(Page::Home.path(lang))
        }
        Resolution::Page { lang, page: Page::ArticleDetail(id) } if catalog.find_article(&id).is_none() => {
            Resolution::Redirect(Page::Journal.path(lang))
        }
        other => other,
    }
}

/// Same page in the other language, for the language switcher.
pub fn switch_language(path: &str) -> String {
    match resolve(path) {
        Resolution::Page { lang, page } => page.path(lang.other()),
        Resolution::Redirect(target) => target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(lang: Language, page: Page) -> Resolution {
        Resolution::Page { lang, page }
    }

    #[test]
    fn resolves_language_prefixed_pages() {
        assert_eq!(resolve("/cs"), page(Language::Cs, Page::Home));
        assert_eq!(resolve("/en/inventory"), page(Language::En, Page::Inventory));
        assert_eq!(resolve("/EN/inventory/"), page(Language::En, Page::Inventory));
        assert_eq!(resolve("/cs/auto/bmw-m4-comp"), page(Language::Cs, Page::CarDetail("bmw-m4-comp".into())));
        assert_eq!(resolve("/en/journal/gt3-na-okruhu?ref=ig"), page(Language::En, Page::ArticleDetail("gt3-na-okruhu".into())));
        assert_eq!(resolve("/cs/custom-order"), page(Language::Cs, Page::CustomOrder));
    }

    #[test]
    fn unknown_paths_redirect_home() {
        assert_eq!(resolve("/"), Resolution::Redirect("/cs".into()));
        assert_eq!(resolve(""), Resolution::Redirect("/cs".into()));
        assert_eq!(resolve("/cs/garage"), Resolution::Redirect("/cs".into()));
        assert_eq!(resolve("/en/auto"), Resolution::Redirect("/en".into()));
        assert_eq!(resolve("/de/inventory/x"), Resolution::Redirect("/cs".into()));
    }

    #[test]
    fn unprefixed_known_pages_get_czech_prefix() {
        assert_eq!(resolve("/inventory"), Resolution::Redirect("/cs/inventory".into()));
        assert_eq!(resolve("/auto/ferrari-296-gtb"), Resolution::Redirect("/cs/auto/ferrari-296-gtb".into()));
    }

    #[test]
    fn missing_vehicle_redirects_to_home_and_missing_article_to_journal() {
        let catalog = Catalog::builtin();
        assert_eq!(resolve_existing("/en/auto/trabant-601", &catalog), Resolution::Redirect("/en".into()));
        assert_eq!(resolve_existing("/cs/journal/nope", &catalog), Resolution::Redirect("/cs/journal".into()));
        assert_eq!(
            resolve_existing("/cs/auto/porsche-911-gt3", &catalog),
            page(Language::Cs, Page::CarDetail("porsche-911-gt3".into()))
        );
    }

    #[test]
    fn language_switch_keeps_page() {
        assert_eq!(switch_language("/cs/auto/bmw-m4-comp"), "/en/auto/bmw-m4-comp");
        assert_eq!(switch_language("/en"), "/cs");
        assert_eq!(switch_language("/xx"), "/cs");
    }
}
