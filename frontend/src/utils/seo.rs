use bbcars_common::seo::{DocumentHead, MetaAttr};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlHeadElement};

/// [`DocumentHead`] over the live `<head>`. Finds tags the server already
/// rendered before creating new ones.
pub struct DomHead {
    document: Document,
    head: HtmlHeadElement,
}

impl DomHead {
    pub fn from_window() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let head = document.head()?;
        Some(Self { document, head })
    }

    fn find_or_create(&self, selector: &str, tag: &str) -> Result<Element, JsValue> {
        if let Some(element) = self.document.query_selector(selector)? {
            return Ok(element);
        }
        let element = self.document.create_element(tag)?;
        self.head.append_child(&element)?;
        Ok(element)
    }
}

impl DocumentHead for DomHead {
    type Error = JsValue;

    fn set_title(&mut self, title: &str) -> Result<(), JsValue> {
        self.document.set_title(title);
        Ok(())
    }

    fn upsert_meta(&mut self, attr: MetaAttr, key: &str, content: &str) -> Result<(), JsValue> {
        let selector = format!("meta[{}=\"{}\"]", attr.attribute(), key);
        let meta = self.find_or_create(&selector, "meta")?;
        meta.set_attribute(attr.attribute(), key)?;
        meta.set_attribute("content", content)
    }

    fn upsert_canonical(&mut self, href: &str) -> Result<(), JsValue> {
        let link = self.find_or_create("link[rel=\"canonical\"]", "link")?;
        link.set_attribute("rel", "canonical")?;
        link.set_attribute("href", href)
    }

    fn replace_json_ld(&mut self, id: &str, json: &str) -> Result<(), JsValue> {
        self.remove_element(id)?;
        let script = self.document.create_element("script")?;
        script.set_id(id);
        script.set_attribute("type", "application/ld+json")?;
        script.set_text_content(Some(json));
        self.head.append_child(&script)?;
        Ok(())
    }

    fn remove_element(&mut self, id: &str) -> Result<(), JsValue> {
        if let Some(element) = self.document.get_element_by_id(id) {
            element.remove();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bbcars_common::seo::{sync, STRUCTURED_DATA_ID};
    use bbcars_common::{Catalog, Language};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const ORIGIN: &str = "https://bbcars.eu";

    fn count(head: &DomHead, selector: &str) -> u32 {
        head.document.query_selector_all(selector).unwrap().length()
    }

    #[wasm_bindgen_test]
    fn repeated_sync_keeps_one_tag_of_each_kind() {
        let catalog = Catalog::builtin();
        let mut head = DomHead::from_window().unwrap();
        sync(&mut head, "/cs/auto/porsche-911-gt3", Language::Cs, &catalog, ORIGIN).unwrap();
        sync(&mut head, "/cs/auto/porsche-911-gt3", Language::Cs, &catalog, ORIGIN).unwrap();

        assert_eq!(head.document.title(), "Porsche 911 GT3 (992) (2023) | BBCars");
        assert_eq!(count(&head, &format!("script#{}", STRUCTURED_DATA_ID)), 1);
        assert_eq!(count(&head, "meta[name=\"description\"]"), 1);
        assert_eq!(count(&head, "meta[property=\"og:title\"]"), 1);
        assert_eq!(count(&head, "link[rel=\"canonical\"]"), 1);
        let canonical = head.document.query_selector("link[rel=\"canonical\"]").unwrap().unwrap();
        assert_eq!(
            canonical.get_attribute("href").as_deref(),
            Some("https://bbcars.eu/cs/auto/porsche-911-gt3")
        );
    }

    #[wasm_bindgen_test]
    fn leaving_a_vehicle_page_removes_structured_data() {
        let catalog = Catalog::builtin();
        let mut head = DomHead::from_window().unwrap();
        sync(&mut head, "/en/auto/porsche-911-gt3", Language::En, &catalog, ORIGIN).unwrap();
        assert_eq!(count(&head, &format!("script#{}", STRUCTURED_DATA_ID)), 1);

        sync(&mut head, "/en/inventory", Language::En, &catalog, ORIGIN).unwrap();
        assert_eq!(count(&head, &format!("script#{}", STRUCTURED_DATA_ID)), 0);
        assert_eq!(count(&head, "meta[name=\"description\"]"), 1);
    }
}
