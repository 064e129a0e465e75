use std::convert::Infallible;

use super::{DocumentHead, MetaAttr};

#[derive(Debug, Clone, PartialEq, Eq)]
struct MetaTag {
    attr: MetaAttr,
    key: String,
    content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Script {
    id: String,
    json: String,
}

/// In-memory document head. The server fills one per request and renders
/// it into the HTML shell so crawlers see the same tags the SPA would set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadBuffer {
    title: Option<String>,
    metas: Vec<MetaTag>,
    canonical: Option<String>,
    scripts: Vec<Script>,
}

impl HeadBuffer {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn canonical(&self) -> Option<&str> {
        self.canonical.as_deref()
    }

    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metas.iter().find(|m| m.key == key).map(|m| m.content.as_str())
    }

    pub fn meta_attr(&self, key: &str) -> Option<MetaAttr> {
        self.metas.iter().find(|m| m.key == key).map(|m| m.attr)
    }

    pub fn meta_count(&self, key: &str) -> usize {
        self.metas.iter().filter(|m| m.key == key).count()
    }

    pub fn json_ld(&self, id: &str) -> Option<&str> {
        self.scripts.iter().find(|s| s.id == id).map(|s| s.json.as_str())
    }

    pub fn json_ld_count(&self, id: &str) -> usize {
        self.scripts.iter().filter(|s| s.id == id).count()
    }

    /// The head contents as HTML, one tag per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(title) = &self.title {
            out.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        }
        for meta in &self.metas {
            out.push_str(&format!(
                "<meta {}=\"{}\" content=\"{}\">\n",
                meta.attr.attribute(),
                escape_html(&meta.key),
                escape_html(&meta.content)
            ));
        }
        if let Some(href) = &self.canonical {
            out.push_str(&format!("<link rel=\"canonical\" href=\"{}\">\n", escape_html(href)));
        }
        for script in &self.scripts {
            // `</` would close the script element early.
            out.push_str(&format!(
                "<script id=\"{}\" type=\"application/ld+json\">{}</script>\n",
                escape_html(&script.id),
                script.json.replace("</", "<\\/")
            ));
        }
        out
    }
}

impl DocumentHead for HeadBuffer {
    type Error = Infallible;

    fn set_title(&mut self, title: &str) -> Result<(), Infallible> {
        self.title = Some(title.to_string());
        Ok(())
    }

    fn upsert_meta(&mut self, attr: MetaAttr, key: &str, content: &str) -> Result<(), Infallible> {
        match self.metas.iter_mut().find(|m| m.key == key) {
            Some(meta) => meta.content = content.to_string(),
            None => self.metas.push(MetaTag { attr, key: key.to_string(), content: content.to_string() }),
        }
        Ok(())
    }

    fn upsert_canonical(&mut self, href: &str) -> Result<(), Infallible> {
        self.canonical = Some(href.to_string());
        Ok(())
    }

    fn replace_json_ld(&mut self, id: &str, json: &str) -> Result<(), Infallible> {
        self.remove_element(id)?;
        self.scripts.push(Script { id: id.to_string(), json: json.to_string() });
        Ok(())
    }

    fn remove_element(&mut self, id: &str) -> Result<(), Infallible> {
        self.scripts.retain(|s| s.id != id);
        Ok(())
    }
}

/// Escapes text for use in HTML content and double-quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_escaped_tags() {
        let mut head = HeadBuffer::default();
        head.set_title("B&B <Cars>").unwrap();
        head.upsert_meta(MetaAttr::Property, "og:title", "\"quoted\"").unwrap();
        head.upsert_canonical("https://bbcars.eu/cs").unwrap();
        head.replace_json_ld("json-ld-schema", r#"{"name":"</script>"}"#).unwrap();
        let html = head.render();
        assert!(html.contains("<title>B&amp;B &lt;Cars&gt;</title>"));
        assert!(html.contains(r#"<meta property="og:title" content="&quot;quoted&quot;">"#));
        assert!(html.contains(r#"<link rel="canonical" href="https://bbcars.eu/cs">"#));
        assert!(html.contains(r#"{"name":"<\/script>"}</script>"#));
    }

    #[test]
    fn upsert_updates_in_place() {
        let mut head = HeadBuffer::default();
        head.upsert_meta(MetaAttr::Name, "description", "first").unwrap();
        head.upsert_meta(MetaAttr::Name, "description", "second").unwrap();
        assert_eq!(head.meta_count("description"), 1);
        assert_eq!(head.meta("description"), Some("second"));
    }
}
