use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};
use bbcars_common::routes::{self, Page, Resolution};
use bbcars_common::seo::{self, escape_html, HeadBuffer};
use bbcars_common::Language;
use chrono::Utc;

use crate::error::ApiError;
use crate::AppState;

/// Used when the frontend has not been built, so crawlers still get a
/// document with the right head.
const DEFAULT_SHELL: &str = "<!DOCTYPE html>
<html>
<head>
<meta charset=\"utf-8\">
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">
</head>
<body></body>
</html>
";

pub fn load_shell(dist: &Path) -> String {
    let index = dist.join("index.html");
    match std::fs::read_to_string(&index) {
        Ok(shell) => {
            tracing::info!("Serving frontend shell from {}", index.display());
            shell
        }
        Err(e) => {
            tracing::warn!("Could not read {}: {}, using the bare shell", index.display(), e);
            DEFAULT_SHELL.to_string()
        }
    }
}

/// Any GET that is neither an API call nor a built asset: a page of the
/// single-page app with its SEO head already in place, or a redirect.
pub async fn render_page(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let path = uri.path();
    match routes::resolve_existing(path, &state.catalog) {
        Resolution::Redirect(target) => {
            tracing::debug!("Redirecting {} to {}", path, target);
            Redirect::temporary(&target).into_response()
        }
        Resolution::Page { lang, .. } => {
            let mut head = HeadBuffer::default();
            if let Err(never) = seo::sync(&mut head, path, lang, &state.catalog, &state.config.site_url) {
                match never {}
            }
            Html(inject_head(&state.shell, &head.render(), lang)).into_response()
        }
    }
}

pub async fn api_not_found(uri: Uri) -> ApiError {
    ApiError::not_found(uri.path())
}

fn inject_head(shell: &str, head: &str, lang: Language) -> String {
    let mut html = strip_title(shell);
    match html.find("</head>") {
        Some(at) => html.insert_str(at, head),
        None => html.insert_str(0, head),
    }
    if html.contains("<html lang=") {
        html
    } else {
        html.replacen("<html", &format!("<html lang=\"{}\"", lang.code()), 1)
    }
}

/// The head carries its own title; a static one in the shell would be a duplicate.
fn strip_title(shell: &str) -> String {
    match (shell.find("<title>"), shell.find("</title>")) {
        (Some(start), Some(end)) if start < end => {
            format!("{}{}", &shell[..start], &shell[end + "</title>".len()..])
        }
        _ => shell.to_string(),
    }
}

pub async fn sitemap(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let site = &state.config.site_url;
    let lastmod = Utc::now().format("%Y-%m-%d").to_string();
    let pages = Page::STATIC
        .into_iter()
        .chain(state.catalog.vehicles().iter().map(|v| Page::CarDetail(v.id.to_string())))
        .chain(state.catalog.articles().iter().map(|a| Page::ArticleDetail(a.id.to_string())));

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );
    for page in pages {
        for lang in Language::ALL {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_html(&format!("{}{}", site, page.path(lang)))));
            for alternate in Language::ALL {
                xml.push_str(&format!(
                    "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\"/>\n",
                    alternate.code(),
                    escape_html(&format!("{}{}", site, page.path(alternate)))
                ));
            }
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod));
            xml.push_str("  </url>\n");
        }
    }
    xml.push_str("</urlset>\n");
    ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml)
}

pub async fn robots(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        format!("User-agent: *\nAllow: /\nDisallow: /api/\n\nSitemap: {}/sitemap.xml\n", state.config.site_url),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injects_head_before_closing_tag_and_sets_lang() {
        let shell = "<html><head><title>BBCars</title><link rel=\"stylesheet\"></head><body></body></html>";
        let html = inject_head(shell, "<title>Inventář | BBCars</title>\n", Language::Cs);
        assert_eq!(
            html,
            "<html lang=\"cs\"><head><link rel=\"stylesheet\"><title>Inventář | BBCars</title>\n</head><body></body></html>"
        );
    }

    #[test]
    fn keeps_existing_lang_attribute() {
        let html = inject_head("<html lang=\"en\"><head></head></html>", "", Language::Cs);
        assert!(html.starts_with("<html lang=\"en\">"));
    }
}
