/// Base URL of the API server. `BACKEND_URL` is baked in at build time;
/// without it the API is assumed to share the page's origin.
pub fn get_backend_url() -> String {
    match option_env!("BACKEND_URL") {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => site_origin(),
    }
}

/// Origin of the page currently shown, e.g. `https://bbcars.eu`.
pub fn site_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}
