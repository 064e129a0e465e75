use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use bbcars_common::Catalog;
use dashmap::DashMap;
use governor::{clock::DefaultClock, state::keyed::DefaultKeyedStateStore, Quota, RateLimiter};
use nonzero_ext::nonzero;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod error;
pub mod handlers {
    pub mod inventory_handlers;
    pub mod journal_handlers;
    pub mod lead_handlers;
    pub mod page_handlers;
}

use config::{Config, ConfigError};
use handlers::{inventory_handlers, journal_handlers, lead_handlers, page_handlers};

pub type KeyedLimiter = RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>;

pub struct AppState {
    pub config: Config,
    pub catalog: Catalog<'static>,
    /// `index.html` of the built frontend, with SEO tags injected per request.
    pub shell: String,
    /// Lead limiters by lead kind, keyed by the customer's contact.
    pub lead_limiter: DashMap<&'static str, KeyedLimiter>,
    pub lead_quota: Quota,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        // 5 leads per minute per contact and form
        Self::with_lead_quota(config, Quota::per_minute(nonzero!(5u32)))
    }

    pub fn with_lead_quota(config: Config, lead_quota: Quota) -> Self {
        let shell = page_handlers::load_shell(&config.frontend_dist);
        Self {
            config,
            catalog: Catalog::builtin(),
            shell,
            lead_limiter: DashMap::new(),
            lead_quota,
        }
    }

    /// Drops limiter entries for contacts whose quota has fully replenished.
    /// Returns how many entries remain.
    pub fn prune_lead_limiters(&self) -> usize {
        self.lead_limiter
            .iter()
            .map(|limiter| {
                limiter.retain_recent();
                limiter.shrink_to_fit();
                limiter.len()
            })
            .sum()
    }
}

async fn health_check() -> &'static str {
    "OK"
}

pub fn build_router(state: Arc<AppState>) -> Result<Router, ConfigError> {
    let origin = HeaderValue::from_str(&state.config.frontend_url).map_err(|_| ConfigError::InvalidUrl {
        name: "FRONTEND_URL",
        value: state.config.frontend_url.clone(),
    })?;

    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/cars", get(inventory_handlers::list_cars))
        .route("/cars/{id}", get(inventory_handlers::get_car))
        .route("/articles", get(journal_handlers::list_articles))
        .route("/articles/{id}", get(journal_handlers::get_article))
        .route("/leads", post(lead_handlers::submit_lead))
        .fallback(page_handlers::api_not_found)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    // Built assets first; everything else is a client route rendered from the shell.
    let spa = ServeDir::new(&state.config.frontend_dist)
        .append_index_html_on_directories(false)
        .fallback(get(page_handlers::render_page).with_state::<()>(state.clone()));

    let app = Router::new()
        .nest("/api", api_routes)
        .route("/sitemap.xml", get(page_handlers::sitemap))
        .route("/robots.txt", get(page_handlers::robots))
        .fallback_service(spa)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(
                    CorsLayer::new()
                        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                        .allow_origin(AllowOrigin::exact(origin))
                        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN]),
                ),
        )
        .with_state(state);
    Ok(app)
}
