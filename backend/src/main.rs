use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use bbcars_backend::{build_router, config::Config, AppState};
use dotenvy::dotenv;
use tokio::net::TcpListener;

const LIMITER_PRUNE_EVERY: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = Config::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some(config.environment.clone().into()),
            ..Default::default()
        }))
    });

    use tracing_subscriber::{fmt, EnvFilter};
    let default_filter = if config.is_production() {
        "info"
    } else {
        "info,bbcars_backend=debug"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            EnvFilter::new(default_filter)
                .add_directive("hyper=warn".parse().expect("static directive"))
        });
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let port = config.port;
    tracing::info!("Environment: {}, site: {}", config.environment, config.site_url);
    let state = Arc::new(AppState::new(config));
    let app = build_router(state.clone())?;

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(LIMITER_PRUNE_EVERY);
        loop {
            interval.tick().await;
            let remaining = state.prune_lead_limiters();
            tracing::debug!("Pruned lead limiters, {} contacts still throttled", remaining);
        }
    });

    tracing::info!("Starting server on port {}", port);
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
