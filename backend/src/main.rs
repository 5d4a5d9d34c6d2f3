use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
    middleware
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;
use std::net::SocketAddr;
use std::sync::Arc;

mod config {
    pub mod app_config;
}
mod handlers {
    pub mod lead_dtos;
    pub mod lead_handlers;
    pub mod rate_limit;
}
mod mail {
    pub mod mailer;
    pub mod templates;
}

use config::app_config::Config;
use handlers::lead_handlers;
use handlers::rate_limit::{self, IpRateLimiter};
use mail::mailer::{Mailer, SmtpMailer};

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    config: Config,
    mailer: Arc<dyn Mailer>,
    limiter: Arc<IpRateLimiter>,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let lead_routes = Router::new()
        .route("/api/send-email", post(lead_handlers::send_email))
        .route_layer(middleware::from_fn_with_state(state.clone(), rate_limit::limit_by_ip));

    let origin = state.config.frontend_url
        .parse::<axum::http::HeaderValue>()
        .map(AllowOrigin::exact)
        .unwrap_or_else(|_| AllowOrigin::any());

    Router::new()
        .route("/api/health", get(health_check))
        .merge(lead_routes)
        .nest_service("/content", ServeDir::new(&state.config.content_dir))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(origin)
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = Config::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mailer = SmtpMailer::from_config(&config)?;
    let limiter = Arc::new(rate_limit::lead_rate_limiter());
    rate_limit::spawn_cleanup(limiter.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Serving content from {} for {}", config.content_dir, config.frontend_url);

    let state = Arc::new(AppState {
        config,
        mailer: Arc::new(mailer),
        limiter,
    });
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;
    Ok(())
}
