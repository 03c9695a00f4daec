//! Router assembly: routes, static assets and the middleware stack.

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::api;
use crate::app_state::AppState;
use crate::config::AppConfig;
use crate::middleware::{RateLimiter, rate_limit, security_headers};

/// Builds the complete application router.
///
/// Layout:
/// - `/api/*` JSON endpoints; every `/api` path, routed or not, is rate
///   limited in production mode
/// - `/`, `/posts` HTML pages and `/health`
/// - `/public/*` and the fallback serve the public directory
/// - `/vendor/*` serves browser libraries
/// - `/swagger-ui` and `/api-docs/openapi.json` with the `swagger-ui` feature
///
/// Every response passes through the security headers and the access log.
pub fn build_app(state: AppState, config: &AppConfig) -> Router {
    let router = Router::new()
        .merge(api::site_router())
        .merge(api::api_router());

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
        )
    };

    let mut router = router
        .nest_service("/public", ServeDir::new(&config.assets.public_dir))
        .nest_service("/vendor", ServeDir::new(&config.assets.vendor_dir))
        .fallback_service(ServeDir::new(&config.assets.public_dir));

    // Layered after the fallback so unrouted /api paths are counted too.
    if config.run_mode.is_production() {
        let limiter = Arc::new(RateLimiter::from_config(&config.rate_limit));
        tracing::info!(
            max_requests = config.rate_limit.max_requests,
            window_secs = config.rate_limit.window.as_secs(),
            "rate limiter enabled on /api"
        );
        router = router.layer(middleware::from_fn_with_state(limiter, rate_limit));
    } else {
        tracing::info!("rate limiter disabled outside production");
    }

    router
        .layer(middleware::from_fn(security_headers))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
