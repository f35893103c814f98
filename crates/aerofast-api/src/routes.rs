//! Router setup with all API routes and middleware.
//!
//! Configures the axum Router with CORS, tracing, compression, rate
//! limiting and all endpoint handlers.

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use aerofast_core::config::AerofastConfig;
use aerofast_core::error::AerofastError;

use crate::handlers;
use crate::rate_limit::{rate_limit_middleware, RateLimiter};
use crate::state::AppState;

/// Create the axum Router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS: the page itself is served from the configured address, plus
    // port+1 for a front-end dev server.
    let port = state.config.server.port;
    let dev_port = port.saturating_add(1);
    let origins: Vec<HeaderValue> = [
        format!("http://127.0.0.1:{}", port),
        format!("http://localhost:{}", port),
        format!("http://127.0.0.1:{}", dev_port),
        format!("http://localhost:{}", dev_port),
    ]
    .iter()
    .filter_map(|origin| origin.parse::<HeaderValue>().ok())
    .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    // Read-only site data.
    let public_routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/catalog", get(handlers::catalog))
        .route("/catalog/{id}", get(handlers::catalog_item))
        .route("/concierge/quick-actions", get(handlers::quick_actions))
        .route("/content/company", get(handlers::company))
        .route("/content/navigation", get(handlers::navigation))
        .route("/content/services", get(handlers::services))
        .route("/content/news", get(handlers::news))
        .route("/content/manufacturers", get(handlers::manufacturers));

    let limiter = RateLimiter::new(state.config.server.rate_limit_per_sec);

    // Interactive routes.
    let rate_limited_routes = Router::new()
        .route("/concierge/respond", post(handlers::respond))
        .route("/visits", post(handlers::open_visit))
        .route("/visits/{id}", delete(handlers::close_visit))
        .route(
            "/visits/{id}/messages",
            get(handlers::messages).post(handlers::post_message),
        )
        .route(
            "/visits/{id}/quick-actions/{index}",
            post(handlers::post_quick_action),
        )
        .route("/visits/{id}/catalog", get(handlers::visit_catalog))
        .route(
            "/visits/{id}/catalog/query",
            put(handlers::set_catalog_query).delete(handlers::clear_catalog_query),
        )
        .route("/visits/{id}/catalog/sort", post(handlers::toggle_catalog_sort))
        .route("/visits/{id}/catalog/reset", post(handlers::reset_catalog))
        .route(
            "/visits/{id}/contact",
            get(handlers::contact_status)
                .post(handlers::submit_inquiry)
                .layer(DefaultBodyLimit::max(64 * 1024)), // 64KB for inquiries
        )
        .layer(axum::middleware::from_fn(rate_limit_middleware))
        .layer(axum::Extension(limiter));

    // SSE stream exempt from rate limiting.
    let stream_routes = Router::new().route("/visits/{id}/stream", get(handlers::stream));

    public_routes
        .merge(rate_limited_routes)
        .merge(stream_routes)
        .layer(DefaultBodyLimit::max(256 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server on the configured address and serve until
/// ctrl-c. Idle visits are swept while serving; the rest are torn down on
/// the way out.
pub async fn start_server(config: &AerofastConfig, state: AppState) -> Result<(), AerofastError> {
    let addr = format!("{}:{}", config.server.bind_address, config.server.port);
    let visits = state.visits.clone();
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AerofastError::Api(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!(addr = %addr, "API server listening");
    let sweeper = visits.spawn_sweeper();

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => tracing::info!("Shutdown signal received"),
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to listen for shutdown signal");
                    std::future::pending::<()>().await;
                }
            }
        })
        .await
        .map_err(|e| AerofastError::Api(format!("Server error: {}", e)))?;

    if let Some(sweeper) = sweeper {
        sweeper.abort();
    }
    visits.close_all();
    Ok(())
}
