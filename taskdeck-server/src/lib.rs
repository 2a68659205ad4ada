//! # Taskdeck Server
//!
//! REST surface over the todo list engine in `taskdeck-core`. The list
//! endpoint accepts `sort`, `q`, `page` and `size`, always answers with a
//! fully resolved query, and reports what it applied in `X-*` headers.

pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
pub use infra::errors::{AppError, AppResult};

use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method},
    routing::get,
};
use taskdeck_config::CorsConfig;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{health, todos};

pub fn create_app(state: AppState) -> Router {
    let versioned_api = routes::create_api_router();
    let cors_layer = build_cors_layer(&state.config().cors);

    Router::new()
        .route("/health", get(health::health_handler))
        .merge(versioned_api)
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors_layer(cors: &CorsConfig) -> CorsLayer {
    let wildcard = cors.is_wildcard_included();

    let allow_origin = if wildcard {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = cors
            .allowed_origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();
        AllowOrigin::list(origins)
    };

    // Methods and headers are checked by the config guard rails.
    let methods: Vec<Method> = cors
        .allowed_methods
        .iter()
        .filter_map(|m| Method::from_bytes(m.trim().as_bytes()).ok())
        .collect();
    let headers: Vec<HeaderName> = cors
        .allowed_headers
        .iter()
        .filter_map(|h| HeaderName::from_bytes(h.trim().as_bytes()).ok())
        .collect();

    let mut layer = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::list(methods))
        .allow_headers(AllowHeaders::list(headers))
        .expose_headers(todos::LIST_HEADERS.map(HeaderName::from_static));

    // tower-http rejects credentials combined with a wildcard origin.
    if cors.allow_credentials && !wildcard {
        layer = layer.allow_credentials(true);
    }

    layer
}
