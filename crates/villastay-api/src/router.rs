//! Route definitions for the VillaStay HTTP API.
//!
//! All entity routes are mounted under `/api`. The router receives
//! `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};
use tower_http::trace::TraceLayer;

use villastay_core::config::app::CorsConfig;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(villa_routes())
        .merge(villa_number_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(handlers::health::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Villa CRUD endpoints
fn villa_routes() -> Router<AppState> {
    Router::new()
        .route("/villas", get(handlers::villa::list_villas))
        .route("/villas", post(handlers::villa::create_villa))
        .route("/villas/{id}", get(handlers::villa::get_villa))
        .route("/villas/{id}", put(handlers::villa::update_villa))
        .route("/villas/{id}", patch(handlers::villa::patch_villa))
        .route("/villas/{id}", delete(handlers::villa::delete_villa))
}

/// Villa number CRUD endpoints
fn villa_number_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/villa-numbers",
            get(handlers::villa_number::list_villa_numbers),
        )
        .route(
            "/villa-numbers",
            post(handlers::villa_number::create_villa_number),
        )
        .route(
            "/villa-numbers/{id}",
            get(handlers::villa_number::get_villa_number),
        )
        .route(
            "/villa-numbers/{id}",
            put(handlers::villa_number::update_villa_number),
        )
        .route(
            "/villa-numbers/{id}",
            patch(handlers::villa_number::patch_villa_number),
        )
        .route(
            "/villa-numbers/{id}",
            delete(handlers::villa_number::delete_villa_number),
        )
}

/// Build CORS layer from configuration
fn build_cors_layer(cors_config: &CorsConfig) -> tower_http::cors::CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::{Any, CorsLayer};

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}
