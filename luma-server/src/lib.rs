//! HTTP surface for the Luma media library.
//!
//! A thin axum layer over the `luma-core` hydration engine: one route to
//! fetch an item's flat DTO, a health probe, and an optional seeded demo
//! library. Authentication, discovery, and streaming live elsewhere.

pub mod demo;
pub mod errors;
pub mod handlers;
pub mod responses;
pub mod state;

use axum::{http::Method, routing::get, Router};
use state::AppState;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/items/{id}", get(handlers::get_item))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
