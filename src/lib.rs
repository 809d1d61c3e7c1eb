pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod queries;
pub mod routes;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::Config, db::Store};

pub use db::{StoreError, StoreResult};

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self { store: Store::new(&config.database_path) }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/api/series", get(routes::list_series))
        .route("/api/series/current", get(routes::current_series))
        .route("/api/series/current/id", get(routes::current_series_id))
        .route("/api/series/{id}", get(routes::series))
        .route("/api/series/{id}/schedule", get(routes::schedule))
        .route("/api/films/{id}", get(routes::film))
        .with_state(Arc::new(state))
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
