//! Bookmart listing server
//!
//! A REST JSON API for creating, reading, updating and deleting used book
//! listings, backed by PostgreSQL or an in-memory store.

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::BookStore;
use services::Services;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<Services>,
}

impl AppState {
    /// Wire services on top of a store using the configured storage timeout
    pub fn new(config: &AppConfig, store: Arc<dyn BookStore>) -> Self {
        Self {
            services: Arc::new(Services::new(store, config.storage.timeout())),
        }
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let books = Router::new()
        .route("/create", post(api::books::create_book))
        .route("/get", get(api::books::list_books))
        .route("/update/:isbn", put(api::books::update_book))
        .route("/find/:isbn", get(api::books::find_book))
        .route("/delete/:isbn", delete(api::books::delete_book));

    let routes = Router::new()
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        .nest("/books", books)
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(api::openapi::create_openapi_router())
        .fallback(api::not_found)
        .layer(middleware::map_response(api::method_mismatch_as_not_found))
        .layer(CatchPanicLayer::custom(api::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
