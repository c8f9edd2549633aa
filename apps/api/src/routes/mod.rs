pub mod health;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home_handler))
        .route("/health", get(health::health_handler))
        .route("/generate", post(handlers::handle_generate))
        .route("/download/:filename", get(handlers::handle_download))
        .with_state(state)
}
