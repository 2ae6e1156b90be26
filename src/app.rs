use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/breakdown", get(handlers::get_breakdown))
        .route("/api/options", get(handlers::get_options))
        .with_state(state)
}
