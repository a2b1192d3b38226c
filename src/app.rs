use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/intervals", get(handlers::get_intervals))
        .route("/api/grid", get(handlers::get_grid))
        .with_state(state)
}
