use crate::errors::AppError;
use crate::grid::build_grid;
use crate::models::GridResponse;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.config.target_activity_id))
}

/// Pass-through proxy for the upstream activities document.
pub async fn get_intervals(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    Ok(Json(state.upstream.fetch_raw().await?))
}

pub async fn get_grid(State(state): State<AppState>) -> Result<Json<GridResponse>, AppError> {
    let intervals = state.upstream.fetch_intervals().await?;
    let grid = build_grid(&intervals, &state.config.target_activity_id);
    info!(
        "built grid: {} days, {} matched, {} skipped",
        grid.days.len(),
        grid.matched_count,
        grid.skipped_count
    );
    Ok(Json(grid))
}
