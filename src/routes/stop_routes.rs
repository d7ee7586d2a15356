use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::stop_controller::StopController;
use crate::dto::stop_dto::StopResponse;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_stop_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_stops))
        .route("/:id", get(get_stop))
}

async fn get_stop(
    State(state): State<AppState>,
    Path((pseudonym, id)): Path<(String, Uuid)>,
) -> AppResult<Json<StopResponse>> {
    let controller = StopController::new(state.pool.clone());
    let response = controller.get_by_id(&pseudonym, id).await?;
    Ok(Json(response))
}

async fn list_stops(
    State(state): State<AppState>,
    Path(pseudonym): Path<String>,
) -> AppResult<Json<Vec<StopResponse>>> {
    let controller = StopController::new(state.pool.clone());
    let response = controller.list(&pseudonym).await?;
    Ok(Json(response))
}
