use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::location_controller::LocationController;
use crate::dto::location_dto::{CreateLocationRequest, LocationResponse, UpdateLocationRequest};
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_location_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_location))
        .route("/", get(list_locations))
        .route("/:id", get(get_location))
        .route("/:id", put(update_location))
        .route("/:id", delete(delete_location))
}

async fn create_location(
    State(state): State<AppState>,
    Path(pseudonym): Path<String>,
    Json(request): Json<CreateLocationRequest>,
) -> AppResult<StatusCode> {
    let controller = LocationController::new(state.pool.clone());
    controller.create(&pseudonym, request).await?;
    Ok(StatusCode::CREATED)
}

async fn get_location(
    State(state): State<AppState>,
    Path((pseudonym, id)): Path<(String, Uuid)>,
) -> AppResult<Json<LocationResponse>> {
    let controller = LocationController::new(state.pool.clone());
    let response = controller.get_by_id(&pseudonym, id).await?;
    Ok(Json(response))
}

async fn list_locations(
    State(state): State<AppState>,
    Path(pseudonym): Path<String>,
) -> AppResult<Json<Vec<LocationResponse>>> {
    let controller = LocationController::new(state.pool.clone());
    let response = controller.list(&pseudonym).await?;
    Ok(Json(response))
}

async fn update_location(
    State(state): State<AppState>,
    Path((pseudonym, id)): Path<(String, Uuid)>,
    Json(request): Json<UpdateLocationRequest>,
) -> AppResult<StatusCode> {
    let controller = LocationController::new(state.pool.clone());
    controller.update(&pseudonym, id, request).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_location(
    State(state): State<AppState>,
    Path((pseudonym, id)): Path<(String, Uuid)>,
) -> AppResult<StatusCode> {
    let controller = LocationController::new(state.pool.clone());
    controller.delete(&pseudonym, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
