use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::ride_controller::RideController;
use crate::dto::ride_dto::{CreateRideRequest, RideResponse, UpdateRideRequest};
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_ride_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_ride))
        .route("/", get(list_rides))
        .route("/:id", get(get_ride))
        .route("/:id", put(update_ride))
        .route("/:id", delete(delete_ride))
}

async fn create_ride(
    State(state): State<AppState>,
    Path(pseudonym): Path<String>,
    Json(request): Json<CreateRideRequest>,
) -> AppResult<StatusCode> {
    let controller = RideController::new(state.pool.clone());
    controller.create(&pseudonym, request).await?;
    Ok(StatusCode::CREATED)
}

async fn get_ride(
    State(state): State<AppState>,
    Path((pseudonym, id)): Path<(String, Uuid)>,
) -> AppResult<Json<RideResponse>> {
    let controller = RideController::new(state.pool.clone());
    let response = controller.get_by_id(&pseudonym, id).await?;
    Ok(Json(response))
}

async fn list_rides(
    State(state): State<AppState>,
    Path(pseudonym): Path<String>,
) -> AppResult<Json<Vec<RideResponse>>> {
    let controller = RideController::new(state.pool.clone());
    let response = controller.list(&pseudonym).await?;
    Ok(Json(response))
}

async fn update_ride(
    State(state): State<AppState>,
    Path((pseudonym, id)): Path<(String, Uuid)>,
    Json(request): Json<UpdateRideRequest>,
) -> AppResult<StatusCode> {
    let controller = RideController::new(state.pool.clone());
    controller.update(&pseudonym, id, request).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_ride(
    State(state): State<AppState>,
    Path((pseudonym, id)): Path<(String, Uuid)>,
) -> AppResult<StatusCode> {
    let controller = RideController::new(state.pool.clone());
    controller.delete(&pseudonym, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
