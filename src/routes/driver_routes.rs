use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::driver_controller::DriverController;
use crate::dto::driver_dto::{CreateDriverRequest, DriverResponse, UpdateDriverRequest};
use crate::routes::{location_routes, ride_routes, stop_routes};
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_driver))
        .route("/", get(list_drivers))
        .route("/:pseudonym", get(get_driver))
        .route("/:pseudonym", put(update_driver))
        .route("/:pseudonym", delete(delete_driver))
        .nest(
            "/:pseudonym/locations",
            location_routes::create_location_router(),
        )
        .nest("/:pseudonym/rides", ride_routes::create_ride_router())
        .nest("/:pseudonym/stops", stop_routes::create_stop_router())
}

async fn create_driver(
    State(state): State<AppState>,
    Json(request): Json<CreateDriverRequest>,
) -> AppResult<StatusCode> {
    let controller = DriverController::new(state.pool.clone());
    controller.create(request).await?;
    Ok(StatusCode::CREATED)
}

async fn get_driver(
    State(state): State<AppState>,
    Path(pseudonym): Path<String>,
) -> AppResult<Json<DriverResponse>> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.get_by_pseudonym(&pseudonym).await?;
    Ok(Json(response))
}

async fn list_drivers(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<DriverResponse>>> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn update_driver(
    State(state): State<AppState>,
    Path(pseudonym): Path<String>,
    Json(request): Json<UpdateDriverRequest>,
) -> AppResult<StatusCode> {
    let controller = DriverController::new(state.pool.clone());
    controller.update(&pseudonym, request).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_driver(
    State(state): State<AppState>,
    Path(pseudonym): Path<String>,
) -> AppResult<StatusCode> {
    let controller = DriverController::new(state.pool.clone());
    controller.delete(&pseudonym).await?;
    Ok(StatusCode::NO_CONTENT)
}
