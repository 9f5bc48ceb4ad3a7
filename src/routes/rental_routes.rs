//! Rutas de contratos de alquiler: lectura autenticada, escritura solo admin

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::rental_controller::RentalController;
use crate::middleware::auth::admin_only;
use crate::models::common::DeletedResponse;
use crate::models::rental::{CreateRentalRequest, Rental, UpdateRentalRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_rental_router() -> Router<AppState> {
    let writes = Router::new()
        .route("/", post(create_rental))
        .route("/:id", put(update_rental))
        .route("/:id", delete(delete_rental))
        .route_layer(middleware::from_fn(admin_only));

    Router::new()
        .route("/", get(list_rentals))
        .route("/vehicle/:vehicle_id", get(list_rentals_by_vehicle))
        .route("/:id", get(get_rental))
        .merge(writes)
}

async fn list_rentals(State(state): State<AppState>) -> Result<Json<Vec<Rental>>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let rentals = controller.list().await?;
    Ok(Json(rentals))
}

async fn list_rentals_by_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
) -> Result<Json<Vec<Rental>>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let rentals = controller.list_by_vehicle(vehicle_id).await?;
    Ok(Json(rentals))
}

async fn get_rental(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Rental>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let rental = controller.get_by_id(id).await?;
    Ok(Json(rental))
}

async fn create_rental(
    State(state): State<AppState>,
    Json(request): Json<CreateRentalRequest>,
) -> Result<(StatusCode, Json<Rental>), AppError> {
    let controller = RentalController::new(state.pool.clone());
    let rental = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(rental)))
}

async fn update_rental(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateRentalRequest>,
) -> Result<Json<Rental>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let rental = controller.update(id, request).await?;
    Ok(Json(rental))
}

async fn delete_rental(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeletedResponse<Rental>>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
