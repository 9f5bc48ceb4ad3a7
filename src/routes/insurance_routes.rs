//! Rutas de pólizas de seguro: lectura autenticada, escritura solo admin

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::insurance_controller::InsuranceController;
use crate::middleware::auth::admin_only;
use crate::models::common::DeletedResponse;
use crate::models::insurance::{CreateInsuranceRequest, Insurance, UpdateInsuranceRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_insurance_router() -> Router<AppState> {
    let writes = Router::new()
        .route("/", post(create_insurance))
        .route("/:id", put(update_insurance))
        .route("/:id", delete(delete_insurance))
        .route_layer(middleware::from_fn(admin_only));

    Router::new()
        .route("/", get(list_insurances))
        .route("/vehicle/:vehicle_id", get(list_insurances_by_vehicle))
        .route("/:id", get(get_insurance))
        .merge(writes)
}

async fn list_insurances(State(state): State<AppState>) -> Result<Json<Vec<Insurance>>, AppError> {
    let controller = InsuranceController::new(state.pool.clone());
    let insurances = controller.list().await?;
    Ok(Json(insurances))
}

async fn list_insurances_by_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
) -> Result<Json<Vec<Insurance>>, AppError> {
    let controller = InsuranceController::new(state.pool.clone());
    let insurances = controller.list_by_vehicle(vehicle_id).await?;
    Ok(Json(insurances))
}

async fn get_insurance(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Insurance>, AppError> {
    let controller = InsuranceController::new(state.pool.clone());
    let insurance = controller.get_by_id(id).await?;
    Ok(Json(insurance))
}

async fn create_insurance(
    State(state): State<AppState>,
    Json(request): Json<CreateInsuranceRequest>,
) -> Result<(StatusCode, Json<Insurance>), AppError> {
    let controller = InsuranceController::new(state.pool.clone());
    let insurance = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(insurance)))
}

async fn update_insurance(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateInsuranceRequest>,
) -> Result<Json<Insurance>, AppError> {
    let controller = InsuranceController::new(state.pool.clone());
    let insurance = controller.update(id, request).await?;
    Ok(Json(insurance))
}

async fn delete_insurance(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeletedResponse<Insurance>>, AppError> {
    let controller = InsuranceController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
