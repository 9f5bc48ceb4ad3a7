//! Rutas de inspecciones, neumáticos y servicios de vehículos.
//! Lectura autenticada, escritura solo admin; los tres routers comparten
//! el mismo esquema CRUD.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::vehicle_records_controller::{
    InspectionController, ServiceController, TireController,
};
use crate::middleware::auth::admin_only;
use crate::models::common::DeletedResponse;
use crate::models::vehicle_records::{
    CreateInspectionRequest, CreateServiceRequest, CreateTireRequest, VehicleInspection,
    VehicleService, VehicleTire,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_inspection_router() -> Router<AppState> {
    let writes = Router::new()
        .route("/", post(create_inspection))
        .route("/:id", put(update_inspection))
        .route("/:id", delete(delete_inspection))
        .route_layer(middleware::from_fn(admin_only));

    Router::new()
        .route("/", get(list_inspections))
        .route("/:id", get(get_inspection))
        .merge(writes)
}

pub fn create_tire_router() -> Router<AppState> {
    let writes = Router::new()
        .route("/", post(create_tire))
        .route("/:id", put(update_tire))
        .route("/:id", delete(delete_tire))
        .route_layer(middleware::from_fn(admin_only));

    Router::new()
        .route("/", get(list_tires))
        .route("/:id", get(get_tire))
        .merge(writes)
}

pub fn create_service_router() -> Router<AppState> {
    let writes = Router::new()
        .route("/", post(create_service))
        .route("/:id", put(update_service))
        .route("/:id", delete(delete_service))
        .route_layer(middleware::from_fn(admin_only));

    Router::new()
        .route("/", get(list_services))
        .route("/:id", get(get_service))
        .merge(writes)
}

// --------------------------------------------------------------- inspecciones

async fn list_inspections(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleInspection>>, AppError> {
    let controller = InspectionController::new(state.pool.clone());
    let inspections = controller.list().await?;
    Ok(Json(inspections))
}

async fn get_inspection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<VehicleInspection>, AppError> {
    let controller = InspectionController::new(state.pool.clone());
    let inspection = controller.get_by_id(id).await?;
    Ok(Json(inspection))
}

async fn create_inspection(
    State(state): State<AppState>,
    Json(request): Json<CreateInspectionRequest>,
) -> Result<(StatusCode, Json<VehicleInspection>), AppError> {
    let controller = InspectionController::new(state.pool.clone());
    let inspection = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(inspection)))
}

async fn update_inspection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CreateInspectionRequest>,
) -> Result<Json<VehicleInspection>, AppError> {
    let controller = InspectionController::new(state.pool.clone());
    let inspection = controller.update(id, request).await?;
    Ok(Json(inspection))
}

async fn delete_inspection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeletedResponse<VehicleInspection>>, AppError> {
    let controller = InspectionController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}

// ----------------------------------------------------------------- neumáticos

async fn list_tires(State(state): State<AppState>) -> Result<Json<Vec<VehicleTire>>, AppError> {
    let controller = TireController::new(state.pool.clone());
    let tires = controller.list().await?;
    Ok(Json(tires))
}

async fn get_tire(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<VehicleTire>, AppError> {
    let controller = TireController::new(state.pool.clone());
    let tire = controller.get_by_id(id).await?;
    Ok(Json(tire))
}

async fn create_tire(
    State(state): State<AppState>,
    Json(request): Json<CreateTireRequest>,
) -> Result<(StatusCode, Json<VehicleTire>), AppError> {
    let controller = TireController::new(state.pool.clone());
    let tire = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(tire)))
}

async fn update_tire(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CreateTireRequest>,
) -> Result<Json<VehicleTire>, AppError> {
    let controller = TireController::new(state.pool.clone());
    let tire = controller.update(id, request).await?;
    Ok(Json(tire))
}

async fn delete_tire(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeletedResponse<VehicleTire>>, AppError> {
    let controller = TireController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}

// ------------------------------------------------------------------ servicios

async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleService>>, AppError> {
    let controller = ServiceController::new(state.pool.clone());
    let services = controller.list().await?;
    Ok(Json(services))
}

async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<VehicleService>, AppError> {
    let controller = ServiceController::new(state.pool.clone());
    let service = controller.get_by_id(id).await?;
    Ok(Json(service))
}

async fn create_service(
    State(state): State<AppState>,
    Json(request): Json<CreateServiceRequest>,
) -> Result<(StatusCode, Json<VehicleService>), AppError> {
    let controller = ServiceController::new(state.pool.clone());
    let service = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(service)))
}

async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CreateServiceRequest>,
) -> Result<Json<VehicleService>, AppError> {
    let controller = ServiceController::new(state.pool.clone());
    let service = controller.update(id, request).await?;
    Ok(Json(service))
}

async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeletedResponse<VehicleService>>, AppError> {
    let controller = ServiceController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
