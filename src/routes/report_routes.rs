//! Rutas de informes
//!
//! Los agregados se calculan al vuelo; los informes guardados son un CRUD
//! normal. Todas las rutas requieren autenticación pero no rol de admin.
//! Las rutas estáticas de agregados se declaran antes de `/:id`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::report_controller::ReportController;
use crate::models::common::DeletedResponse;
use crate::models::report::{
    ActiveVehicleCount, AggregateReport, CreateReportRequest, RentalCountByClient, Report,
    UpdateReportRequest, VehicleInMaintenance,
};
use crate::models::vehicle::Vehicle;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reports))
        .route("/", post(create_report))
        .route("/vehicle_list", get(vehicle_list_report))
        .route("/active_vehicle_count", get(active_vehicle_count_report))
        .route("/rental_count_by_client", get(rental_count_by_client_report))
        .route("/vehicles_in_maintenance", get(vehicles_in_maintenance_report))
        .route("/:id", get(get_report))
        .route("/:id", put(update_report))
        .route("/:id", delete(delete_report))
}

async fn list_reports(State(state): State<AppState>) -> Result<Json<Vec<Report>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let reports = controller.list().await?;
    Ok(Json(reports))
}

async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Report>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let report = controller.get_by_id(id).await?;
    Ok(Json(report))
}

async fn create_report(
    State(state): State<AppState>,
    Json(request): Json<CreateReportRequest>,
) -> Result<(StatusCode, Json<Report>), AppError> {
    let controller = ReportController::new(state.pool.clone());
    let report = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(report)))
}

async fn update_report(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateReportRequest>,
) -> Result<Json<Report>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let report = controller.update(id, request).await?;
    Ok(Json(report))
}

async fn delete_report(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeletedResponse<Report>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}

async fn vehicle_list_report(
    State(state): State<AppState>,
) -> Result<Json<AggregateReport<Vec<Vehicle>>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let report = controller.vehicle_list().await?;
    Ok(Json(report))
}

async fn active_vehicle_count_report(
    State(state): State<AppState>,
) -> Result<Json<AggregateReport<ActiveVehicleCount>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let report = controller.active_vehicle_count().await?;
    Ok(Json(report))
}

async fn rental_count_by_client_report(
    State(state): State<AppState>,
) -> Result<Json<AggregateReport<Vec<RentalCountByClient>>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let report = controller.rental_count_by_client().await?;
    Ok(Json(report))
}

async fn vehicles_in_maintenance_report(
    State(state): State<AppState>,
) -> Result<Json<AggregateReport<Vec<VehicleInMaintenance>>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let report = controller.vehicles_in_maintenance().await?;
    Ok(Json(report))
}
