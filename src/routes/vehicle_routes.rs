//! Rutas de vehículos, incluida la importación masiva desde Excel
//!
//! Lectura para cualquier usuario autenticado; escritura e importación
//! solo admin. La subida acepta un único campo multipart `file` (xlsx/xls,
//! máximo 10 MB).

use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, Query, State},
    http::{header, StatusCode},
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::controllers::vehicle_import_controller::{ImportSummary, VehicleImportController};
use crate::middleware::auth::admin_only;
use crate::models::common::{DeletedResponse, Paginated};
use crate::models::vehicle::{CreateVehicleRequest, UpdateVehicleRequest, Vehicle, VehicleFilters};
use crate::state::AppState;
use crate::utils::errors::AppError;

const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn create_vehicle_router() -> Router<AppState> {
    let writes = Router::new()
        .route("/", post(create_vehicle))
        .route("/:id", put(update_vehicle))
        .route("/:id", delete(delete_vehicle))
        .route_layer(middleware::from_fn(admin_only));

    let import = Router::new()
        .route("/import/template", get(download_template))
        .route("/import", post(import_vehicles))
        .route("/import/errors/report", post(error_report))
        .route_layer(middleware::from_fn(admin_only))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES));

    Router::new()
        .route("/", get(list_vehicles))
        .route("/:id", get(get_vehicle))
        .merge(writes)
        .merge(import)
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(filters): Query<VehicleFilters>,
) -> Result<Json<Paginated<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vehicle>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let vehicle = controller.get_by_id(id).await?;
    Ok(Json(vehicle))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<Vehicle>), AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let vehicle = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(vehicle)))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<Vehicle>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let vehicle = controller.update(id, request).await?;
    Ok(Json(vehicle))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeletedResponse<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}

async fn download_template() -> Result<impl IntoResponse, AppError> {
    let bytes = VehicleImportController::download_template()?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            ),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"vehicle_import_template.xlsx\"",
            ),
        ],
        bytes,
    ))
}

async fn error_report(
    Json(errors): Json<Vec<crate::services::excel_service::RowError>>,
) -> Result<impl IntoResponse, AppError> {
    let bytes = VehicleImportController::error_report(&errors)?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            ),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"vehicle_import_errors.xlsx\"",
            ),
        ],
        bytes,
    ))
}

async fn import_vehicles(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ImportSummary>, AppError> {
    let mut file_bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_lowercase();
        if !filename.ends_with(".xlsx") && !filename.ends_with(".xls") {
            return Err(AppError::BadRequest(
                "Only .xlsx and .xls files are accepted".to_string(),
            ));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Could not read upload: {}", e)))?;
        file_bytes = Some(bytes.to_vec());
    }

    let file_bytes = file_bytes
        .ok_or_else(|| AppError::BadRequest("Multipart field 'file' is required".to_string()))?;

    let controller = VehicleImportController::new(state.pool.clone());
    let summary = controller.import(&file_bytes).await?;

    Ok(Json(summary))
}
