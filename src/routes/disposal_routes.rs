//! Rutas de bajas de vehículos: lectura autenticada, escritura solo admin

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::disposal_controller::DisposalController;
use crate::middleware::auth::admin_only;
use crate::models::common::DeletedResponse;
use crate::models::disposal::{CreateDisposalRequest, DisposalRecord};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_disposal_router() -> Router<AppState> {
    let writes = Router::new()
        .route("/", post(create_record))
        .route("/:id", put(update_record))
        .route("/:id", delete(delete_record))
        .route_layer(middleware::from_fn(admin_only));

    Router::new()
        .route("/", get(list_records))
        .route("/:id", get(get_record))
        .merge(writes)
}

async fn list_records(
    State(state): State<AppState>,
) -> Result<Json<Vec<DisposalRecord>>, AppError> {
    let controller = DisposalController::new(state.pool.clone());
    let records = controller.list().await?;
    Ok(Json(records))
}

async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DisposalRecord>, AppError> {
    let controller = DisposalController::new(state.pool.clone());
    let record = controller.get_by_id(id).await?;
    Ok(Json(record))
}

async fn create_record(
    State(state): State<AppState>,
    Json(request): Json<CreateDisposalRequest>,
) -> Result<(StatusCode, Json<DisposalRecord>), AppError> {
    let controller = DisposalController::new(state.pool.clone());
    let record = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CreateDisposalRequest>,
) -> Result<Json<DisposalRecord>, AppError> {
    let controller = DisposalController::new(state.pool.clone());
    let record = controller.update(id, request).await?;
    Ok(Json(record))
}

async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeletedResponse<DisposalRecord>>, AppError> {
    let controller = DisposalController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
