//! Rutas de proveedores
//!
//! Todas las operaciones están abiertas a cualquier usuario autenticado;
//! es el único recurso operacional sin puerta de admin en escritura.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::supplier_controller::{SupplierController, SupplierDeleteResponse};
use crate::models::common::Paginated;
use crate::models::supplier::{
    CreateSupplierRequest, Supplier, SupplierFilters, SupplierSearchQuery, UpdateSupplierRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_supplier_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_suppliers))
        .route("/", post(create_supplier))
        .route("/search", get(search_suppliers))
        .route("/:id", get(get_supplier))
        .route("/:id", put(update_supplier))
        .route("/:id", delete(delete_supplier))
}

async fn list_suppliers(
    State(state): State<AppState>,
    Query(filters): Query<SupplierFilters>,
) -> Result<Json<Paginated<Supplier>>, AppError> {
    let controller = SupplierController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn search_suppliers(
    State(state): State<AppState>,
    Query(query): Query<SupplierSearchQuery>,
) -> Result<Json<Vec<Supplier>>, AppError> {
    let controller = SupplierController::new(state.pool.clone());
    let suppliers = controller.search(query).await?;
    Ok(Json(suppliers))
}

async fn get_supplier(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Supplier>, AppError> {
    let controller = SupplierController::new(state.pool.clone());
    let supplier = controller.get_by_id(id).await?;
    Ok(Json(supplier))
}

async fn create_supplier(
    State(state): State<AppState>,
    Json(request): Json<CreateSupplierRequest>,
) -> Result<(StatusCode, Json<Supplier>), AppError> {
    let controller = SupplierController::new(state.pool.clone());
    let supplier = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(supplier)))
}

async fn update_supplier(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateSupplierRequest>,
) -> Result<Json<Supplier>, AppError> {
    let controller = SupplierController::new(state.pool.clone());
    let supplier = controller.update(id, request).await?;
    Ok(Json(supplier))
}

async fn delete_supplier(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<SupplierDeleteResponse>, AppError> {
    let controller = SupplierController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
