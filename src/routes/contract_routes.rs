//! Rutas de contratos de compra: lectura autenticada, escritura solo admin

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::contract_controller::ContractController;
use crate::middleware::auth::admin_only;
use crate::models::common::DeletedResponse;
use crate::models::contract::{CreateContractRequest, PurchaseContract, UpdateContractRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_contract_router() -> Router<AppState> {
    let writes = Router::new()
        .route("/", post(create_contract))
        .route("/:id", put(update_contract))
        .route("/:id", delete(delete_contract))
        .route_layer(middleware::from_fn(admin_only));

    Router::new()
        .route("/", get(list_contracts))
        .route("/:id", get(get_contract))
        .merge(writes)
}

async fn list_contracts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PurchaseContract>>, AppError> {
    let controller = ContractController::new(state.pool.clone());
    let contracts = controller.list().await?;
    Ok(Json(contracts))
}

async fn get_contract(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PurchaseContract>, AppError> {
    let controller = ContractController::new(state.pool.clone());
    let contract = controller.get_by_id(id).await?;
    Ok(Json(contract))
}

async fn create_contract(
    State(state): State<AppState>,
    Json(request): Json<CreateContractRequest>,
) -> Result<(StatusCode, Json<PurchaseContract>), AppError> {
    let controller = ContractController::new(state.pool.clone());
    let contract = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(contract)))
}

async fn update_contract(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateContractRequest>,
) -> Result<Json<PurchaseContract>, AppError> {
    let controller = ContractController::new(state.pool.clone());
    let contract = controller.update(id, request).await?;
    Ok(Json(contract))
}

async fn delete_contract(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeletedResponse<PurchaseContract>>, AppError> {
    let controller = ContractController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
