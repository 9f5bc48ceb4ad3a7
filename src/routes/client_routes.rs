//! Rutas de empresas cliente: lectura autenticada, escritura solo admin

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::client_controller::ClientController;
use crate::middleware::auth::admin_only;
use crate::models::client::{ClientCompany, CreateClientRequest, UpdateClientRequest};
use crate::models::common::DeletedResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_client_router() -> Router<AppState> {
    let writes = Router::new()
        .route("/", post(create_client))
        .route("/:id", put(update_client))
        .route("/:id", delete(delete_client))
        .route_layer(middleware::from_fn(admin_only));

    Router::new()
        .route("/", get(list_clients))
        .route("/:id", get(get_client))
        .merge(writes)
}

async fn list_clients(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClientCompany>>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let clients = controller.list().await?;
    Ok(Json(clients))
}

async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ClientCompany>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let client = controller.get_by_id(id).await?;
    Ok(Json(client))
}

async fn create_client(
    State(state): State<AppState>,
    Json(request): Json<CreateClientRequest>,
) -> Result<(StatusCode, Json<ClientCompany>), AppError> {
    let controller = ClientController::new(state.pool.clone());
    let client = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateClientRequest>,
) -> Result<Json<ClientCompany>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let client = controller.update(id, request).await?;
    Ok(Json(client))
}

async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeletedResponse<ClientCompany>>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
