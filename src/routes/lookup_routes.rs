//! Rutas genéricas de tablas de definición
//!
//! Un solo router parametrizado por descriptor sirve a las 27 tablas.
//! Lectura para cualquier usuario autenticado; escritura solo admin.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};

use crate::controllers::lookup_controller::LookupController;
use crate::middleware::auth::admin_only;
use crate::models::common::DeletedResponse;
use crate::models::lookup::{
    CreateLookupRequest, Lookup, LookupResource, UpdateLookupRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_lookup_router(resource: &'static LookupResource) -> Router<AppState> {
    let writes = Router::new()
        .route("/", post(create_entry))
        .route("/:id", put(update_entry))
        .route("/:id", delete(delete_entry))
        .route_layer(middleware::from_fn(admin_only));

    Router::new()
        .route("/", get(list_entries))
        .route("/:id", get(get_entry))
        .merge(writes)
        .layer(Extension(resource))
}

async fn list_entries(
    State(state): State<AppState>,
    Extension(resource): Extension<&'static LookupResource>,
) -> Result<Json<Vec<Lookup>>, AppError> {
    let controller = LookupController::new(state.pool.clone(), resource);
    let entries = controller.list().await?;
    Ok(Json(entries))
}

async fn get_entry(
    State(state): State<AppState>,
    Extension(resource): Extension<&'static LookupResource>,
    Path(id): Path<i32>,
) -> Result<Json<Lookup>, AppError> {
    let controller = LookupController::new(state.pool.clone(), resource);
    let entry = controller.get_by_id(id).await?;
    Ok(Json(entry))
}

async fn create_entry(
    State(state): State<AppState>,
    Extension(resource): Extension<&'static LookupResource>,
    Json(request): Json<CreateLookupRequest>,
) -> Result<(StatusCode, Json<Lookup>), AppError> {
    let controller = LookupController::new(state.pool.clone(), resource);
    let entry = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

async fn update_entry(
    State(state): State<AppState>,
    Extension(resource): Extension<&'static LookupResource>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateLookupRequest>,
) -> Result<Json<Lookup>, AppError> {
    let controller = LookupController::new(state.pool.clone(), resource);
    let entry = controller.update(id, request).await?;
    Ok(Json(entry))
}

async fn delete_entry(
    State(state): State<AppState>,
    Extension(resource): Extension<&'static LookupResource>,
    Path(id): Path<i32>,
) -> Result<Json<DeletedResponse<Lookup>>, AppError> {
    let controller = LookupController::new(state.pool.clone(), resource);
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
