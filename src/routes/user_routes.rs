//! Rutas de usuarios y autenticación
//!
//! Login y registro emiten el JWT por partida doble: en el body y como
//! cookie `token` HttpOnly, para clientes navegador. Logout expira la
//! cookie. El router público se monta fuera del middleware de auth.

use axum::{
    extract::{Path, State},
    http::{header::SET_COOKIE, StatusCode},
    middleware,
    response::{AppendHeaders, IntoResponse},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use serde_json::json;

use crate::controllers::user_controller::UserController;
use crate::middleware::auth::{admin_only, AuthenticatedUser};
use crate::models::common::DeletedResponse;
use crate::models::user::{LoginRequest, RegisterRequest, UpdateUserRequest, UserResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas accesibles sin token
pub fn create_public_user_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/logout", post(logout))
}

/// Rutas protegidas (montadas detrás del middleware de auth)
pub fn create_user_router() -> Router<AppState> {
    let admin = Router::new()
        .route("/", get(list_users))
        .route("/:id", put(update_user))
        .route("/:id", delete(delete_user))
        .route_layer(middleware::from_fn(admin_only));

    Router::new().route("/me", get(me)).merge(admin)
}

fn auth_cookie(token: &str, max_age: u64) -> String {
    format!(
        "token={}; HttpOnly; Path=/; Max-Age={}; SameSite=Lax",
        token, max_age
    )
}

async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let controller = UserController::new(state.pool.clone(), &state.config);
    let response = controller.register(request).await?;

    let cookie = auth_cookie(&response.token, state.config.jwt_expiration);

    Ok((
        StatusCode::CREATED,
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(response),
    ))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let controller = UserController::new(state.pool.clone(), &state.config);
    let response = controller.login(request).await?;

    let cookie = auth_cookie(&response.token, state.config.jwt_expiration);

    Ok((AppendHeaders([(SET_COOKIE, cookie)]), Json(response)))
}

async fn logout() -> impl IntoResponse {
    let cookie = "token=; HttpOnly; Path=/; Max-Age=0; SameSite=Lax".to_string();

    (
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(json!({ "message": "Logged out" })),
    )
}

async fn me(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<UserResponse>, AppError> {
    let controller = UserController::new(state.pool.clone(), &state.config);
    let response = controller.me(user.user_id).await?;
    Ok(Json(response))
}

async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, AppError> {
    let controller = UserController::new(state.pool.clone(), &state.config);
    let users = controller.list().await?;
    Ok(Json(users))
}

async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let controller = UserController::new(state.pool.clone(), &state.config);
    let user = controller.update(id, request).await?;
    Ok(Json(user))
}

async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeletedResponse<UserResponse>>, AppError> {
    let controller = UserController::new(state.pool.clone(), &state.config);
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
