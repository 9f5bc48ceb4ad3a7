//! Middleware de autenticación JWT y autorización por roles
//!
//! La autenticación extrae la credencial del header `Authorization: Bearer`
//! o de la cookie `token`, verifica firma y expiración contra el secreto
//! del servidor e inyecta la identidad decodificada en las extensions de
//! la request. La autorización se ejecuta estrictamente después: si no hay
//! identidad en la request la respuesta es 403, nunca se confía en una
//! request sin 401 previo.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{
    state::AppState,
    utils::errors::AppError,
    utils::jwt::{extract_token_from_cookie, extract_token_from_header, verify_token},
};

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i32,
    pub username: String,
    pub role: String,
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Header Authorization primero, cookie `token` como alternativa
    let bearer = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(extract_token_from_header);

    let cookie = request
        .headers()
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(extract_token_from_cookie);

    let token = bearer
        .or(cookie)
        .ok_or_else(|| AppError::Unauthorized("Token required".to_string()))?;

    let claims = verify_token(token, &state.jwt_config())?;

    let user_id: i32 = claims
        .sub
        .parse()
        .map_err(|_| AppError::Jwt("invalid subject claim".to_string()))?;

    let authenticated_user = AuthenticatedUser {
        user_id,
        username: claims.username,
        role: claims.role,
    };

    request.extensions_mut().insert(authenticated_user);

    Ok(next.run(request).await)
}

/// Verificación de rol contra una allow-list.
/// Debe ejecutarse después de `auth_middleware`: la ausencia de identidad
/// también es 403.
pub async fn check_roles(
    allowed: &[&str],
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<AuthenticatedUser>()
        .ok_or_else(|| AppError::Forbidden("Insufficient permission".to_string()))?;

    if !allowed.contains(&user.role.as_str()) {
        return Err(AppError::Forbidden("Insufficient permission".to_string()));
    }

    Ok(next.run(request).await)
}

/// Middleware para rutas que requieren rol admin
pub async fn admin_only(request: Request, next: Next) -> Result<Response, AppError> {
    check_roles(&["admin"], request, next).await
}
