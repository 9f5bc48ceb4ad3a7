//! Modelo de User y requests de autenticación
//!
//! El hash de la contraseña nunca se serializa hacia la API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Fila completa de users (uso interno, incluye el hash)
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Response de usuario para la API (sin hash)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Request de registro
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50, message = "username must have 3-50 characters"))]
    pub username: String,

    #[validate(length(min = 8, max = 100, message = "password must have at least 8 characters"))]
    pub password: String,

    pub role: Option<String>,
}

/// Request de login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Request para actualizar usuario (username y rol, nunca la contraseña)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 3, max = 50, message = "username must have 3-50 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 50, message = "role is required"))]
    pub role: String,
}
