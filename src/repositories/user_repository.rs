//! Repositorio de usuarios
//!
//! Las consultas hacia la API devuelven `UserResponse` (sin hash); la fila
//! completa con `password_hash` solo sale de `find_by_username` para el login.

use sqlx::PgPool;

use crate::models::user::{UpdateUserRequest, User, UserResponse};
use crate::utils::errors::AppError;

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = sqlx::query_as::<_, UserResponse>(
            "SELECT id, username, role, created_at FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<UserResponse>, AppError> {
        let user = sqlx::query_as::<_, UserResponse>(
            "SELECT id, username, role, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, role, created_at FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn username_exists(
        &self,
        username: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, AppError> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1 AND ($2::int IS NULL OR id != $2))",
        )
        .bind(username)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists.0)
    }

    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<UserResponse, AppError> {
        let user = sqlx::query_as::<_, UserResponse>(
            "INSERT INTO users (username, password_hash, role) VALUES ($1, $2, $3) \
             RETURNING id, username, role, created_at",
        )
        .bind(username)
        .bind(password_hash)
        .bind(role)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Actualiza username y rol; la contraseña nunca cambia por esta vía
    pub async fn update(
        &self,
        id: i32,
        request: &UpdateUserRequest,
    ) -> Result<Option<UserResponse>, AppError> {
        let user = sqlx::query_as::<_, UserResponse>(
            "UPDATE users SET username = $2, role = $3 WHERE id = $1 \
             RETURNING id, username, role, created_at",
        )
        .bind(id)
        .bind(&request.username)
        .bind(&request.role)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn delete(&self, id: i32) -> Result<Option<UserResponse>, AppError> {
        let user = sqlx::query_as::<_, UserResponse>(
            "DELETE FROM users WHERE id = $1 RETURNING id, username, role, created_at",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
