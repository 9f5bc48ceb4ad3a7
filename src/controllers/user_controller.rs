//! Controlador de usuarios y autenticación
//!
//! El login devuelve el token JWT y el usuario; el fallo de credenciales
//! responde siempre el mismo mensaje, exista o no el usuario.

use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::models::common::DeletedResponse;
use crate::models::user::{LoginRequest, RegisterRequest, UpdateUserRequest, UserResponse};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};
use crate::utils::jwt::{generate_token, JwtConfig};

/// Respuesta de login/registro: token + usuario
#[derive(Debug, serde::Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

pub struct UserController {
    repository: UserRepository,
    jwt_config: JwtConfig,
}

impl UserController {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            repository: UserRepository::new(pool),
            jwt_config: JwtConfig::from(config),
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, AppError> {
        request.validate()?;

        if self.repository.username_exists(&request.username, None).await? {
            return Err(conflict_error("User", "username", &request.username));
        }

        let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Hash(e.to_string()))?;

        let role = request.role.as_deref().unwrap_or("user");
        let user = self
            .repository
            .create(&request.username, &password_hash, role)
            .await?;

        info!("✅ User registered: {} (role {})", user.username, user.role);

        let token = generate_token(user.id, &user.username, &user.role, &self.jwt_config)?;

        Ok(AuthResponse { token, user })
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AppError> {
        request.validate()?;

        let Some(user) = self.repository.find_by_username(&request.username).await? else {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        };

        let valid = bcrypt::verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(e.to_string()))?;
        if !valid {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        info!("🔑 User logged in: {}", user.username);

        let token = generate_token(user.id, &user.username, &user.role, &self.jwt_config)?;

        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }

    pub async fn me(&self, user_id: i32) -> Result<UserResponse, AppError> {
        self.repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| not_found_error("User"))
    }

    pub async fn list(&self) -> Result<Vec<UserResponse>, AppError> {
        self.repository.list_all().await
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, AppError> {
        request.validate()?;

        if self
            .repository
            .username_exists(&request.username, Some(id))
            .await?
        {
            return Err(conflict_error("User", "username", &request.username));
        }

        self.repository
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("User"))
    }

    pub async fn delete(&self, id: i32) -> Result<DeletedResponse<UserResponse>, AppError> {
        let user = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found_error("User"))?;

        info!("🗑️ User deleted: {} (id {})", user.username, id);

        Ok(DeletedResponse::new("User", user))
    }
}
