//! Controlador de empresas cliente

use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::models::client::{ClientCompany, CreateClientRequest, UpdateClientRequest};
use crate::models::common::DeletedResponse;
use crate::repositories::client_repository::ClientRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct ClientController {
    repository: ClientRepository,
}

impl ClientController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClientRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<ClientCompany>, AppError> {
        self.repository.list_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<ClientCompany, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Client"))
    }

    pub async fn create(&self, request: CreateClientRequest) -> Result<ClientCompany, AppError> {
        request.validate()?;

        let client = self.repository.create(&request).await?;

        info!("✅ Client created: {} (id {})", client.company_name, client.id);

        Ok(client)
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateClientRequest,
    ) -> Result<ClientCompany, AppError> {
        request.validate()?;

        self.repository
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("Client"))
    }

    pub async fn delete(&self, id: i32) -> Result<DeletedResponse<ClientCompany>, AppError> {
        let client = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found_error("Client"))?;

        info!("🗑️ Client deleted: {} (id {})", client.company_name, id);

        Ok(DeletedResponse::new("Client", client))
    }
}
