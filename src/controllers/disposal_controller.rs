//! Controlador de bajas de vehículos

use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::models::common::DeletedResponse;
use crate::models::disposal::{CreateDisposalRequest, DisposalRecord};
use crate::repositories::disposal_repository::DisposalRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct DisposalController {
    repository: DisposalRepository,
}

impl DisposalController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DisposalRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<DisposalRecord>, AppError> {
        self.repository.list_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<DisposalRecord, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Disposal record"))
    }

    pub async fn create(&self, request: CreateDisposalRequest) -> Result<DisposalRecord, AppError> {
        request.validate()?;

        let record = self.repository.create(&request).await?;

        info!(
            "✅ Disposal record created: vehicle {} ({}) (id {})",
            record.vehicle_id, record.disposal_type, record.id
        );

        Ok(record)
    }

    pub async fn update(
        &self,
        id: i32,
        request: CreateDisposalRequest,
    ) -> Result<DisposalRecord, AppError> {
        request.validate()?;

        self.repository
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("Disposal record"))
    }

    pub async fn delete(&self, id: i32) -> Result<DeletedResponse<DisposalRecord>, AppError> {
        let record = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found_error("Disposal record"))?;

        info!("🗑️ Disposal record deleted: id {}", id);

        Ok(DeletedResponse::new("Disposal record", record))
    }
}
