//! Controlador de registros de mantenimiento

use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::models::common::DeletedResponse;
use crate::models::maintenance::{CreateMaintenanceRequest, MaintenanceRecord};
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct MaintenanceController {
    repository: MaintenanceRepository,
}

impl MaintenanceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MaintenanceRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<MaintenanceRecord>, AppError> {
        self.repository.list_all().await
    }

    pub async fn list_by_vehicle(
        &self,
        vehicle_id: i32,
    ) -> Result<Vec<MaintenanceRecord>, AppError> {
        self.repository.list_by_vehicle(vehicle_id).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<MaintenanceRecord, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Maintenance record"))
    }

    pub async fn create(
        &self,
        request: CreateMaintenanceRequest,
    ) -> Result<MaintenanceRecord, AppError> {
        request.validate()?;

        let record = self.repository.create(&request).await?;

        info!(
            "✅ Maintenance record created: vehicle {} (id {})",
            record.vehicle_id, record.id
        );

        Ok(record)
    }

    pub async fn update(
        &self,
        id: i32,
        request: CreateMaintenanceRequest,
    ) -> Result<MaintenanceRecord, AppError> {
        request.validate()?;

        self.repository
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("Maintenance record"))
    }

    pub async fn delete(&self, id: i32) -> Result<DeletedResponse<MaintenanceRecord>, AppError> {
        let record = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found_error("Maintenance record"))?;

        info!("🗑️ Maintenance record deleted: id {}", id);

        Ok(DeletedResponse::new("Maintenance record", record))
    }
}
