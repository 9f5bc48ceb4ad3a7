//! Controlador de pólizas de seguro

use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::models::common::DeletedResponse;
use crate::models::insurance::{CreateInsuranceRequest, Insurance, UpdateInsuranceRequest};
use crate::repositories::insurance_repository::InsuranceRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct InsuranceController {
    repository: InsuranceRepository,
}

impl InsuranceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: InsuranceRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<Insurance>, AppError> {
        self.repository.list_all().await
    }

    pub async fn list_by_vehicle(&self, vehicle_id: i32) -> Result<Vec<Insurance>, AppError> {
        self.repository.list_by_vehicle(vehicle_id).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Insurance, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Insurance"))
    }

    pub async fn create(&self, request: CreateInsuranceRequest) -> Result<Insurance, AppError> {
        request.validate()?;

        if let (Some(start), Some(end)) = (request.start_date, request.end_date) {
            if end < start {
                return Err(AppError::BadRequest(
                    "end_date must not be before start_date".to_string(),
                ));
            }
        }

        let insurance = self.repository.create(&request).await?;

        info!(
            "✅ Insurance created: vehicle {} (id {}, payment record: {})",
            insurance.vehicle_id, insurance.id, insurance.create_payment_record
        );

        Ok(insurance)
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateInsuranceRequest,
    ) -> Result<Insurance, AppError> {
        request.validate()?;

        self.repository
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("Insurance"))
    }

    pub async fn delete(&self, id: i32) -> Result<DeletedResponse<Insurance>, AppError> {
        let insurance = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found_error("Insurance"))?;

        info!("🗑️ Insurance deleted: id {}", id);

        Ok(DeletedResponse::new("Insurance", insurance))
    }
}
