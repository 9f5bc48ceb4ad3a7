//! Controlador de contratos de alquiler

use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::models::common::DeletedResponse;
use crate::models::rental::{CreateRentalRequest, Rental, UpdateRentalRequest};
use crate::repositories::rental_repository::RentalRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct RentalController {
    repository: RentalRepository,
}

impl RentalController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RentalRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<Rental>, AppError> {
        self.repository.list_all().await
    }

    pub async fn list_by_vehicle(&self, vehicle_id: i32) -> Result<Vec<Rental>, AppError> {
        self.repository.list_by_vehicle(vehicle_id).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Rental, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Rental"))
    }

    pub async fn create(&self, request: CreateRentalRequest) -> Result<Rental, AppError> {
        request.validate()?;

        if request.end_date < request.start_date {
            return Err(AppError::BadRequest(
                "end_date must not be before start_date".to_string(),
            ));
        }

        let rental = self.repository.create(&request).await?;

        info!(
            "✅ Rental created: vehicle {} -> client {} (id {})",
            rental.vehicle_id, rental.client_company_id, rental.id
        );

        Ok(rental)
    }

    pub async fn update(&self, id: i32, request: UpdateRentalRequest) -> Result<Rental, AppError> {
        request.validate()?;

        if request.end_date < request.start_date {
            return Err(AppError::BadRequest(
                "end_date must not be before start_date".to_string(),
            ));
        }

        self.repository
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("Rental"))
    }

    pub async fn delete(&self, id: i32) -> Result<DeletedResponse<Rental>, AppError> {
        let rental = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found_error("Rental"))?;

        info!("🗑️ Rental deleted: id {}", id);

        Ok(DeletedResponse::new("Rental", rental))
    }
}
