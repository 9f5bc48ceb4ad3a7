//! Controlador de vehículos
//!
//! Antes de insertar o actualizar se comprueba la unicidad de matrícula
//! y número de chasis; una violación responde 400 con `{error}`.

use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::models::common::{DeletedResponse, Paginated};
use crate::models::vehicle::{CreateVehicleRequest, UpdateVehicleRequest, Vehicle, VehicleFilters};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn list(&self, filters: VehicleFilters) -> Result<Paginated<Vehicle>, AppError> {
        self.repository.list(&filters).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Vehicle, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle"))
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<Vehicle, AppError> {
        request.validate()?;
        self.check_uniqueness(&request, None).await?;

        let vehicle = self.repository.create(&request).await?;

        info!("✅ Vehicle created: {} (id {})", vehicle.plate_number, vehicle.id);

        Ok(vehicle)
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateVehicleRequest,
    ) -> Result<Vehicle, AppError> {
        request.validate()?;
        self.check_uniqueness(&request, Some(id)).await?;

        self.repository
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("Vehicle"))
    }

    pub async fn delete(&self, id: i32) -> Result<DeletedResponse<Vehicle>, AppError> {
        let vehicle = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle"))?;

        info!("🗑️ Vehicle deleted: {} (id {})", vehicle.plate_number, id);

        Ok(DeletedResponse::new("Vehicle", vehicle))
    }

    async fn check_uniqueness(
        &self,
        request: &CreateVehicleRequest,
        exclude_id: Option<i32>,
    ) -> Result<(), AppError> {
        if self
            .repository
            .plate_number_exists(&request.plate_number, exclude_id)
            .await?
        {
            return Err(conflict_error("Vehicle", "plate number", &request.plate_number));
        }

        if let Some(ref chassis) = request.chassis_number {
            if self
                .repository
                .chassis_number_exists(chassis, exclude_id)
                .await?
            {
                return Err(conflict_error("Vehicle", "chassis number", chassis));
            }
        }

        Ok(())
    }
}
