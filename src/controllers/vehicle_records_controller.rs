//! Controladores de registros asociados a vehículos: inspecciones,
//! neumáticos y servicios.

use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::models::common::DeletedResponse;
use crate::models::vehicle_records::{
    CreateInspectionRequest, CreateServiceRequest, CreateTireRequest, VehicleInspection,
    VehicleService, VehicleTire,
};
use crate::repositories::vehicle_records_repository::{
    InspectionRepository, ServiceRepository, TireRepository,
};
use crate::utils::errors::{not_found_error, AppError};

// --------------------------------------------------------------- inspecciones

pub struct InspectionController {
    repository: InspectionRepository,
}

impl InspectionController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: InspectionRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<VehicleInspection>, AppError> {
        self.repository.list_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<VehicleInspection, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Inspection"))
    }

    pub async fn create(
        &self,
        request: CreateInspectionRequest,
    ) -> Result<VehicleInspection, AppError> {
        request.validate()?;

        let inspection = self.repository.create(&request).await?;

        info!(
            "✅ Inspection created: vehicle {} (id {})",
            inspection.vehicle_id, inspection.id
        );

        Ok(inspection)
    }

    pub async fn update(
        &self,
        id: i32,
        request: CreateInspectionRequest,
    ) -> Result<VehicleInspection, AppError> {
        request.validate()?;

        self.repository
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("Inspection"))
    }

    pub async fn delete(&self, id: i32) -> Result<DeletedResponse<VehicleInspection>, AppError> {
        let inspection = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found_error("Inspection"))?;

        info!("🗑️ Inspection deleted: id {}", id);

        Ok(DeletedResponse::new("Inspection", inspection))
    }
}

// ----------------------------------------------------------------- neumáticos

pub struct TireController {
    repository: TireRepository,
}

impl TireController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TireRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<VehicleTire>, AppError> {
        self.repository.list_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<VehicleTire, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Tire"))
    }

    pub async fn create(&self, request: CreateTireRequest) -> Result<VehicleTire, AppError> {
        request.validate()?;

        let tire = self.repository.create(&request).await?;

        info!("✅ Tire created: vehicle {} (id {})", tire.vehicle_id, tire.id);

        Ok(tire)
    }

    pub async fn update(
        &self,
        id: i32,
        request: CreateTireRequest,
    ) -> Result<VehicleTire, AppError> {
        request.validate()?;

        self.repository
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("Tire"))
    }

    pub async fn delete(&self, id: i32) -> Result<DeletedResponse<VehicleTire>, AppError> {
        let tire = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found_error("Tire"))?;

        info!("🗑️ Tire deleted: id {}", id);

        Ok(DeletedResponse::new("Tire", tire))
    }
}

// ------------------------------------------------------------------ servicios

pub struct ServiceController {
    repository: ServiceRepository,
}

impl ServiceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ServiceRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<VehicleService>, AppError> {
        self.repository.list_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<VehicleService, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Service"))
    }

    pub async fn create(&self, request: CreateServiceRequest) -> Result<VehicleService, AppError> {
        request.validate()?;

        let service = self.repository.create(&request).await?;

        info!(
            "✅ Service created: vehicle {} (id {})",
            service.vehicle_id, service.id
        );

        Ok(service)
    }

    pub async fn update(
        &self,
        id: i32,
        request: CreateServiceRequest,
    ) -> Result<VehicleService, AppError> {
        request.validate()?;

        self.repository
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("Service"))
    }

    pub async fn delete(&self, id: i32) -> Result<DeletedResponse<VehicleService>, AppError> {
        let service = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found_error("Service"))?;

        info!("🗑️ Service deleted: id {}", id);

        Ok(DeletedResponse::new("Service", service))
    }
}
