//! Repositorios de registros asociados a vehículos: inspecciones,
//! neumáticos y servicios.

use sqlx::PgPool;

use crate::models::vehicle_records::{
    CreateInspectionRequest, CreateServiceRequest, CreateTireRequest, VehicleInspection,
    VehicleService, VehicleTire,
};
use crate::utils::errors::AppError;

const INSPECTION_COLUMNS: &str =
    "id, vehicle_id, inspection_company_id, inspection_date, expiry_date, cost, notes, created_at";

const TIRE_COLUMNS: &str = "id, vehicle_id, tire_brand_id, tire_model_id, tire_position_id, \
    tire_condition_id, size, installed_at, km_at_install, notes, created_at";

const SERVICE_COLUMNS: &str = "id, vehicle_id, service_type_id, service_company_id, \
    service_date, km, cost, notes, created_at";

// --------------------------------------------------------------- inspecciones

pub struct InspectionRepository {
    pool: PgPool,
}

impl InspectionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<VehicleInspection>, AppError> {
        let query = format!(
            "SELECT {} FROM vehicle_inspections ORDER BY inspection_date DESC, id DESC",
            INSPECTION_COLUMNS
        );

        let rows = sqlx::query_as::<_, VehicleInspection>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<VehicleInspection>, AppError> {
        let query = format!(
            "SELECT {} FROM vehicle_inspections WHERE id = $1",
            INSPECTION_COLUMNS
        );

        let row = sqlx::query_as::<_, VehicleInspection>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn create(
        &self,
        request: &CreateInspectionRequest,
    ) -> Result<VehicleInspection, AppError> {
        let query = format!(
            "INSERT INTO vehicle_inspections (vehicle_id, inspection_company_id, \
             inspection_date, expiry_date, cost, notes) VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {}",
            INSPECTION_COLUMNS
        );

        let row = sqlx::query_as::<_, VehicleInspection>(&query)
            .bind(request.vehicle_id)
            .bind(request.inspection_company_id)
            .bind(request.inspection_date)
            .bind(request.expiry_date)
            .bind(request.cost)
            .bind(&request.notes)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn update(
        &self,
        id: i32,
        request: &CreateInspectionRequest,
    ) -> Result<Option<VehicleInspection>, AppError> {
        let query = format!(
            "UPDATE vehicle_inspections SET vehicle_id = $2, inspection_company_id = $3, \
             inspection_date = $4, expiry_date = $5, cost = $6, notes = $7 \
             WHERE id = $1 RETURNING {}",
            INSPECTION_COLUMNS
        );

        let row = sqlx::query_as::<_, VehicleInspection>(&query)
            .bind(id)
            .bind(request.vehicle_id)
            .bind(request.inspection_company_id)
            .bind(request.inspection_date)
            .bind(request.expiry_date)
            .bind(request.cost)
            .bind(&request.notes)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn delete(&self, id: i32) -> Result<Option<VehicleInspection>, AppError> {
        let query = format!(
            "DELETE FROM vehicle_inspections WHERE id = $1 RETURNING {}",
            INSPECTION_COLUMNS
        );

        let row = sqlx::query_as::<_, VehicleInspection>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }
}

// ----------------------------------------------------------------- neumáticos

pub struct TireRepository {
    pool: PgPool,
}

impl TireRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<VehicleTire>, AppError> {
        let query = format!("SELECT {} FROM vehicle_tires ORDER BY id DESC", TIRE_COLUMNS);

        let rows = sqlx::query_as::<_, VehicleTire>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<VehicleTire>, AppError> {
        let query = format!("SELECT {} FROM vehicle_tires WHERE id = $1", TIRE_COLUMNS);

        let row = sqlx::query_as::<_, VehicleTire>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn create(&self, request: &CreateTireRequest) -> Result<VehicleTire, AppError> {
        let query = format!(
            "INSERT INTO vehicle_tires (vehicle_id, tire_brand_id, tire_model_id, \
             tire_position_id, tire_condition_id, size, installed_at, km_at_install, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING {}",
            TIRE_COLUMNS
        );

        let row = sqlx::query_as::<_, VehicleTire>(&query)
            .bind(request.vehicle_id)
            .bind(request.tire_brand_id)
            .bind(request.tire_model_id)
            .bind(request.tire_position_id)
            .bind(request.tire_condition_id)
            .bind(&request.size)
            .bind(request.installed_at)
            .bind(request.km_at_install)
            .bind(&request.notes)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn update(
        &self,
        id: i32,
        request: &CreateTireRequest,
    ) -> Result<Option<VehicleTire>, AppError> {
        let query = format!(
            "UPDATE vehicle_tires SET vehicle_id = $2, tire_brand_id = $3, tire_model_id = $4, \
             tire_position_id = $5, tire_condition_id = $6, size = $7, installed_at = $8, \
             km_at_install = $9, notes = $10 WHERE id = $1 RETURNING {}",
            TIRE_COLUMNS
        );

        let row = sqlx::query_as::<_, VehicleTire>(&query)
            .bind(id)
            .bind(request.vehicle_id)
            .bind(request.tire_brand_id)
            .bind(request.tire_model_id)
            .bind(request.tire_position_id)
            .bind(request.tire_condition_id)
            .bind(&request.size)
            .bind(request.installed_at)
            .bind(request.km_at_install)
            .bind(&request.notes)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn delete(&self, id: i32) -> Result<Option<VehicleTire>, AppError> {
        let query = format!(
            "DELETE FROM vehicle_tires WHERE id = $1 RETURNING {}",
            TIRE_COLUMNS
        );

        let row = sqlx::query_as::<_, VehicleTire>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }
}

// ------------------------------------------------------------------ servicios

pub struct ServiceRepository {
    pool: PgPool,
}

impl ServiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<VehicleService>, AppError> {
        let query = format!(
            "SELECT {} FROM vehicle_services ORDER BY service_date DESC, id DESC",
            SERVICE_COLUMNS
        );

        let rows = sqlx::query_as::<_, VehicleService>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<VehicleService>, AppError> {
        let query = format!(
            "SELECT {} FROM vehicle_services WHERE id = $1",
            SERVICE_COLUMNS
        );

        let row = sqlx::query_as::<_, VehicleService>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn create(&self, request: &CreateServiceRequest) -> Result<VehicleService, AppError> {
        let query = format!(
            "INSERT INTO vehicle_services (vehicle_id, service_type_id, service_company_id, \
             service_date, km, cost, notes) VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {}",
            SERVICE_COLUMNS
        );

        let row = sqlx::query_as::<_, VehicleService>(&query)
            .bind(request.vehicle_id)
            .bind(request.service_type_id)
            .bind(request.service_company_id)
            .bind(request.service_date)
            .bind(request.km)
            .bind(request.cost)
            .bind(&request.notes)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn update(
        &self,
        id: i32,
        request: &CreateServiceRequest,
    ) -> Result<Option<VehicleService>, AppError> {
        let query = format!(
            "UPDATE vehicle_services SET vehicle_id = $2, service_type_id = $3, \
             service_company_id = $4, service_date = $5, km = $6, cost = $7, notes = $8 \
             WHERE id = $1 RETURNING {}",
            SERVICE_COLUMNS
        );

        let row = sqlx::query_as::<_, VehicleService>(&query)
            .bind(id)
            .bind(request.vehicle_id)
            .bind(request.service_type_id)
            .bind(request.service_company_id)
            .bind(request.service_date)
            .bind(request.km)
            .bind(request.cost)
            .bind(&request.notes)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn delete(&self, id: i32) -> Result<Option<VehicleService>, AppError> {
        let query = format!(
            "DELETE FROM vehicle_services WHERE id = $1 RETURNING {}",
            SERVICE_COLUMNS
        );

        let row = sqlx::query_as::<_, VehicleService>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }
}
