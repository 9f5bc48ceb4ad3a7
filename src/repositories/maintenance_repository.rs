//! Repositorio de registros de mantenimiento

use sqlx::PgPool;

use crate::models::maintenance::{CreateMaintenanceRequest, MaintenanceRecord};
use crate::utils::errors::AppError;

const MAINTENANCE_COLUMNS: &str =
    "id, vehicle_id, description, date, end_date, cost, notes, created_at";

pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<MaintenanceRecord>, AppError> {
        let query = format!(
            "SELECT {} FROM maintenance_records ORDER BY date DESC, id DESC",
            MAINTENANCE_COLUMNS
        );

        let records = sqlx::query_as::<_, MaintenanceRecord>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    pub async fn list_by_vehicle(
        &self,
        vehicle_id: i32,
    ) -> Result<Vec<MaintenanceRecord>, AppError> {
        let query = format!(
            "SELECT {} FROM maintenance_records WHERE vehicle_id = $1 ORDER BY date DESC",
            MAINTENANCE_COLUMNS
        );

        let records = sqlx::query_as::<_, MaintenanceRecord>(&query)
            .bind(vehicle_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<MaintenanceRecord>, AppError> {
        let query = format!(
            "SELECT {} FROM maintenance_records WHERE id = $1",
            MAINTENANCE_COLUMNS
        );

        let record = sqlx::query_as::<_, MaintenanceRecord>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    pub async fn create(
        &self,
        request: &CreateMaintenanceRequest,
    ) -> Result<MaintenanceRecord, AppError> {
        let query = format!(
            "INSERT INTO maintenance_records (vehicle_id, description, date, end_date, cost, notes) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            MAINTENANCE_COLUMNS
        );

        let record = sqlx::query_as::<_, MaintenanceRecord>(&query)
            .bind(request.vehicle_id)
            .bind(&request.description)
            .bind(request.date)
            .bind(request.end_date)
            .bind(request.cost)
            .bind(&request.notes)
            .fetch_one(&self.pool)
            .await?;

        Ok(record)
    }

    pub async fn update(
        &self,
        id: i32,
        request: &CreateMaintenanceRequest,
    ) -> Result<Option<MaintenanceRecord>, AppError> {
        let query = format!(
            "UPDATE maintenance_records SET vehicle_id = $2, description = $3, date = $4, \
             end_date = $5, cost = $6, notes = $7 WHERE id = $1 RETURNING {}",
            MAINTENANCE_COLUMNS
        );

        let record = sqlx::query_as::<_, MaintenanceRecord>(&query)
            .bind(id)
            .bind(request.vehicle_id)
            .bind(&request.description)
            .bind(request.date)
            .bind(request.end_date)
            .bind(request.cost)
            .bind(&request.notes)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    pub async fn delete(&self, id: i32) -> Result<Option<MaintenanceRecord>, AppError> {
        let query = format!(
            "DELETE FROM maintenance_records WHERE id = $1 RETURNING {}",
            MAINTENANCE_COLUMNS
        );

        let record = sqlx::query_as::<_, MaintenanceRecord>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }
}
