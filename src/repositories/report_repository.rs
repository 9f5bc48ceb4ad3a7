//! Repositorio de informes
//!
//! CRUD sobre la tabla `reports` más las queries agregadas que se
//! calculan al vuelo sobre las tablas operacionales.

use sqlx::PgPool;

use crate::models::report::{
    CreateReportRequest, RentalCountByClient, Report, VehicleInMaintenance,
};
use crate::models::vehicle::Vehicle;
use crate::repositories::vehicle_repository::VEHICLE_COLUMNS;
use crate::utils::errors::AppError;

const REPORT_COLUMNS: &str = "id, name, data, created_at";

pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Report>, AppError> {
        let query = format!("SELECT {} FROM reports ORDER BY id", REPORT_COLUMNS);

        let reports = sqlx::query_as::<_, Report>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(reports)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Report>, AppError> {
        let query = format!("SELECT {} FROM reports WHERE id = $1", REPORT_COLUMNS);

        let report = sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(report)
    }

    pub async fn create(&self, request: &CreateReportRequest) -> Result<Report, AppError> {
        let query = format!(
            "INSERT INTO reports (name, data) VALUES ($1, $2) RETURNING {}",
            REPORT_COLUMNS
        );

        let report = sqlx::query_as::<_, Report>(&query)
            .bind(&request.name)
            .bind(&request.data)
            .fetch_one(&self.pool)
            .await?;

        Ok(report)
    }

    pub async fn update(
        &self,
        id: i32,
        request: &CreateReportRequest,
    ) -> Result<Option<Report>, AppError> {
        let query = format!(
            "UPDATE reports SET name = $2, data = $3 WHERE id = $1 RETURNING {}",
            REPORT_COLUMNS
        );

        let report = sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .bind(&request.name)
            .bind(&request.data)
            .fetch_optional(&self.pool)
            .await?;

        Ok(report)
    }

    pub async fn delete(&self, id: i32) -> Result<Option<Report>, AppError> {
        let query = format!(
            "DELETE FROM reports WHERE id = $1 RETURNING {}",
            REPORT_COLUMNS
        );

        let report = sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(report)
    }

    // --------------------------------------------------------- agregados

    pub async fn vehicle_list(&self) -> Result<Vec<Vehicle>, AppError> {
        let query = format!("SELECT {} FROM vehicles ORDER BY id", VEHICLE_COLUMNS);

        let vehicles = sqlx::query_as::<_, Vehicle>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    pub async fn active_vehicle_count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM vehicles WHERE current_status = 'available'",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    pub async fn rental_count_by_client(&self) -> Result<Vec<RentalCountByClient>, AppError> {
        let rows = sqlx::query_as::<_, RentalCountByClient>(
            "SELECT c.id AS client_company_id, c.company_name AS client_company_name, \
             COUNT(r.id) AS total_rentals \
             FROM client_companies c \
             LEFT JOIN lease_agreements r ON r.client_company_id = c.id \
             GROUP BY c.id, c.company_name \
             ORDER BY total_rentals DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Vehículos con un registro de mantenimiento sin fecha de fin
    pub async fn vehicles_in_maintenance(&self) -> Result<Vec<VehicleInMaintenance>, AppError> {
        let rows = sqlx::query_as::<_, VehicleInMaintenance>(
            "SELECT v.id, v.plate_number, b.name AS brand, vm.name AS model, \
             m.id AS maintenance_id, m.date AS start_date, m.end_date, m.description \
             FROM vehicles v \
             INNER JOIN maintenance_records m ON m.vehicle_id = v.id AND m.end_date IS NULL \
             LEFT JOIN brands b ON b.id = v.brand_id \
             LEFT JOIN vehicle_models vm ON vm.id = v.model_id \
             ORDER BY m.date",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
