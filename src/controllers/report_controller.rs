//! Controlador de informes

use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::models::common::DeletedResponse;
use crate::models::report::{
    ActiveVehicleCount, AggregateReport, CreateReportRequest, RentalCountByClient, Report,
    UpdateReportRequest, VehicleInMaintenance,
};
use crate::models::vehicle::Vehicle;
use crate::repositories::report_repository::ReportRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct ReportController {
    repository: ReportRepository,
}

impl ReportController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ReportRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<Report>, AppError> {
        self.repository.list_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Report, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Report"))
    }

    pub async fn create(&self, request: CreateReportRequest) -> Result<Report, AppError> {
        request.validate()?;

        let report = self.repository.create(&request).await?;

        info!("✅ Report created: {} (id {})", report.name, report.id);

        Ok(report)
    }

    pub async fn update(&self, id: i32, request: UpdateReportRequest) -> Result<Report, AppError> {
        request.validate()?;

        self.repository
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("Report"))
    }

    pub async fn delete(&self, id: i32) -> Result<DeletedResponse<Report>, AppError> {
        let report = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found_error("Report"))?;

        info!("🗑️ Report deleted: id {}", id);

        Ok(DeletedResponse::new("Report", report))
    }

    pub async fn vehicle_list(&self) -> Result<AggregateReport<Vec<Vehicle>>, AppError> {
        let data = self.repository.vehicle_list().await?;

        Ok(AggregateReport {
            report: "vehicle_list",
            data,
        })
    }

    pub async fn active_vehicle_count(
        &self,
    ) -> Result<AggregateReport<ActiveVehicleCount>, AppError> {
        let count = self.repository.active_vehicle_count().await?;

        Ok(AggregateReport {
            report: "active_vehicle_count",
            data: ActiveVehicleCount {
                active_vehicle_count: count,
            },
        })
    }

    pub async fn rental_count_by_client(
        &self,
    ) -> Result<AggregateReport<Vec<RentalCountByClient>>, AppError> {
        let data = self.repository.rental_count_by_client().await?;

        Ok(AggregateReport {
            report: "rental_count_by_client",
            data,
        })
    }

    pub async fn vehicles_in_maintenance(
        &self,
    ) -> Result<AggregateReport<Vec<VehicleInMaintenance>>, AppError> {
        let data = self.repository.vehicles_in_maintenance().await?;

        Ok(AggregateReport {
            report: "vehicles_in_maintenance",
            data,
        })
    }
}
