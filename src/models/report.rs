//! Modelo de Report (informes guardados y agregados)
//!
//! Hay dos clases de informe: los guardados (fila en la tabla `reports`
//! con un payload JSON libre) y los agregados, que se calculan al vuelo
//! sobre las tablas operacionales y se devuelven como `{report, data}`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Informe guardado - mapea a la tabla reports
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Report {
    pub id: i32,
    pub name: String,
    pub data: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Request para crear un informe guardado
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReportRequest {
    #[validate(length(min = 1, max = 150, message = "report name is required"))]
    pub name: String,

    pub data: serde_json::Value,
}

/// Request para actualizar (full replace, mismas reglas que crear)
pub type UpdateReportRequest = CreateReportRequest;

/// Envoltura común de los informes agregados
#[derive(Debug, Serialize)]
pub struct AggregateReport<T> {
    pub report: &'static str,
    pub data: T,
}

/// Dato del informe de recuento de vehículos activos
#[derive(Debug, Serialize)]
pub struct ActiveVehicleCount {
    pub active_vehicle_count: i64,
}

/// Fila del informe de alquileres por empresa cliente
#[derive(Debug, Serialize, FromRow)]
pub struct RentalCountByClient {
    pub client_company_id: i32,
    pub client_company_name: String,
    pub total_rentals: i64,
}

/// Fila del informe de vehículos con mantenimiento abierto
#[derive(Debug, Serialize, FromRow)]
pub struct VehicleInMaintenance {
    pub id: i32,
    pub plate_number: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub maintenance_id: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: String,
}
