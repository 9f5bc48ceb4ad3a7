//! Modelo de MaintenanceRecord (registro de mantenimiento)

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaintenanceRecord {
    pub id: i32,
    pub vehicle_id: i32,
    pub description: String,
    pub date: NaiveDate,
    /// NULL mientras el mantenimiento sigue abierto
    pub end_date: Option<NaiveDate>,
    pub cost: Option<Decimal>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request para crear un registro de mantenimiento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceRequest {
    #[validate(range(min = 1, message = "vehicle_id is required"))]
    pub vehicle_id: i32,

    #[validate(length(min = 1, max = 500, message = "description is required"))]
    pub description: String,

    pub date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub cost: Option<Decimal>,
    pub notes: Option<String>,
}

/// Request para actualizar (full replace)
pub type UpdateMaintenanceRequest = CreateMaintenanceRequest;
