//! Modelo de DisposalRecord (registro de baja / venta del vehículo)

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DisposalRecord {
    pub id: i32,
    pub vehicle_id: i32,
    pub disposal_type: String,
    pub disposal_date: NaiveDate,
    pub amount: Option<Decimal>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request para crear un registro de baja
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDisposalRequest {
    #[validate(range(min = 1, message = "vehicle_id is required"))]
    pub vehicle_id: i32,

    #[validate(length(min = 1, max = 50, message = "disposal type is required"))]
    pub disposal_type: String,

    pub disposal_date: NaiveDate,
    pub amount: Option<Decimal>,
    pub notes: Option<String>,
}

/// Request para actualizar (full replace)
pub type UpdateDisposalRequest = CreateDisposalRequest;
