//! Modelos de registros asociados a un vehículo: inspecciones (muayene),
//! neumáticos y servicios. Los tres comparten el mismo ciclo CRUD simple.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// ---------------------------------------------------------------- inspección

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VehicleInspection {
    pub id: i32,
    pub vehicle_id: i32,
    pub inspection_company_id: Option<i32>,
    pub inspection_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub cost: Option<Decimal>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateInspectionRequest {
    #[validate(range(min = 1, message = "vehicle_id is required"))]
    pub vehicle_id: i32,

    pub inspection_company_id: Option<i32>,
    pub inspection_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub cost: Option<Decimal>,
    pub notes: Option<String>,
}

pub type UpdateInspectionRequest = CreateInspectionRequest;

// ---------------------------------------------------------------- neumáticos

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VehicleTire {
    pub id: i32,
    pub vehicle_id: i32,
    pub tire_brand_id: Option<i32>,
    pub tire_model_id: Option<i32>,
    pub tire_position_id: Option<i32>,
    pub tire_condition_id: Option<i32>,
    pub size: Option<String>,
    pub installed_at: Option<NaiveDate>,
    pub km_at_install: Option<i64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTireRequest {
    #[validate(range(min = 1, message = "vehicle_id is required"))]
    pub vehicle_id: i32,

    pub tire_brand_id: Option<i32>,
    pub tire_model_id: Option<i32>,
    pub tire_position_id: Option<i32>,
    pub tire_condition_id: Option<i32>,

    #[validate(length(max = 20, message = "tire size is too long"))]
    pub size: Option<String>,

    pub installed_at: Option<NaiveDate>,

    #[validate(range(min = 0, message = "km must not be negative"))]
    pub km_at_install: Option<i64>,

    pub notes: Option<String>,
}

pub type UpdateTireRequest = CreateTireRequest;

// ------------------------------------------------------------------ servicio

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VehicleService {
    pub id: i32,
    pub vehicle_id: i32,
    pub service_type_id: Option<i32>,
    pub service_company_id: Option<i32>,
    pub service_date: NaiveDate,
    pub km: Option<i64>,
    pub cost: Option<Decimal>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateServiceRequest {
    #[validate(range(min = 1, message = "vehicle_id is required"))]
    pub vehicle_id: i32,

    pub service_type_id: Option<i32>,
    pub service_company_id: Option<i32>,
    pub service_date: NaiveDate,

    #[validate(range(min = 0, message = "km must not be negative"))]
    pub km: Option<i64>,

    pub cost: Option<Decimal>,
    pub notes: Option<String>,
}

pub type UpdateServiceRequest = CreateServiceRequest;
