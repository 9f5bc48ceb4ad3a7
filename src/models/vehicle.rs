//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus variantes para CRUD.
//! Las relaciones (marca, modelo, color, combustible, transmisión,
//! sucursal) se guardan como referencias por id a tablas de definición.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::utils::validation::{validate_model_year, validate_plate_number};

/// Vehicle principal - mapea a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i32,
    pub plate_number: String,
    pub chassis_number: Option<String>,
    pub engine_number: Option<String>,
    pub brand_id: Option<i32>,
    pub model_id: Option<i32>,
    pub vehicle_type_id: Option<i32>,
    pub fuel_type_id: Option<i32>,
    pub transmission_id: Option<i32>,
    pub color_id: Option<i32>,
    pub branch_id: Option<i32>,
    pub model_year: Option<i32>,
    pub km: Option<i64>,
    pub registration_date: Option<NaiveDate>,
    pub insurance_expiry_date: Option<NaiveDate>,
    pub inspection_expiry_date: Option<NaiveDate>,
    pub acquisition_cost: Option<Decimal>,
    pub current_status: Option<String>,
    pub current_client_company_id: Option<i32>,
    pub is_draft: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request para crear un vehículo.
/// Solo la matrícula es obligatoria; el resto de campos son opcionales.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(
        length(min = 2, max = 20, message = "plate number is required"),
        custom = "validate_plate_number"
    )]
    pub plate_number: String,

    #[validate(length(min = 5, max = 30, message = "chassis number must have 5-30 characters"))]
    pub chassis_number: Option<String>,

    pub engine_number: Option<String>,
    pub brand_id: Option<i32>,
    pub model_id: Option<i32>,
    pub vehicle_type_id: Option<i32>,
    pub fuel_type_id: Option<i32>,
    pub transmission_id: Option<i32>,
    pub color_id: Option<i32>,
    pub branch_id: Option<i32>,

    #[validate(custom = "validate_model_year")]
    pub model_year: Option<i32>,

    #[validate(range(min = 0, message = "km must not be negative"))]
    pub km: Option<i64>,

    pub registration_date: Option<NaiveDate>,
    pub insurance_expiry_date: Option<NaiveDate>,
    pub inspection_expiry_date: Option<NaiveDate>,
    pub acquisition_cost: Option<Decimal>,
    pub current_status: Option<String>,
    pub current_client_company_id: Option<i32>,

    #[serde(default)]
    pub is_draft: bool,

    pub notes: Option<String>,
}

/// Request para actualizar un vehículo (full replace, mismas reglas que crear)
pub type UpdateVehicleRequest = CreateVehicleRequest;

/// Filtros para búsqueda de vehículos
#[derive(Debug, Default, Deserialize)]
pub struct VehicleFilters {
    pub current_status: Option<String>,
    pub brand_id: Option<i32>,
    pub is_draft: Option<bool>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}
