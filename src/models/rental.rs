//! Modelo de Rental (contrato de alquiler / lease agreement)
//!
//! Crear un alquiler asocia el vehículo con la empresa cliente. El insert
//! del contrato y la actualización del vehículo comparten una transacción:
//! si la segunda escritura falla, la primera se revierte.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rental {
    pub id: i32,
    pub vehicle_id: i32,
    pub client_company_id: i32,
    pub contract_number: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub terms: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Request para crear un contrato de alquiler
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRentalRequest {
    #[validate(range(min = 1, message = "vehicle_id is required"))]
    pub vehicle_id: i32,

    #[validate(range(min = 1, message = "client_company_id is required"))]
    pub client_company_id: i32,

    pub contract_number: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub terms: Option<String>,
    pub status: Option<String>,
}

/// Request para actualizar (full replace)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRentalRequest {
    #[validate(range(min = 1, message = "vehicle_id is required"))]
    pub vehicle_id: i32,

    #[validate(range(min = 1, message = "client_company_id is required"))]
    pub client_company_id: i32,

    pub contract_number: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub terms: Option<String>,
    pub status: String,
}
