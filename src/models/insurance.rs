//! Modelo de Insurance (póliza de seguro)
//!
//! Con `create_payment_record = true` el alta de la póliza inserta también
//! una fila en payments; ambas escrituras comparten la misma transacción.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Insurance {
    pub id: i32,
    pub vehicle_id: i32,
    pub insurance_type_id: Option<i32>,
    pub insurance_company_id: Option<i32>,
    pub agency_id: Option<i32>,
    pub policy_number: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub policy_date: Option<NaiveDate>,
    pub amount: Option<Decimal>,
    pub tax_rate: Option<Decimal>,
    pub tax_amount: Option<Decimal>,
    pub total_amount: Option<Decimal>,
    pub currency: Option<String>,
    pub installment_count: Option<i32>,
    pub payment_type_id: Option<i32>,
    pub payment_account_id: Option<i32>,
    pub create_payment_record: bool,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request para crear una póliza
#[derive(Debug, Deserialize, Validate)]
pub struct CreateInsuranceRequest {
    #[validate(range(min = 1, message = "vehicle_id is required"))]
    pub vehicle_id: i32,

    pub insurance_type_id: Option<i32>,
    pub insurance_company_id: Option<i32>,
    pub agency_id: Option<i32>,

    #[validate(length(max = 50, message = "policy number is too long"))]
    pub policy_number: Option<String>,

    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub policy_date: Option<NaiveDate>,
    pub amount: Option<Decimal>,
    pub tax_rate: Option<Decimal>,
    pub tax_amount: Option<Decimal>,
    pub total_amount: Option<Decimal>,
    pub currency: Option<String>,

    #[validate(range(min = 1, max = 48, message = "installment count must be between 1 and 48"))]
    pub installment_count: Option<i32>,

    pub payment_type_id: Option<i32>,
    pub payment_account_id: Option<i32>,

    #[serde(default)]
    pub create_payment_record: bool,

    pub description: Option<String>,
}

/// Request para actualizar (full replace; el vehículo no cambia)
pub type UpdateInsuranceRequest = CreateInsuranceRequest;
