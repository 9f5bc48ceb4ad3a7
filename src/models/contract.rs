//! Modelo de PurchaseContract (contrato de compra)

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PurchaseContract {
    pub id: i32,
    pub contract_number: String,
    pub supplier: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub total_value: Option<Decimal>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request para crear un contrato de compra
#[derive(Debug, Deserialize, Validate)]
pub struct CreateContractRequest {
    #[validate(length(min = 1, max = 50, message = "contract number is required"))]
    pub contract_number: String,

    pub supplier: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub total_value: Option<Decimal>,
    pub notes: Option<String>,
}

/// Request para actualizar (full replace)
pub type UpdateContractRequest = CreateContractRequest;
