//! Modelo de ClientCompany (empresa cliente)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClientCompany {
    pub id: i32,
    pub company_name: String,
    pub contact_person: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub client_type_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Request para crear una empresa cliente
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClientRequest {
    #[validate(length(min = 1, max = 150, message = "company name is required"))]
    pub company_name: String,

    pub contact_person: Option<String>,

    #[validate(email(message = "a valid email is required"))]
    pub email: String,

    #[validate(length(max = 30, message = "phone is too long"))]
    pub phone: Option<String>,

    pub address: Option<String>,
    pub client_type_id: Option<i32>,
}

/// Request para actualizar (full replace, mismas reglas que crear)
pub type UpdateClientRequest = CreateClientRequest;
