//! Modelo de Supplier (tedarikçi / proveedor)
//!
//! Supplier es el único recurso con política de borrado consciente de
//! relaciones: si existen vehículos que lo referencian, DELETE lo
//! desactiva (`is_active = false`) en lugar de eliminar la fila.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Supplier {
    pub id: i32,
    pub name: String,
    pub tax_number: Option<String>,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub category_id: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request para crear un proveedor
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSupplierRequest {
    #[validate(length(min = 1, max = 150, message = "supplier name is required"))]
    pub name: String,

    #[validate(length(min = 10, max = 11, message = "tax number must have 10-11 digits"))]
    pub tax_number: Option<String>,

    pub contact_person: Option<String>,
    pub phone: Option<String>,

    #[validate(email(message = "a valid email is required"))]
    pub email: Option<String>,

    pub address: Option<String>,
    pub category_id: Option<i32>,
    pub is_active: Option<bool>,
}

/// Request para actualizar un proveedor (partial merge: todos opcionales)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSupplierRequest {
    #[validate(length(min = 1, max = 150, message = "supplier name must not be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 10, max = 11, message = "tax number must have 10-11 digits"))]
    pub tax_number: Option<String>,

    pub contact_person: Option<String>,
    pub phone: Option<String>,

    #[validate(email(message = "a valid email is required"))]
    pub email: Option<String>,

    pub address: Option<String>,
    pub category_id: Option<i32>,
    pub is_active: Option<bool>,
}

/// Filtros para listado de proveedores
#[derive(Debug, Default, Deserialize)]
pub struct SupplierFilters {
    pub is_active: Option<bool>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Parámetros de búsqueda rápida
#[derive(Debug, Deserialize)]
pub struct SupplierSearchQuery {
    pub q: String,
    pub limit: Option<i64>,
}

/// Resultado discriminado de DELETE sobre un proveedor
#[derive(Debug)]
pub enum SupplierDeleteOutcome {
    /// Había vehículos referenciando al proveedor: solo se desactiva
    Deactivated(Supplier),
    /// Sin relaciones: borrado físico
    Deleted(Supplier),
}
