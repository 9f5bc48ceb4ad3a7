//! Recurso genérico de tablas de definición (lookups)
//!
//! Todas las tablas de definición comparten el mismo shape
//! `{id, name, description, created_at}` y el mismo ciclo de vida CRUD.
//! En lugar de repetir modelo/repositorio/controller por tabla, cada una
//! se declara como un `LookupResource` en la tabla estática de
//! descriptores y el mismo código genérico sirve a todas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Semántica de actualización de un recurso.
/// FullReplace sobreescribe los campos nombrados; PartialMerge conserva
/// el valor almacenado para los campos omitidos del payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    FullReplace,
    PartialMerge,
}

/// Descriptor estático de una tabla de definición
#[derive(Debug)]
pub struct LookupResource {
    /// Nombre de la tabla SQL. Solo valores de esta tabla estática llegan
    /// a una query, nunca entrada del cliente.
    pub table: &'static str,
    /// Etiqueta de la entidad para mensajes ("Brand not found")
    pub label: &'static str,
    /// Punto de montaje del router ("/api/brands")
    pub path: &'static str,
    pub update_mode: UpdateMode,
}

/// Tabla de descriptores: una entrada por tabla de definición
pub const LOOKUP_RESOURCES: &[LookupResource] = &[
    LookupResource { table: "brands", label: "Brand", path: "/api/brands", update_mode: UpdateMode::FullReplace },
    LookupResource { table: "vehicle_models", label: "Model", path: "/api/models", update_mode: UpdateMode::FullReplace },
    LookupResource { table: "colors", label: "Color", path: "/api/colors", update_mode: UpdateMode::FullReplace },
    LookupResource { table: "fuel_types", label: "Fuel type", path: "/api/fuel-types", update_mode: UpdateMode::FullReplace },
    LookupResource { table: "transmissions", label: "Transmission", path: "/api/transmissions", update_mode: UpdateMode::FullReplace },
    LookupResource { table: "vehicle_types", label: "Vehicle type", path: "/api/vehicle-types", update_mode: UpdateMode::FullReplace },
    LookupResource { table: "vehicle_statuses", label: "Vehicle status", path: "/api/vehicle-statuses", update_mode: UpdateMode::FullReplace },
    LookupResource { table: "branches", label: "Branch", path: "/api/branches", update_mode: UpdateMode::FullReplace },
    LookupResource { table: "client_types", label: "Client type", path: "/api/client-types", update_mode: UpdateMode::FullReplace },
    LookupResource { table: "supplier_categories", label: "Supplier category", path: "/api/supplier-categories", update_mode: UpdateMode::FullReplace },
    LookupResource { table: "tire_brands", label: "Tire brand", path: "/api/tire-brands", update_mode: UpdateMode::FullReplace },
    LookupResource { table: "tire_models", label: "Tire model", path: "/api/tire-models", update_mode: UpdateMode::FullReplace },
    LookupResource { table: "tire_positions", label: "Tire position", path: "/api/tire-positions", update_mode: UpdateMode::FullReplace },
    LookupResource { table: "tire_conditions", label: "Tire condition", path: "/api/tire-conditions", update_mode: UpdateMode::FullReplace },
    LookupResource { table: "tire_types", label: "Tire type", path: "/api/tire-types", update_mode: UpdateMode::FullReplace },
    LookupResource { table: "tyre_suppliers", label: "Tyre supplier", path: "/api/tyre-suppliers", update_mode: UpdateMode::FullReplace },
    LookupResource { table: "payment_types", label: "Payment type", path: "/api/payment-types", update_mode: UpdateMode::FullReplace },
    LookupResource { table: "payment_accounts", label: "Payment account", path: "/api/payment-accounts", update_mode: UpdateMode::FullReplace },
    LookupResource { table: "payer_types", label: "Payer type", path: "/api/payer-types", update_mode: UpdateMode::FullReplace },
    LookupResource { table: "currencies", label: "Currency", path: "/api/currencies", update_mode: UpdateMode::FullReplace },
    LookupResource { table: "insurance_types", label: "Insurance type", path: "/api/insurance-types", update_mode: UpdateMode::FullReplace },
    LookupResource { table: "insurance_companies", label: "Insurance company", path: "/api/insurance-companies", update_mode: UpdateMode::FullReplace },
    LookupResource { table: "agencies", label: "Agency", path: "/api/agencies", update_mode: UpdateMode::FullReplace },
    LookupResource { table: "inspection_companies", label: "Inspection company", path: "/api/inspection-companies", update_mode: UpdateMode::FullReplace },
    LookupResource { table: "service_types", label: "Service type", path: "/api/service-types", update_mode: UpdateMode::FullReplace },
    LookupResource { table: "service_companies", label: "Service company", path: "/api/service-companies", update_mode: UpdateMode::FullReplace },
    LookupResource { table: "roles", label: "Role", path: "/api/roles", update_mode: UpdateMode::FullReplace },
];

/// Fila de una tabla de definición
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Lookup {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request para crear una entrada de definición
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLookupRequest {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,

    #[validate(length(max = 500, message = "description is too long"))]
    pub description: Option<String>,
}

/// Request para actualizar una entrada de definición.
/// Los campos son opcionales para servir a ambos modos: con FullReplace
/// el controller exige `name`; con PartialMerge los campos omitidos
/// conservan su valor almacenado.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLookupRequest {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: Option<String>,

    #[validate(length(max = 500, message = "description is too long"))]
    pub description: Option<String>,
}
