//! Controlador de proveedores
//!
//! DELETE nunca falla por relaciones: si hay vehículos que referencian al
//! proveedor la respuesta indica que solo se desactivó.

use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::models::common::Paginated;
use crate::models::supplier::{
    CreateSupplierRequest, Supplier, SupplierDeleteOutcome, SupplierFilters, SupplierSearchQuery,
    UpdateSupplierRequest,
};
use crate::repositories::supplier_repository::SupplierRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

/// Respuesta de DELETE sobre un proveedor
#[derive(Debug, serde::Serialize)]
pub struct SupplierDeleteResponse {
    pub message: String,
    pub deactivated: bool,
    pub supplier: Supplier,
}

pub struct SupplierController {
    repository: SupplierRepository,
}

impl SupplierController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: SupplierRepository::new(pool),
        }
    }

    pub async fn list(&self, filters: SupplierFilters) -> Result<Paginated<Supplier>, AppError> {
        self.repository.list(&filters).await
    }

    pub async fn search(&self, query: SupplierSearchQuery) -> Result<Vec<Supplier>, AppError> {
        let limit = query.limit.unwrap_or(10).clamp(1, 50);
        self.repository.search(&query.q, limit).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Supplier, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Supplier"))
    }

    pub async fn create(&self, request: CreateSupplierRequest) -> Result<Supplier, AppError> {
        request.validate()?;

        if let Some(ref tax_number) = request.tax_number {
            if self.repository.tax_number_exists(tax_number, None).await? {
                return Err(conflict_error("Supplier", "tax number", tax_number));
            }
        }

        let supplier = self.repository.create(&request).await?;

        info!("✅ Supplier created: {} (id {})", supplier.name, supplier.id);

        Ok(supplier)
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateSupplierRequest,
    ) -> Result<Supplier, AppError> {
        request.validate()?;

        if let Some(ref tax_number) = request.tax_number {
            if self
                .repository
                .tax_number_exists(tax_number, Some(id))
                .await?
            {
                return Err(conflict_error("Supplier", "tax number", tax_number));
            }
        }

        self.repository
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("Supplier"))
    }

    pub async fn delete(&self, id: i32) -> Result<SupplierDeleteResponse, AppError> {
        let outcome = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found_error("Supplier"))?;

        let response = match outcome {
            SupplierDeleteOutcome::Deactivated(supplier) => {
                info!("🔒 Supplier deactivated (in use): {} (id {})", supplier.name, id);
                SupplierDeleteResponse {
                    message: "Supplier is referenced by vehicles and was deactivated".to_string(),
                    deactivated: true,
                    supplier,
                }
            }
            SupplierDeleteOutcome::Deleted(supplier) => {
                info!("🗑️ Supplier deleted: {} (id {})", supplier.name, id);
                SupplierDeleteResponse {
                    message: "Supplier deleted".to_string(),
                    deactivated: false,
                    supplier,
                }
            }
        };

        Ok(response)
    }
}
