//! Repositorio de proveedores
//!
//! Updates en modo PartialMerge: se lee la fila actual y los campos
//! omitidos del payload conservan su valor. DELETE aplica la política
//! "desactivar si hay relaciones": con vehículos referenciando al
//! proveedor se marca `is_active = false` en lugar de borrar.

use sqlx::PgPool;

use crate::models::common::{ListMeta, Paginated};
use crate::models::supplier::{
    CreateSupplierRequest, Supplier, SupplierDeleteOutcome, SupplierFilters, UpdateSupplierRequest,
};
use crate::utils::errors::AppError;

const SUPPLIER_COLUMNS: &str = "id, name, tax_number, contact_person, phone, email, address, \
    category_id, is_active, created_at, updated_at";

/// Columnas permitidas para ordenar el listado
const SORTABLE_COLUMNS: &[&str] = &["id", "name", "tax_number", "created_at"];

pub struct SupplierRepository {
    pool: PgPool,
}

impl SupplierRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, filters: &SupplierFilters) -> Result<Paginated<Supplier>, AppError> {
        let page = filters.page.unwrap_or(1).max(1);
        let page_size = filters.page_size.unwrap_or(20).clamp(1, 200);
        let offset = (page - 1) * page_size;

        let sort_by = filters
            .sort_by
            .as_deref()
            .filter(|column| SORTABLE_COLUMNS.contains(column))
            .unwrap_or("name");
        let sort_order = match filters.sort_order.as_deref() {
            Some("desc") | Some("DESC") => "DESC",
            _ => "ASC",
        };

        let where_clause = if filters.is_active.is_some() {
            " WHERE is_active = $1"
        } else {
            ""
        };

        let count_query = format!("SELECT COUNT(*) FROM suppliers{}", where_clause);
        let mut count = sqlx::query_scalar::<_, i64>(&count_query);
        if let Some(is_active) = filters.is_active {
            count = count.bind(is_active);
        }
        let total = count.fetch_one(&self.pool).await?;

        let list_query = format!(
            "SELECT {} FROM suppliers{} ORDER BY {} {} LIMIT {} OFFSET {}",
            SUPPLIER_COLUMNS, where_clause, sort_by, sort_order, page_size, offset
        );
        let mut list = sqlx::query_as::<_, Supplier>(&list_query);
        if let Some(is_active) = filters.is_active {
            list = list.bind(is_active);
        }
        let data = list.fetch_all(&self.pool).await?;

        Ok(Paginated {
            data,
            meta: ListMeta {
                total,
                page,
                page_size,
            },
        })
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Supplier>, AppError> {
        let query = format!("SELECT {} FROM suppliers WHERE id = $1", SUPPLIER_COLUMNS);

        let supplier = sqlx::query_as::<_, Supplier>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(supplier)
    }

    /// Búsqueda rápida por nombre o número fiscal (solo activos)
    pub async fn search(&self, term: &str, limit: i64) -> Result<Vec<Supplier>, AppError> {
        let query = format!(
            "SELECT {} FROM suppliers \
             WHERE (name ILIKE $1 OR tax_number ILIKE $1) AND is_active = TRUE \
             ORDER BY name ASC LIMIT $2",
            SUPPLIER_COLUMNS
        );

        let suppliers = sqlx::query_as::<_, Supplier>(&query)
            .bind(format!("%{}%", term))
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(suppliers)
    }

    pub async fn tax_number_exists(
        &self,
        tax_number: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, AppError> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM suppliers WHERE tax_number = $1 AND ($2::int IS NULL OR id != $2))",
        )
        .bind(tax_number)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists.0)
    }

    pub async fn create(&self, request: &CreateSupplierRequest) -> Result<Supplier, AppError> {
        let query = format!(
            "INSERT INTO suppliers (name, tax_number, contact_person, phone, email, address, category_id, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {}",
            SUPPLIER_COLUMNS
        );

        let supplier = sqlx::query_as::<_, Supplier>(&query)
            .bind(&request.name)
            .bind(&request.tax_number)
            .bind(&request.contact_person)
            .bind(&request.phone)
            .bind(&request.email)
            .bind(&request.address)
            .bind(request.category_id)
            .bind(request.is_active.unwrap_or(true))
            .fetch_one(&self.pool)
            .await?;

        Ok(supplier)
    }

    /// Partial merge: los campos omitidos conservan el valor actual
    pub async fn update(
        &self,
        id: i32,
        request: &UpdateSupplierRequest,
    ) -> Result<Option<Supplier>, AppError> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let query = format!(
            "UPDATE suppliers SET name = $2, tax_number = $3, contact_person = $4, phone = $5, \
             email = $6, address = $7, category_id = $8, is_active = $9, \
             updated_at = CURRENT_TIMESTAMP WHERE id = $1 RETURNING {}",
            SUPPLIER_COLUMNS
        );

        let supplier = sqlx::query_as::<_, Supplier>(&query)
            .bind(id)
            .bind(request.name.as_ref().unwrap_or(&current.name))
            .bind(request.tax_number.as_ref().or(current.tax_number.as_ref()))
            .bind(
                request
                    .contact_person
                    .as_ref()
                    .or(current.contact_person.as_ref()),
            )
            .bind(request.phone.as_ref().or(current.phone.as_ref()))
            .bind(request.email.as_ref().or(current.email.as_ref()))
            .bind(request.address.as_ref().or(current.address.as_ref()))
            .bind(request.category_id.or(current.category_id))
            .bind(request.is_active.unwrap_or(current.is_active))
            .fetch_one(&self.pool)
            .await?;

        Ok(Some(supplier))
    }

    /// Número de vehículos que referencian a un proveedor
    pub async fn referencing_vehicle_count(&self, id: i32) -> Result<i64, AppError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM vehicles WHERE supplier_id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    /// Política de borrado: desactivar si hay relaciones, borrar si no
    pub async fn delete(&self, id: i32) -> Result<Option<SupplierDeleteOutcome>, AppError> {
        let Some(_current) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        if self.referencing_vehicle_count(id).await? > 0 {
            let query = format!(
                "UPDATE suppliers SET is_active = FALSE, updated_at = CURRENT_TIMESTAMP \
                 WHERE id = $1 RETURNING {}",
                SUPPLIER_COLUMNS
            );
            let supplier = sqlx::query_as::<_, Supplier>(&query)
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

            return Ok(Some(SupplierDeleteOutcome::Deactivated(supplier)));
        }

        let query = format!(
            "DELETE FROM suppliers WHERE id = $1 RETURNING {}",
            SUPPLIER_COLUMNS
        );
        let supplier = sqlx::query_as::<_, Supplier>(&query)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(Some(SupplierDeleteOutcome::Deleted(supplier)))
    }
}
