//! Repositorio de vehículos

use sqlx::PgPool;

use crate::models::common::{ListMeta, Paginated};
use crate::models::vehicle::{CreateVehicleRequest, Vehicle, VehicleFilters};
use crate::utils::errors::AppError;

pub(crate) const VEHICLE_COLUMNS: &str = "id, plate_number, chassis_number, engine_number, brand_id, \
    model_id, vehicle_type_id, fuel_type_id, transmission_id, color_id, branch_id, \
    model_year, km, registration_date, insurance_expiry_date, inspection_expiry_date, \
    acquisition_cost, current_status, current_client_company_id, is_draft, notes, created_at";

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Listado con filtros opcionales y paginación `{data, meta}`
    pub async fn list(&self, filters: &VehicleFilters) -> Result<Paginated<Vehicle>, AppError> {
        let page = filters.page.unwrap_or(1).max(1);
        let page_size = filters.page_size.unwrap_or(20).clamp(1, 200);
        let offset = (page - 1) * page_size;

        let mut conditions = Vec::new();
        if filters.current_status.is_some() {
            conditions.push(format!("current_status = ${}", conditions.len() + 1));
        }
        if filters.brand_id.is_some() {
            conditions.push(format!("brand_id = ${}", conditions.len() + 1));
        }
        if filters.is_draft.is_some() {
            conditions.push(format!("is_draft = ${}", conditions.len() + 1));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        let count_query = format!("SELECT COUNT(*) FROM vehicles{}", where_clause);
        let mut count = sqlx::query_scalar::<_, i64>(&count_query);
        if let Some(ref status) = filters.current_status {
            count = count.bind(status);
        }
        if let Some(brand_id) = filters.brand_id {
            count = count.bind(brand_id);
        }
        if let Some(is_draft) = filters.is_draft {
            count = count.bind(is_draft);
        }
        let total = count.fetch_one(&self.pool).await?;

        let list_query = format!(
            "SELECT {} FROM vehicles{} ORDER BY id LIMIT {} OFFSET {}",
            VEHICLE_COLUMNS, where_clause, page_size, offset
        );
        let mut list = sqlx::query_as::<_, Vehicle>(&list_query);
        if let Some(ref status) = filters.current_status {
            list = list.bind(status);
        }
        if let Some(brand_id) = filters.brand_id {
            list = list.bind(brand_id);
        }
        if let Some(is_draft) = filters.is_draft {
            list = list.bind(is_draft);
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

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, AppError> {
        let query = format!("SELECT {} FROM vehicles WHERE id = $1", VEHICLE_COLUMNS);

        let vehicle = sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn plate_number_exists(&self, plate_number: &str, exclude_id: Option<i32>) -> Result<bool, AppError> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE plate_number = $1 AND ($2::int IS NULL OR id != $2))",
        )
        .bind(plate_number)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists.0)
    }

    pub async fn chassis_number_exists(&self, chassis_number: &str, exclude_id: Option<i32>) -> Result<bool, AppError> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE chassis_number = $1 AND ($2::int IS NULL OR id != $2))",
        )
        .bind(chassis_number)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists.0)
    }

    pub async fn create(&self, request: &CreateVehicleRequest) -> Result<Vehicle, AppError> {
        let query = format!(
            "INSERT INTO vehicles (plate_number, chassis_number, engine_number, brand_id, \
             model_id, vehicle_type_id, fuel_type_id, transmission_id, color_id, branch_id, \
             model_year, km, registration_date, insurance_expiry_date, inspection_expiry_date, \
             acquisition_cost, current_status, current_client_company_id, is_draft, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, \
             $17, $18, $19, $20) RETURNING {}",
            VEHICLE_COLUMNS
        );

        let vehicle = sqlx::query_as::<_, Vehicle>(&query)
            .bind(&request.plate_number)
            .bind(&request.chassis_number)
            .bind(&request.engine_number)
            .bind(request.brand_id)
            .bind(request.model_id)
            .bind(request.vehicle_type_id)
            .bind(request.fuel_type_id)
            .bind(request.transmission_id)
            .bind(request.color_id)
            .bind(request.branch_id)
            .bind(request.model_year)
            .bind(request.km)
            .bind(request.registration_date)
            .bind(request.insurance_expiry_date)
            .bind(request.inspection_expiry_date)
            .bind(request.acquisition_cost)
            .bind(&request.current_status)
            .bind(request.current_client_company_id)
            .bind(request.is_draft)
            .bind(&request.notes)
            .fetch_one(&self.pool)
            .await?;

        Ok(vehicle)
    }

    /// Full replace: todos los campos nombrados se sobreescriben
    pub async fn update(
        &self,
        id: i32,
        request: &CreateVehicleRequest,
    ) -> Result<Option<Vehicle>, AppError> {
        let query = format!(
            "UPDATE vehicles SET plate_number = $2, chassis_number = $3, engine_number = $4, \
             brand_id = $5, model_id = $6, vehicle_type_id = $7, fuel_type_id = $8, \
             transmission_id = $9, color_id = $10, branch_id = $11, model_year = $12, \
             km = $13, registration_date = $14, insurance_expiry_date = $15, \
             inspection_expiry_date = $16, acquisition_cost = $17, current_status = $18, \
             current_client_company_id = $19, is_draft = $20, notes = $21 \
             WHERE id = $1 RETURNING {}",
            VEHICLE_COLUMNS
        );

        let vehicle = sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .bind(&request.plate_number)
            .bind(&request.chassis_number)
            .bind(&request.engine_number)
            .bind(request.brand_id)
            .bind(request.model_id)
            .bind(request.vehicle_type_id)
            .bind(request.fuel_type_id)
            .bind(request.transmission_id)
            .bind(request.color_id)
            .bind(request.branch_id)
            .bind(request.model_year)
            .bind(request.km)
            .bind(request.registration_date)
            .bind(request.insurance_expiry_date)
            .bind(request.inspection_expiry_date)
            .bind(request.acquisition_cost)
            .bind(&request.current_status)
            .bind(request.current_client_company_id)
            .bind(request.is_draft)
            .bind(&request.notes)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: i32) -> Result<Option<Vehicle>, AppError> {
        let query = format!(
            "DELETE FROM vehicles WHERE id = $1 RETURNING {}",
            VEHICLE_COLUMNS
        );

        let vehicle = sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }
}
