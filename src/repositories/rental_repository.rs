//! Repositorio de contratos de alquiler
//!
//! El alta ejecuta dos escrituras en la misma transacción: inserta el
//! contrato y actualiza el vehículo (cliente actual + estado "leased").
//! Si el vehículo no existe la transacción se revierte completa.

use sqlx::PgPool;

use crate::models::rental::{CreateRentalRequest, Rental, UpdateRentalRequest};
use crate::utils::errors::AppError;

const RENTAL_COLUMNS: &str = "id, vehicle_id, client_company_id, contract_number, start_date, \
    end_date, terms, status, created_at";

pub struct RentalRepository {
    pool: PgPool,
}

impl RentalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Rental>, AppError> {
        let query = format!(
            "SELECT {} FROM lease_agreements ORDER BY id DESC",
            RENTAL_COLUMNS
        );

        let rentals = sqlx::query_as::<_, Rental>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rentals)
    }

    pub async fn list_by_vehicle(&self, vehicle_id: i32) -> Result<Vec<Rental>, AppError> {
        let query = format!(
            "SELECT {} FROM lease_agreements WHERE vehicle_id = $1 ORDER BY start_date DESC",
            RENTAL_COLUMNS
        );

        let rentals = sqlx::query_as::<_, Rental>(&query)
            .bind(vehicle_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rentals)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Rental>, AppError> {
        let query = format!(
            "SELECT {} FROM lease_agreements WHERE id = $1",
            RENTAL_COLUMNS
        );

        let rental = sqlx::query_as::<_, Rental>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(rental)
    }

    /// Alta transaccional: contrato + actualización del vehículo
    pub async fn create(&self, request: &CreateRentalRequest) -> Result<Rental, AppError> {
        let mut tx = self.pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO lease_agreements (vehicle_id, client_company_id, contract_number, \
             start_date, end_date, terms, status) VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {}",
            RENTAL_COLUMNS
        );

        let rental = sqlx::query_as::<_, Rental>(&insert_query)
            .bind(request.vehicle_id)
            .bind(request.client_company_id)
            .bind(&request.contract_number)
            .bind(request.start_date)
            .bind(request.end_date)
            .bind(&request.terms)
            .bind(request.status.as_deref().unwrap_or("active"))
            .fetch_one(&mut *tx)
            .await?;

        let updated = sqlx::query(
            "UPDATE vehicles SET current_client_company_id = $2, current_status = 'leased' \
             WHERE id = $1",
        )
        .bind(request.vehicle_id)
        .bind(request.client_company_id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(AppError::BadRequest(
                "Referenced vehicle does not exist".to_string(),
            ));
        }

        tx.commit().await?;

        Ok(rental)
    }

    pub async fn update(
        &self,
        id: i32,
        request: &UpdateRentalRequest,
    ) -> Result<Option<Rental>, AppError> {
        let query = format!(
            "UPDATE lease_agreements SET vehicle_id = $2, client_company_id = $3, \
             contract_number = $4, start_date = $5, end_date = $6, terms = $7, status = $8 \
             WHERE id = $1 RETURNING {}",
            RENTAL_COLUMNS
        );

        let rental = sqlx::query_as::<_, Rental>(&query)
            .bind(id)
            .bind(request.vehicle_id)
            .bind(request.client_company_id)
            .bind(&request.contract_number)
            .bind(request.start_date)
            .bind(request.end_date)
            .bind(&request.terms)
            .bind(&request.status)
            .fetch_optional(&self.pool)
            .await?;

        Ok(rental)
    }

    /// Baja transaccional: elimina el contrato y libera el vehículo
    pub async fn delete(&self, id: i32) -> Result<Option<Rental>, AppError> {
        let mut tx = self.pool.begin().await?;

        let query = format!(
            "DELETE FROM lease_agreements WHERE id = $1 RETURNING {}",
            RENTAL_COLUMNS
        );

        let Some(rental) = sqlx::query_as::<_, Rental>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            tx.rollback().await?;
            return Ok(None);
        };

        sqlx::query(
            "UPDATE vehicles SET current_client_company_id = NULL, current_status = 'available' \
             WHERE id = $1 AND current_client_company_id = $2",
        )
        .bind(rental.vehicle_id)
        .bind(rental.client_company_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(rental))
    }
}
