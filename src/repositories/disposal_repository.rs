//! Repositorio de bajas de vehículos
//!
//! Registrar una baja marca el vehículo como 'disposed' en la misma
//! transacción que el insert.

use sqlx::PgPool;

use crate::models::disposal::{CreateDisposalRequest, DisposalRecord};
use crate::utils::errors::AppError;

const DISPOSAL_COLUMNS: &str =
    "id, vehicle_id, disposal_type, disposal_date, amount, notes, created_at";

pub struct DisposalRepository {
    pool: PgPool,
}

impl DisposalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<DisposalRecord>, AppError> {
        let query = format!(
            "SELECT {} FROM disposal_records ORDER BY disposal_date DESC, id DESC",
            DISPOSAL_COLUMNS
        );

        let records = sqlx::query_as::<_, DisposalRecord>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<DisposalRecord>, AppError> {
        let query = format!(
            "SELECT {} FROM disposal_records WHERE id = $1",
            DISPOSAL_COLUMNS
        );

        let record = sqlx::query_as::<_, DisposalRecord>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    pub async fn create(
        &self,
        request: &CreateDisposalRequest,
    ) -> Result<DisposalRecord, AppError> {
        let mut tx = self.pool.begin().await?;

        let query = format!(
            "INSERT INTO disposal_records (vehicle_id, disposal_type, disposal_date, amount, notes) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            DISPOSAL_COLUMNS
        );

        let record = sqlx::query_as::<_, DisposalRecord>(&query)
            .bind(request.vehicle_id)
            .bind(&request.disposal_type)
            .bind(request.disposal_date)
            .bind(request.amount)
            .bind(&request.notes)
            .fetch_one(&mut *tx)
            .await?;

        let updated = sqlx::query("UPDATE vehicles SET current_status = 'disposed' WHERE id = $1")
            .bind(request.vehicle_id)
            .execute(&mut *tx)
            .await?;

        if updated.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(AppError::BadRequest(
                "Referenced vehicle does not exist".to_string(),
            ));
        }

        tx.commit().await?;

        Ok(record)
    }

    pub async fn update(
        &self,
        id: i32,
        request: &CreateDisposalRequest,
    ) -> Result<Option<DisposalRecord>, AppError> {
        let query = format!(
            "UPDATE disposal_records SET vehicle_id = $2, disposal_type = $3, \
             disposal_date = $4, amount = $5, notes = $6 WHERE id = $1 RETURNING {}",
            DISPOSAL_COLUMNS
        );

        let record = sqlx::query_as::<_, DisposalRecord>(&query)
            .bind(id)
            .bind(request.vehicle_id)
            .bind(&request.disposal_type)
            .bind(request.disposal_date)
            .bind(request.amount)
            .bind(&request.notes)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    pub async fn delete(&self, id: i32) -> Result<Option<DisposalRecord>, AppError> {
        let query = format!(
            "DELETE FROM disposal_records WHERE id = $1 RETURNING {}",
            DISPOSAL_COLUMNS
        );

        let record = sqlx::query_as::<_, DisposalRecord>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }
}
