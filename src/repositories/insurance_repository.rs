//! Repositorio de pólizas de seguro
//!
//! Con `create_payment_record = true` la póliza y su pago se insertan en
//! la misma transacción.

use sqlx::PgPool;

use crate::models::insurance::{CreateInsuranceRequest, Insurance};
use crate::utils::errors::AppError;

const INSURANCE_COLUMNS: &str = "id, vehicle_id, insurance_type_id, insurance_company_id, \
    agency_id, policy_number, start_date, end_date, policy_date, amount, tax_rate, tax_amount, \
    total_amount, currency, installment_count, payment_type_id, payment_account_id, \
    create_payment_record, description, created_at";

pub struct InsuranceRepository {
    pool: PgPool,
}

impl InsuranceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Insurance>, AppError> {
        let query = format!(
            "SELECT {} FROM insurances ORDER BY id DESC",
            INSURANCE_COLUMNS
        );

        let insurances = sqlx::query_as::<_, Insurance>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(insurances)
    }

    pub async fn list_by_vehicle(&self, vehicle_id: i32) -> Result<Vec<Insurance>, AppError> {
        let query = format!(
            "SELECT {} FROM insurances WHERE vehicle_id = $1 ORDER BY end_date DESC NULLS LAST",
            INSURANCE_COLUMNS
        );

        let insurances = sqlx::query_as::<_, Insurance>(&query)
            .bind(vehicle_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(insurances)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Insurance>, AppError> {
        let query = format!("SELECT {} FROM insurances WHERE id = $1", INSURANCE_COLUMNS);

        let insurance = sqlx::query_as::<_, Insurance>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(insurance)
    }

    /// Alta transaccional: póliza + registro de pago opcional
    pub async fn create(&self, request: &CreateInsuranceRequest) -> Result<Insurance, AppError> {
        let mut tx = self.pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO insurances (vehicle_id, insurance_type_id, insurance_company_id, \
             agency_id, policy_number, start_date, end_date, policy_date, amount, tax_rate, \
             tax_amount, total_amount, currency, installment_count, payment_type_id, \
             payment_account_id, create_payment_record, description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, \
             $17, $18) RETURNING {}",
            INSURANCE_COLUMNS
        );

        let insurance = sqlx::query_as::<_, Insurance>(&insert_query)
            .bind(request.vehicle_id)
            .bind(request.insurance_type_id)
            .bind(request.insurance_company_id)
            .bind(request.agency_id)
            .bind(&request.policy_number)
            .bind(request.start_date)
            .bind(request.end_date)
            .bind(request.policy_date)
            .bind(request.amount)
            .bind(request.tax_rate)
            .bind(request.tax_amount)
            .bind(request.total_amount)
            .bind(&request.currency)
            .bind(request.installment_count)
            .bind(request.payment_type_id)
            .bind(request.payment_account_id)
            .bind(request.create_payment_record)
            .bind(&request.description)
            .fetch_one(&mut *tx)
            .await?;

        if request.create_payment_record {
            sqlx::query(
                "INSERT INTO payments (insurance_id, amount, currency, installment_count, \
                 payment_type_id, payment_account_id, payment_date) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7)",
            )
            .bind(insurance.id)
            .bind(request.total_amount.or(request.amount))
            .bind(request.currency.as_deref().unwrap_or("TRY"))
            .bind(request.installment_count.unwrap_or(1))
            .bind(request.payment_type_id)
            .bind(request.payment_account_id)
            .bind(request.policy_date.or(request.start_date))
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(insurance)
    }

    pub async fn update(
        &self,
        id: i32,
        request: &CreateInsuranceRequest,
    ) -> Result<Option<Insurance>, AppError> {
        let query = format!(
            "UPDATE insurances SET vehicle_id = $2, insurance_type_id = $3, \
             insurance_company_id = $4, agency_id = $5, policy_number = $6, start_date = $7, \
             end_date = $8, policy_date = $9, amount = $10, tax_rate = $11, tax_amount = $12, \
             total_amount = $13, currency = $14, installment_count = $15, payment_type_id = $16, \
             payment_account_id = $17, description = $18 WHERE id = $1 RETURNING {}",
            INSURANCE_COLUMNS
        );

        let insurance = sqlx::query_as::<_, Insurance>(&query)
            .bind(id)
            .bind(request.vehicle_id)
            .bind(request.insurance_type_id)
            .bind(request.insurance_company_id)
            .bind(request.agency_id)
            .bind(&request.policy_number)
            .bind(request.start_date)
            .bind(request.end_date)
            .bind(request.policy_date)
            .bind(request.amount)
            .bind(request.tax_rate)
            .bind(request.tax_amount)
            .bind(request.total_amount)
            .bind(&request.currency)
            .bind(request.installment_count)
            .bind(request.payment_type_id)
            .bind(request.payment_account_id)
            .bind(&request.description)
            .fetch_optional(&self.pool)
            .await?;

        Ok(insurance)
    }

    pub async fn delete(&self, id: i32) -> Result<Option<Insurance>, AppError> {
        let query = format!(
            "DELETE FROM insurances WHERE id = $1 RETURNING {}",
            INSURANCE_COLUMNS
        );

        let insurance = sqlx::query_as::<_, Insurance>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(insurance)
    }
}
