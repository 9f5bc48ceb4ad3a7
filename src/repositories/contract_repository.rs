//! Repositorio de contratos de compra

use sqlx::PgPool;

use crate::models::contract::{CreateContractRequest, PurchaseContract};
use crate::utils::errors::AppError;

const CONTRACT_COLUMNS: &str =
    "id, contract_number, supplier, purchase_date, total_value, notes, created_at";

pub struct ContractRepository {
    pool: PgPool,
}

impl ContractRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<PurchaseContract>, AppError> {
        let query = format!(
            "SELECT {} FROM purchase_contracts ORDER BY id",
            CONTRACT_COLUMNS
        );

        let contracts = sqlx::query_as::<_, PurchaseContract>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(contracts)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<PurchaseContract>, AppError> {
        let query = format!(
            "SELECT {} FROM purchase_contracts WHERE id = $1",
            CONTRACT_COLUMNS
        );

        let contract = sqlx::query_as::<_, PurchaseContract>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(contract)
    }

    pub async fn contract_number_exists(
        &self,
        contract_number: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, AppError> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM purchase_contracts WHERE contract_number = $1 AND ($2::int IS NULL OR id != $2))",
        )
        .bind(contract_number)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists.0)
    }

    pub async fn create(
        &self,
        request: &CreateContractRequest,
    ) -> Result<PurchaseContract, AppError> {
        let query = format!(
            "INSERT INTO purchase_contracts (contract_number, supplier, purchase_date, total_value, notes) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            CONTRACT_COLUMNS
        );

        let contract = sqlx::query_as::<_, PurchaseContract>(&query)
            .bind(&request.contract_number)
            .bind(&request.supplier)
            .bind(request.purchase_date)
            .bind(request.total_value)
            .bind(&request.notes)
            .fetch_one(&self.pool)
            .await?;

        Ok(contract)
    }

    pub async fn update(
        &self,
        id: i32,
        request: &CreateContractRequest,
    ) -> Result<Option<PurchaseContract>, AppError> {
        let query = format!(
            "UPDATE purchase_contracts SET contract_number = $2, supplier = $3, \
             purchase_date = $4, total_value = $5, notes = $6 WHERE id = $1 RETURNING {}",
            CONTRACT_COLUMNS
        );

        let contract = sqlx::query_as::<_, PurchaseContract>(&query)
            .bind(id)
            .bind(&request.contract_number)
            .bind(&request.supplier)
            .bind(request.purchase_date)
            .bind(request.total_value)
            .bind(&request.notes)
            .fetch_optional(&self.pool)
            .await?;

        Ok(contract)
    }

    pub async fn delete(&self, id: i32) -> Result<Option<PurchaseContract>, AppError> {
        let query = format!(
            "DELETE FROM purchase_contracts WHERE id = $1 RETURNING {}",
            CONTRACT_COLUMNS
        );

        let contract = sqlx::query_as::<_, PurchaseContract>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(contract)
    }
}
