//! Controlador de contratos de compra

use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::models::common::DeletedResponse;
use crate::models::contract::{CreateContractRequest, PurchaseContract, UpdateContractRequest};
use crate::repositories::contract_repository::ContractRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct ContractController {
    repository: ContractRepository,
}

impl ContractController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ContractRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<PurchaseContract>, AppError> {
        self.repository.list_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<PurchaseContract, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Contract"))
    }

    pub async fn create(
        &self,
        request: CreateContractRequest,
    ) -> Result<PurchaseContract, AppError> {
        request.validate()?;

        if self
            .repository
            .contract_number_exists(&request.contract_number, None)
            .await?
        {
            return Err(conflict_error(
                "Contract",
                "contract number",
                &request.contract_number,
            ));
        }

        let contract = self.repository.create(&request).await?;

        info!("✅ Contract created: {} (id {})", contract.contract_number, contract.id);

        Ok(contract)
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateContractRequest,
    ) -> Result<PurchaseContract, AppError> {
        request.validate()?;

        if self
            .repository
            .contract_number_exists(&request.contract_number, Some(id))
            .await?
        {
            return Err(conflict_error(
                "Contract",
                "contract number",
                &request.contract_number,
            ));
        }

        self.repository
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("Contract"))
    }

    pub async fn delete(&self, id: i32) -> Result<DeletedResponse<PurchaseContract>, AppError> {
        let contract = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found_error("Contract"))?;

        info!("🗑️ Contract deleted: {} (id {})", contract.contract_number, id);

        Ok(DeletedResponse::new("Contract", contract))
    }
}
