//! Controlador genérico de tablas de definición
//!
//! Una sola implementación sirve a las 27 tablas declaradas en
//! `LOOKUP_RESOURCES`; los mensajes de error usan la etiqueta del recurso.

use sqlx::PgPool;
use tracing::info;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::common::DeletedResponse;
use crate::models::lookup::{
    CreateLookupRequest, Lookup, LookupResource, UpdateLookupRequest, UpdateMode,
};
use crate::repositories::lookup_repository::LookupRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct LookupController {
    repository: LookupRepository,
}

impl LookupController {
    pub fn new(pool: PgPool, resource: &'static LookupResource) -> Self {
        Self {
            repository: LookupRepository::new(pool, resource),
        }
    }

    pub async fn list(&self) -> Result<Vec<Lookup>, AppError> {
        self.repository.list_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Lookup, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(self.repository.resource().label))
    }

    pub async fn create(&self, request: CreateLookupRequest) -> Result<Lookup, AppError> {
        request.validate()?;

        let created = self
            .repository
            .create(&request.name, request.description.as_deref())
            .await?;

        info!(
            "✅ {} created: {} (id {})",
            self.repository.resource().label,
            created.name,
            created.id
        );

        Ok(created)
    }

    pub async fn update(&self, id: i32, request: UpdateLookupRequest) -> Result<Lookup, AppError> {
        request.validate()?;

        let resource = self.repository.resource();

        // en modo full-replace el nombre no puede omitirse
        if resource.update_mode == UpdateMode::FullReplace && request.name.is_none() {
            let mut errors = ValidationErrors::new();
            let mut error = ValidationError::new("required");
            error.message = Some("name is required".into());
            errors.add("name", error);
            return Err(errors.into());
        }

        self.repository
            .update(id, request.name.as_deref(), request.description.as_deref())
            .await?
            .ok_or_else(|| not_found_error(resource.label))
    }

    pub async fn delete(&self, id: i32) -> Result<DeletedResponse<Lookup>, AppError> {
        let label = self.repository.resource().label;

        let deleted = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found_error(label))?;

        info!("🗑️ {} deleted: id {}", label, id);

        Ok(DeletedResponse::new(label, deleted))
    }
}
