//! Repositorio genérico de tablas de definición
//!
//! Un único repositorio sirve a todas las tablas declaradas en
//! `LOOKUP_RESOURCES`. El nombre de tabla se interpola en el SQL porque
//! proviene exclusivamente de la tabla estática de descriptores; los
//! valores del cliente siempre viajan como parámetros bind.

use sqlx::PgPool;

use crate::models::lookup::{Lookup, LookupResource, UpdateMode};
use crate::utils::errors::AppError;

pub struct LookupRepository {
    pool: PgPool,
    resource: &'static LookupResource,
}

impl LookupRepository {
    pub fn new(pool: PgPool, resource: &'static LookupResource) -> Self {
        Self { pool, resource }
    }

    pub fn resource(&self) -> &'static LookupResource {
        self.resource
    }

    pub async fn list_all(&self) -> Result<Vec<Lookup>, AppError> {
        let query = format!(
            "SELECT id, name, description, created_at FROM {} ORDER BY id",
            self.resource.table
        );

        let rows = sqlx::query_as::<_, Lookup>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Lookup>, AppError> {
        let query = format!(
            "SELECT id, name, description, created_at FROM {} WHERE id = $1",
            self.resource.table
        );

        let row = sqlx::query_as::<_, Lookup>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn create(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<Lookup, AppError> {
        let query = format!(
            "INSERT INTO {} (name, description) VALUES ($1, $2) \
             RETURNING id, name, description, created_at",
            self.resource.table
        );

        let row = sqlx::query_as::<_, Lookup>(&query)
            .bind(name)
            .bind(description)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }

    /// FullReplace sobreescribe ambos campos (el controller garantiza que
    /// `name` llega); PartialMerge conserva el valor almacenado de los
    /// campos omitidos.
    pub async fn update(
        &self,
        id: i32,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Option<Lookup>, AppError> {
        let query = match self.resource.update_mode {
            UpdateMode::FullReplace => format!(
                "UPDATE {} SET name = $2, description = $3 WHERE id = $1 \
                 RETURNING id, name, description, created_at",
                self.resource.table
            ),
            UpdateMode::PartialMerge => format!(
                "UPDATE {} SET name = COALESCE($2, name), \
                 description = COALESCE($3, description) WHERE id = $1 \
                 RETURNING id, name, description, created_at",
                self.resource.table
            ),
        };

        let row = sqlx::query_as::<_, Lookup>(&query)
            .bind(id)
            .bind(name)
            .bind(description)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn delete(&self, id: i32) -> Result<Option<Lookup>, AppError> {
        let query = format!(
            "DELETE FROM {} WHERE id = $1 RETURNING id, name, description, created_at",
            self.resource.table
        );

        let row = sqlx::query_as::<_, Lookup>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }
}
